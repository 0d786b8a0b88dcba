// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Classpath entry backends.
//!
//! Each backend implements `BundleSource` for one kind of classpath entry and
//! is selected by `SourceFactory`:
//!
//! ```text
//! classpath entry → SourceFactory → BundleSource → descriptor text → parser
//! ```
//!
//! # Available Backends
//!
//! - **ArchiveSource**: zip-format archives such as `.jar` files
//! - **DirectorySource**: plain directories such as compiled class output
//!
//! Entries that do not exist, or that are neither kind, are skipped.

mod archive;
mod directory;
mod factory;
mod scanner;

pub use archive::ArchiveSource;
pub use directory::DirectorySource;
pub use factory::SourceFactory;
pub use scanner::ClasspathScanner;
