pub mod source;

pub use source::BundleSource;
