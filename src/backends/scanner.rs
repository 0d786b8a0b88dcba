// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Walks a classpath in order and hands each descriptor it finds to a callback.

use std::path::Path;

use crate::backends::SourceFactory;
use crate::config::ScanOptions;
use crate::descriptor::{parse_descriptor, BundleDescriptor};
use crate::errors::ResolveError;
use crate::observability::messages::scan::{DescriptorLoaded, ScanCompleted};
use crate::observability::messages::StructuredLog;

/// Reads descriptor resources out of classpath entries.
#[derive(Debug, Clone, Default)]
pub struct ClasspathScanner {
    options: ScanOptions,
}

impl ClasspathScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Visit `entries` in order, parsing every descriptor found.
    ///
    /// `on_descriptor` is called with each parsed descriptor before the next
    /// entry is read, so a failure stops the scan immediately. Returns the
    /// number of descriptors handed to the callback.
    pub fn scan<P, F>(&self, entries: &[P], mut on_descriptor: F) -> Result<usize, ResolveError>
    where
        P: AsRef<Path>,
        F: FnMut(BundleDescriptor) -> Result<(), ResolveError>,
    {
        let mut descriptor_count = 0;

        for entry in entries {
            let Some(source) = SourceFactory::from_entry(entry.as_ref(), &self.options) else {
                continue;
            };
            let Some(text) = source.read_descriptor(&self.options.descriptor_path)? else {
                continue;
            };

            let descriptor = parse_descriptor(source.label(), &text)?;
            let loaded_msg = DescriptorLoaded {
                source: source.label(),
                processor_count: descriptor.len(),
            };

            let span = loaded_msg.span("merge_descriptor");
            let _guard = span.enter();
            loaded_msg.log();

            on_descriptor(descriptor)?;
            descriptor_count += 1;
        }

        ScanCompleted {
            entry_count: entries.len(),
            descriptor_count,
        }
        .log();

        Ok(descriptor_count)
    }

    /// Parse every descriptor on the classpath, in classpath order.
    pub fn read_all<P: AsRef<Path>>(&self, entries: &[P]) -> Result<Vec<BundleDescriptor>, ResolveError> {
        let mut descriptors = Vec::new();
        self.scan(entries, |descriptor| {
            descriptors.push(descriptor);
            Ok(())
        })?;
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DescriptorError;
    use std::fs;

    fn bundle_dir(root: &Path, name: &str, descriptor: Option<&str>) -> std::path::PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("META-INF")).unwrap();
        if let Some(text) = descriptor {
            fs::write(dir.join("META-INF/spoon-bundle.properties"), text).unwrap();
        }
        dir
    }

    #[test]
    fn test_read_all_keeps_classpath_order() {
        let root = tempfile::tempdir().unwrap();
        let second = bundle_dir(
            root.path(),
            "second",
            Some("processor.Bar.path = p.Bar\nprocessor.Bar.consumes = beta\n"),
        );
        let first = bundle_dir(
            root.path(),
            "first",
            Some("processor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\n"),
        );
        let empty = bundle_dir(root.path(), "empty", None);
        let missing = root.path().join("missing.jar");

        let scanner = ClasspathScanner::default();
        let descriptors = scanner.read_all(&[first.clone(), missing, empty, second.clone()]).unwrap();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].source, first.display().to_string());
        assert_eq!(descriptors[1].source, second.display().to_string());
    }

    #[test]
    fn test_invalid_descriptor_stops_scan() {
        let root = tempfile::tempdir().unwrap();
        let bad = bundle_dir(root.path(), "bad", Some("bogus = 1\n"));
        let good = bundle_dir(
            root.path(),
            "good",
            Some("processor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\n"),
        );

        let mut seen = 0;
        let result = ClasspathScanner::default().scan(&[bad.clone(), good], |_| {
            seen += 1;
            Ok(())
        });

        assert_eq!(seen, 0);
        match result {
            Err(ResolveError::Descriptor(DescriptorError::UnrecognizedProperty {
                source_label,
                key,
                line,
            })) => {
                assert_eq!(source_label, bad.display().to_string());
                assert_eq!(key, "bogus");
                assert_eq!(line, 1);
            }
            other => panic!("expected unrecognized property, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_descriptor_path() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("custom");
        fs::create_dir_all(dir.join("conf")).unwrap();
        fs::write(
            dir.join("conf/bundle.properties"),
            "processor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\n",
        )
        .unwrap();

        let options = ScanOptions {
            descriptor_path: "conf/bundle.properties".into(),
            ..ScanOptions::default()
        };
        let descriptors = ClasspathScanner::new(options).read_all(&[dir]).unwrap();
        assert_eq!(descriptors.len(), 1);
    }
}
