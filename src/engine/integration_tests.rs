// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use crate::config::{OrphanPolicy, ResolverConfig, ScanOptions};
    use crate::engine::ProcessorResolver;
    use crate::errors::{DescriptorError, RegistryError, ResolveError};

    const DESCRIPTOR: &str = "META-INF/spoon-bundle.properties";

    /// Write a jar holding `descriptor` (and a dummy class file).
    fn jar(root: &Path, name: &str, descriptor: &str) -> PathBuf {
        let path = root.join(name);
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        writer
            .start_file("eb2501/Dummy.class", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"\xca\xfe\xba\xbe").unwrap();
        writer.start_file(DESCRIPTOR, SimpleFileOptions::default()).unwrap();
        writer.write_all(descriptor.as_bytes()).unwrap();
        writer.finish().unwrap();
        path
    }

    /// Write a class-output directory holding `descriptor`.
    fn classes_dir(root: &Path, name: &str, descriptor: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("META-INF")).unwrap();
        fs::write(dir.join(DESCRIPTOR), descriptor).unwrap();
        dir
    }

    const FOO: &str = r#"
# Foo rewrites alpha into beta
processor.Foo.path = p.Foo
processor.Foo.consumes = alpha
processor.Foo.produces = beta
"#;

    const BAR: &str = r#"
processor.Bar.path = p.Bar
processor.Bar.consumes = beta
"#;

    #[test]
    fn test_two_bundles_producer_before_consumer() {
        let root = tempfile::tempdir().unwrap();
        let bundle1 = jar(root.path(), "bundle1.jar", FOO);
        let bundle2 = jar(root.path(), "bundle2.jar", BAR);

        let order = ProcessorResolver::default()
            .resolve_classpath(&[bundle2, bundle1])
            .unwrap();
        assert_eq!(Vec::<String>::from(order), vec!["p.Foo", "p.Bar"]);
    }

    #[test]
    fn test_mixed_archive_and_directory_entries() {
        let root = tempfile::tempdir().unwrap();
        let bundle1 = jar(root.path(), "bundle1.jar", FOO);
        let classes = classes_dir(root.path(), "classes", BAR);

        let order = ProcessorResolver::default()
            .resolve_classpath(&[classes, bundle1])
            .unwrap();
        assert_eq!(order.0, vec!["p.Foo", "p.Bar"]);
    }

    #[test]
    fn test_missing_entry_has_no_effect() {
        let root = tempfile::tempdir().unwrap();
        let bundle1 = jar(root.path(), "bundle1.jar", FOO);
        let bundle2 = jar(root.path(), "bundle2.jar", BAR);
        let missing = root.path().join("not-there.jar");
        let resolver = ProcessorResolver::default();

        let without = resolver
            .resolve_classpath(&[bundle1.clone(), bundle2.clone()])
            .unwrap();
        let with = resolver
            .resolve_classpath(&[bundle1, missing, bundle2])
            .unwrap();
        assert_eq!(without, with);
    }

    #[test]
    fn test_latin1_descriptor_resolves() {
        let root = tempfile::tempdir().unwrap();
        let classes = root.path().join("classes");
        fs::create_dir_all(classes.join("META-INF")).unwrap();
        fs::write(
            classes.join(DESCRIPTOR),
            b"# caf\xe9 processors\nprocessor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\n",
        )
        .unwrap();

        let order = ProcessorResolver::default()
            .resolve_classpath(&[classes])
            .unwrap();
        assert_eq!(order.0, vec!["p.Foo"]);
    }

    #[test]
    fn test_entries_without_descriptor_are_ignored() {
        let root = tempfile::tempdir().unwrap();
        let plain = root.path().join("plain.jar");
        let mut writer = ZipWriter::new(File::create(&plain).unwrap());
        writer
            .start_file("META-INF/MANIFEST.MF", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"Manifest-Version: 1.0\n").unwrap();
        writer.finish().unwrap();
        let readme = root.path().join("README.txt");
        fs::write(&readme, "not a classpath entry").unwrap();

        let order = ProcessorResolver::default()
            .resolve_classpath(&[plain, readme])
            .unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_consumes_defined_in_two_bundles() {
        let root = tempfile::tempdir().unwrap();
        let first = jar(
            root.path(),
            "first.jar",
            "processor.One.path = p.One\nprocessor.One.consumes = alpha\n",
        );
        let second = jar(
            root.path(),
            "second.jar",
            "processor.Two.path = p.Two\nprocessor.Two.consumes = alpha\n",
        );

        let error = ProcessorResolver::default()
            .resolve_classpath(&[first.clone(), second.clone()])
            .unwrap_err();
        match error {
            ResolveError::Registry(RegistryError::ConsumesAlreadyDefined {
                source_label,
                previous_source,
                ..
            }) => {
                assert_eq!(source_label, second.display().to_string());
                assert_eq!(previous_source, first.display().to_string());
            }
            other => panic!("expected consumes collision, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_produce_aborts_resolution() {
        let root = tempfile::tempdir().unwrap();
        let good = jar(root.path(), "good.jar", BAR);
        let bad = jar(
            root.path(),
            "bad.jar",
            "processor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\nprocessor.Foo.produces = beta,beta\n",
        );

        let error = ProcessorResolver::default()
            .resolve_classpath(&[good, bad])
            .unwrap_err();
        assert!(matches!(
            error,
            ResolveError::Descriptor(DescriptorError::DuplicateProduce { .. })
        ));
    }

    #[test]
    fn test_orphan_produce_policy() {
        let root = tempfile::tempdir().unwrap();
        let bundle = jar(
            root.path(),
            "bundle.jar",
            "processor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\nprocessor.Foo.produces = gamma\n",
        );

        let lenient = ProcessorResolver::default()
            .resolve_classpath(&[bundle.clone()])
            .unwrap();
        assert_eq!(lenient.0, vec!["p.Foo"]);

        let strict = ProcessorResolver::new(ScanOptions::default(), OrphanPolicy::Reject);
        assert!(matches!(
            strict.resolve_classpath(&[bundle]),
            Err(ResolveError::OrphanProduce { .. })
        ));
    }

    #[test]
    fn test_cycle_across_bundles() {
        let root = tempfile::tempdir().unwrap();
        let first = jar(
            root.path(),
            "first.jar",
            "processor.A.path = p.A\nprocessor.A.consumes = alpha\nprocessor.A.produces = beta\n",
        );
        let second = jar(
            root.path(),
            "second.jar",
            "processor.B.path = p.B\nprocessor.B.consumes = beta\nprocessor.B.produces = alpha\n",
        );

        let error = ProcessorResolver::default()
            .resolve_classpath(&[first, second])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cyclic produces detected: alpha -> beta -> alpha"
        );
    }

    #[test]
    fn test_every_declared_processor_appears_once() {
        let root = tempfile::tempdir().unwrap();
        let core = jar(
            root.path(),
            "core.jar",
            r#"
processor.Types.path = eb2501.TypeProcessor
processor.Types.consumes = type
processor.Types.produces = typeref, template
processor.Refs.path = eb2501.TypeRefProcessor
processor.Refs.consumes = typeref
"#,
        );
        let extra = classes_dir(
            root.path(),
            "extra",
            r#"
processor.Templates.path = eb2501.TemplateProcessor
processor.Templates.consumes = template
processor.Templates.produces = typeref
processor.Logging.path = eb2501.LoggingProcessor
processor.Logging.consumes = logged
"#,
        );

        let order = ProcessorResolver::default()
            .resolve_classpath(&[core, extra])
            .unwrap();

        assert_eq!(order.len(), 4);
        let mut sorted: Vec<String> = order.clone().into();
        sorted.sort();
        assert_eq!(
            sorted,
            vec![
                "eb2501.LoggingProcessor",
                "eb2501.TemplateProcessor",
                "eb2501.TypeProcessor",
                "eb2501.TypeRefProcessor",
            ]
        );

        let position = |path: &str| order.position(path).unwrap();
        assert!(position("eb2501.TypeProcessor") < position("eb2501.TypeRefProcessor"));
        assert!(position("eb2501.TypeProcessor") < position("eb2501.TemplateProcessor"));
        assert!(position("eb2501.TemplateProcessor") < position("eb2501.TypeRefProcessor"));
    }

    #[test]
    fn test_resolver_from_config() {
        let root = tempfile::tempdir().unwrap();
        let bundle = root.path().join("bundle.spoon");
        {
            let mut writer = ZipWriter::new(File::create(&bundle).unwrap());
            writer
                .start_file("conf/processors.properties", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(FOO.as_bytes()).unwrap();
            writer.finish().unwrap();
        }

        let cfg = ResolverConfig {
            classpath: vec![bundle],
            descriptor_path: "conf/processors.properties".into(),
            archive_extensions: vec!["spoon".into()],
            orphan_policy: OrphanPolicy::Ignore,
        };

        let order = ProcessorResolver::from_config(&cfg)
            .resolve_classpath(&cfg.classpath)
            .unwrap();
        assert_eq!(order.0, vec!["p.Foo"]);
    }
}
