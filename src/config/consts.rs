/// Relative location of the descriptor resource inside every classpath entry.
pub const DESCRIPTOR_PATH: &str = "META-INF/spoon-bundle.properties";
/// File extensions (lowercase, without the dot) treated as zip-format archives.
pub const DEFAULT_ARCHIVE_EXTENSIONS: &[&str] = &["jar", "zip"];
/// First segment of every recognized descriptor key.
pub const PROCESSOR_KEY_PREFIX: &str = "processor";
