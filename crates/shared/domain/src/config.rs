use serde::Deserialize;
use std::path::PathBuf;

/// Top-level generator configuration. Every key has a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QgenConfig {
    /// Directory under which pipeline template directories are resolved.
    pub templates_root: PathBuf,
    pub log: LogConfig,
}

/// Diagnostics settings. Logs always go to stderr, never stdout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Optional module-directed filter, e.g. `qgen_assembler=debug`.
    pub filter: Option<String>,
    /// Enables rolling file logs in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for QgenConfig {
    fn default() -> Self {
        Self { templates_root: PathBuf::from("."), log: LogConfig::default() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, directory: None }
    }
}
