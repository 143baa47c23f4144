use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "qgen";
/// Prefix of environment overrides, e.g. `QGEN__LOG__LEVEL`.
pub const ENV_PREFIX: &str = "QGEN";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file overlaid with environment variables.
///
/// Layers, lowest precedence first:
/// 1. **File**: `path` if given (it must exist), otherwise `qgen.{toml,json,yaml,...}` in the
///    working directory if present.
/// 2. **Environment**: variables prefixed with `QGEN__`, nested keys separated by `__`
///    (e.g., `QGEN__LOG__LEVEL` maps to `log.level`).
///
/// Missing keys fall back to the `Default` of `T` when it uses `#[serde(default)]`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use qgen_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process
/// environment when `vars` is `Some`. Keys must still carry the `QGEN__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let explicit: Option<PathBuf> = path.map(|p| p.as_ref().to_path_buf());
    let file = explicit.as_deref().map_or_else(
        || File::with_name(DEFAULT_CONFIG_NAME).required(false),
        |p| File::from(p).required(true),
    );
    let origin = explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));

    let builder = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").source(vars));

    debug!("Loading config from {}", origin.display());

    let config = builder
        .build()
        .map_err(|source| ConfigError::Config {
            source,
            context: Some(format!("Failed to build config from {}", origin.display()).into()),
        })?
        .try_deserialize::<T>()
        .map_err(|source| ConfigError::Config {
            source,
            context: Some("Failed to deserialize config".into()),
        })?;

    Ok(config)
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
