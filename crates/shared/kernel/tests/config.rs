use config::Map;
use qgen_kernel::config::{ConfigError, load_config, load_config_with_env};
use qgen_kernel::domain::config::QgenConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
}

#[test]
fn file_values_are_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qgen.toml");
    fs::write(
        &path,
        "templates_root = \"/srv/etl\"\n\n[log]\nlevel = \"info\"\nfilter = \"qgen_assembler=debug\"\n",
    )
    .unwrap();

    let cfg: QgenConfig = load_config_with_env(Some(&path), vars(&[])).unwrap();

    assert_eq!(cfg.templates_root, PathBuf::from("/srv/etl"));
    assert_eq!(cfg.log.level, "info");
    assert_eq!(cfg.log.filter.as_deref(), Some("qgen_assembler=debug"));
    assert!(cfg.log.directory.is_none());
}

#[test]
fn environment_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qgen.toml");
    fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();

    let cfg: QgenConfig = load_config_with_env(
        Some(&path),
        vars(&[("QGEN__LOG__LEVEL", "trace"), ("QGEN__TEMPLATES_ROOT", "/opt/sql")]),
    )
    .unwrap();

    assert_eq!(cfg.log.level, "trace");
    assert_eq!(cfg.templates_root, PathBuf::from("/opt/sql"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result: Result<QgenConfig, ConfigError> = load_config(Some(&path));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn no_sources_yields_defaults() {
    let cfg: QgenConfig = load_config_with_env(None::<&str>, vars(&[])).unwrap();
    assert_eq!(cfg.templates_root, PathBuf::from("."));
    assert_eq!(cfg.log.level, "warn");
}
