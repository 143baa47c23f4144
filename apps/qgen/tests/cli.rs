use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const DAILY_DIR: &str = "sql/search_derived/mobile_search_clients_daily_v1";
const STABLE_DIR: &str = "sql/search_derived/mobile_search_clients_daily_stable_v1";

fn write(root: &Path, dir: &str, name: &str, text: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), text).unwrap();
}

fn qgen(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qgen").unwrap();
    cmd.current_dir(cwd.path())
        .env_remove("QGEN__TEMPLATES_ROOT")
        .env_remove("QGEN__LOG__LEVEL")
        .env_remove("QGEN__LOG__FILTER")
        .env_remove("QGEN__LOG__DIRECTORY")
        .env_remove("RUST_LOG");
    cmd
}

fn daily_fixtures(root: &Path) {
    write(root, DAILY_DIR, "fenix_baseline.template.sql", "SELECT locale FROM {namespace}.baseline");
    write(
        root,
        DAILY_DIR,
        "fenix_metrics.template.sql",
        "SELECT '{namespace}' AS app, '{channel}' AS chan",
    );
}

#[test]
fn render_prints_both_ctes_to_stdout() {
    let cwd = tempdir().unwrap();
    let templates = tempdir().unwrap();
    daily_fixtures(templates.path());

    let expected = "\
WITH fenix_client_locale AS (
    SELECT locale FROM org_mozilla_fenix.baseline
UNION ALL
SELECT locale FROM org_mozilla_fenix_nightly.baseline
UNION ALL
SELECT locale FROM org_mozilla_fennec_aurora.baseline
UNION ALL
SELECT locale FROM org_mozilla_firefox_beta.baseline
UNION ALL
SELECT locale FROM org_mozilla_firefox.baseline
),
fenix_metrics AS (
    SELECT 'org_mozilla_fenix' AS app, 'beta' AS chan
UNION ALL
SELECT 'org_mozilla_fenix_nightly' AS app, 'nightly' AS chan
UNION ALL
SELECT 'org_mozilla_fennec_aurora' AS app, 'nightly' AS chan
UNION ALL
SELECT 'org_mozilla_firefox_beta' AS app, 'beta' AS chan
UNION ALL
SELECT 'org_mozilla_firefox' AS app, 'release' AS chan
)
";

    qgen(&cwd)
        .args(["render", "mobile_search_clients_daily", "--root"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn templates_root_can_come_from_environment() {
    let cwd = tempdir().unwrap();
    let templates = tempdir().unwrap();
    write(templates.path(), STABLE_DIR, "fenix_metrics.template.sql", "SELECT '{app_name}' FROM {namespace}");

    qgen(&cwd)
        .env("QGEN__TEMPLATES_ROOT", templates.path())
        .args(["render", "mobile_search_clients_daily_stable"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "WITH fenix_metrics AS (\n    SELECT 'Firefox Preview' FROM org_mozilla_fenix_stable\n",
        ))
        .stdout(predicate::str::ends_with("SELECT 'Fenix' FROM org_mozilla_firefox_stable\n)\n"))
        .stdout(predicate::str::contains("fenix_client_locale").not());
}

#[test]
fn templates_root_can_come_from_config_file() {
    let cwd = tempdir().unwrap();
    let templates = tempdir().unwrap();
    write(templates.path(), STABLE_DIR, "fenix_metrics.template.sql", "SELECT 1");

    let config = cwd.path().join("custom.toml");
    fs::write(&config, format!("templates_root = {:?}\n", templates.path().display().to_string()))
        .unwrap();

    qgen(&cwd)
        .arg("--config")
        .arg(&config)
        .args(["render", "mobile_search_clients_daily_stable"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WITH fenix_metrics AS (\n    SELECT 1\nUNION ALL\n"));
}

#[test]
fn missing_template_fails_with_path_and_no_output() {
    let cwd = tempdir().unwrap();
    let templates = tempdir().unwrap();
    write(templates.path(), DAILY_DIR, "fenix_baseline.template.sql", "SELECT {namespace}");

    qgen(&cwd)
        .args(["render", "mobile_search_clients_daily", "--root"])
        .arg(templates.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("fenix_metrics.template.sql"));
}

#[test]
fn unknown_placeholder_fails_without_output() {
    let cwd = tempdir().unwrap();
    let templates = tempdir().unwrap();
    write(templates.path(), STABLE_DIR, "fenix_metrics.template.sql", "SELECT {unknown_field}");

    qgen(&cwd)
        .args(["render", "mobile_search_clients_daily_stable", "--root"])
        .arg(templates.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown placeholder '{unknown_field}'"));
}

#[test]
fn unknown_pipeline_fails() {
    let cwd = tempdir().unwrap();

    qgen(&cwd)
        .args(["render", "desktop_search_clients_daily"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pipeline 'desktop_search_clients_daily'"));
}

#[test]
fn logs_stay_off_stdout() {
    let cwd = tempdir().unwrap();
    let templates = tempdir().unwrap();
    write(templates.path(), STABLE_DIR, "fenix_metrics.template.sql", "SELECT 1");

    qgen(&cwd)
        .env("QGEN__LOG__LEVEL", "info")
        .args(["render", "mobile_search_clients_daily_stable", "--root"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WITH fenix_metrics AS ("))
        .stderr(predicate::str::contains("Assembled pipeline"));
}

#[test]
fn list_shows_both_pipelines() {
    let cwd = tempdir().unwrap();

    qgen(&cwd)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("mobile_search_clients_daily "))
        .stdout(predicate::str::contains("mobile_search_clients_daily_stable"));
}

#[test]
fn no_arguments_prints_help() {
    let cwd = tempdir().unwrap();

    qgen(&cwd).assert().failure().stderr(predicate::str::contains("Usage"));
}
