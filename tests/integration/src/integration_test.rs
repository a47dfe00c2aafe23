//! End-to-end tests across the workspace
//!
//! Exercises the complete flow: locate -> parse -> resolve -> query.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use serde_json::json;
use tplconf_content::{Format, parse_str};
use tplconf_core::{ConfigFile, LoaderOptions, Mapping, Resolver};
use tplconf_fs::NormalizedPath;
use tplconf_test_utils::{TestConfigDir, fixture_tree};

fn quiet() -> LoaderOptions {
    LoaderOptions::default().print_when_create(false)
}

fn load(dir: &TestConfigDir, name: &str) -> Mapping {
    let file = dir.write_tree(name, &fixture_tree());
    ConfigFile::load_with(&file, quiet()).unwrap().entries().clone()
}

#[test]
fn test_formats_resolve_identically() {
    let dir = TestConfigDir::new();

    let from_json = load(&dir, "a.json");
    let from_yaml = load(&dir, "a.yaml");
    let from_yml = load(&dir, "a.yml");

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_yaml, from_yml);
}

#[test]
fn test_full_fixture_resolution() {
    let dir = TestConfigDir::new();
    let entries = load(&dir, "config.yaml");

    assert_eq!(
        json!(entries),
        json!({
            "a": 10,
            "b": 20,
            "c": {"d": 30, "e": {"f": 40}},
            "g": [1, 2, 3, 4, 5],
            "h": "10",
            "i": "[1, 2, 3, 4, 5]",
            "j": ["10", "20", "{{e}}", ["10"]],
            "k": {"l": "['10', '20', '{{e}}', ['10']]", "m": [{"ee": "{{e}}"}]}
        })
    );
}

#[test]
fn test_loader_matches_manual_pipeline() {
    let dir = TestConfigDir::new();
    let file = dir.write_tree("config.json", &fixture_tree());

    let source = std::fs::read_to_string(&file).unwrap();
    let raw = parse_str(&source, Format::Json).unwrap();
    let manual = Resolver::default().resolve_all(&raw, &Mapping::new());

    let config = ConfigFile::load_with(dir.root(), quiet()).unwrap();

    assert_eq!(config.entries(), &manual);
    assert_eq!(config.source_path(), &NormalizedPath::new(&file).absolute());
}

#[rstest]
#[case("config.yaml")]
#[case("config.yml")]
#[case("config.json")]
fn test_directory_and_file_agree(#[case] name: &str) {
    let dir = TestConfigDir::new();
    let file = dir.write_tree(name, &fixture_tree());

    let by_dir = ConfigFile::load_with(dir.root(), quiet()).unwrap();
    let by_file = ConfigFile::load_with(&file, quiet()).unwrap();

    assert_eq!(by_dir.entries(), by_file.entries());
}

#[test]
fn test_reload_is_idempotent() {
    let dir = TestConfigDir::new();
    dir.write_tree("config.yml", &fixture_tree());
    let mut config = ConfigFile::load_with(dir.root(), quiet()).unwrap();

    let first = config.reload().unwrap().entries().clone();
    let second = config.reload().unwrap().entries().clone();

    assert_eq!(first, second);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Database {
    host: String,
    port: u16,
    url: String,
}

#[test]
fn test_application_settings_scenario() {
    let dir = TestConfigDir::new();
    dir.write(
        "settings.yaml",
        r#"
app_name: billing
database:
    host: db.internal
    port: 5432
    url: "postgres://{{host}}:{{port}}/{{app_name}}"
paths:
    root: "{{DEPLOY_ROOT}}/{{app_name}}"
    logs: "{{DEPLOY_ROOT}}/{{app_name}}/logs"
banner: "{{app_name}} on {{ENVIRONMENT}}"
"#,
    );

    let options = quiet()
        .name("settings")
        .define("DEPLOY_ROOT", "/srv")
        .define("ENVIRONMENT", "staging");
    let config = ConfigFile::load_with(dir.root(), options).unwrap();

    // `host` and `port` are nested inside `database`, which is resolved
    // before it is part of the accumulated entries, so they stay literal.
    let database: Database = config.get_as("database").unwrap().unwrap();
    assert_eq!(
        database,
        Database {
            host: "db.internal".into(),
            port: 5432,
            url: "postgres://{{host}}:{{port}}/billing".into(),
        }
    );

    assert_eq!(config.get_str("paths.root").unwrap().as_deref(), Some("/srv/billing"));
    assert_eq!(config.get_str("paths.logs").unwrap().as_deref(), Some("/srv/billing/logs"));
    assert_eq!(config.get_str("banner").unwrap().as_deref(), Some("billing on staging"));
}

#[test]
fn test_nested_keys_of_earlier_entries_bind_by_name() {
    let dir = TestConfigDir::new();
    dir.write_tree(
        "config.json",
        &json!({
            "database": {"host": "db.internal", "port": 5432},
            "url": "postgres://{{host}}:{{port}}"
        }),
    );

    let config = ConfigFile::load_with(dir.root(), quiet()).unwrap();

    assert_eq!(config.get("url"), Some(json!("postgres://db.internal:5432")));
}
