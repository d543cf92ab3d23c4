//! Integration tests for partdb-cli
//!
//! A config file on disk drives field construction the same way the
//! binary does it.

use partdb_cli::cli::FieldArgs;
use partdb_cli::commands::build_field;
use partdb_cli::Config;
use partdb_forms::{DataMapper, SubmittedFields};

fn write_config(contents: &str) -> (tempfile::TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    let config = Config::load_from(&path).unwrap();
    (dir, config)
}

#[test]
fn test_custom_unit_from_file() {
    let (_dir, config) = write_config(
        r#"
        [units.henry]
        symbol = "H"
        use_si_prefix = true
        "#,
    );

    let args = FieldArgs {
        unit: Some("henry".to_string()),
        ..FieldArgs::default()
    };
    let field = build_field(&args, &config).unwrap();

    let view = field.to_view(Some(0.0047));
    assert_eq!(view.prefix, Some(-3));

    let model = field
        .from_view(&SubmittedFields::new("4.7", Some("m")))
        .unwrap()
        .unwrap();
    assert!((model - 0.0047).abs() < 1e-15);
    assert_eq!(field.build_view(None).unit.as_deref(), Some("H"));
}

#[test]
fn test_policy_from_file() {
    let (_dir, config) = write_config(
        r#"
        [prefix_policy]
        min_mantissa = 0.1
        max_mantissa = 100.0
        "#,
    );

    let args = FieldArgs {
        unit: Some("ohm".to_string()),
        ..FieldArgs::default()
    };
    let view = build_field(&args, &config).unwrap().to_view(Some(500.0));
    assert_eq!(view.prefix, Some(3));
}

#[test]
fn test_invalid_policy_in_file() {
    let (_dir, config) = write_config(
        r#"
        [prefix_policy]
        min_mantissa = 10.0
        max_mantissa = 5.0
        "#,
    );

    assert!(build_field(&FieldArgs::default(), &config).is_err());
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[settings\ncolor = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}
