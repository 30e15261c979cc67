//! Config file loading tests

use fstrips_config::{ConfigError, FstripsConfig};
use fstrips_types::{Theory, assign};

use crate::common::Counters;

#[test]
fn config_file_drives_language_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[language]
name = "logistics"
theories = ["arithmetic"]

[operators]
assign = ":="
assign_inverted = "=:"
"#,
    )
    .unwrap();

    let config = FstripsConfig::load_from(&path).unwrap().unwrap();
    let mut lang = config.build_language().unwrap();
    assert_eq!(lang.name(), "logistics");
    assert_eq!(lang.theories(), &[Theory::Arithmetic]);
    assert!(lang.get_predicate("=").is_none());

    let truck = lang.sort("truck").unwrap();
    let real = lang.get_sort("Real").unwrap().clone();
    let fuel = lang.function("fuel", &[truck.clone()], &real).unwrap();
    let t1 = lang.constant("t1", &truck).unwrap();
    let t2 = lang.constant("t2", &truck).unwrap();
    let fuel_t1 = fstrips_types::CompoundTerm::new(&fuel, vec![t1.into()]).unwrap();
    let fuel_t2 = fstrips_types::CompoundTerm::new(&fuel, vec![t2.into()]).unwrap();

    let effect = lang.apply_operator("=:", fuel_t2.clone(), fuel_t1.clone()).unwrap();
    assert_eq!(effect, assign(fuel_t1, fuel_t2).unwrap());
}

#[test]
fn duplicate_operator_symbols_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[operators]\nassign = \"<<\"\nassign_inverted = \"<<\"\n").unwrap();

    let err = FstripsConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("duplicate operator '<<'"));
}

#[test]
fn defaults_match_facade_defaults() {
    let from_config = FstripsConfig::default().build_language().unwrap();
    let c = Counters::new();
    assert_eq!(from_config.theories(), c.lang.theories());
    assert_eq!(
        from_config.operators().handlers().len(),
        c.lang.operators().handlers().len()
    );
}
