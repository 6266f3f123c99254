use status_content::{RegistryError, RegistryKind, RegistrySet};
use status_core::{ClassifiedError, ErrorSeverity, Value};
use tempfile::TempDir;

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for kind in RegistryKind::ALL {
        std::fs::create_dir(dir.path().join(kind.default_dir())).unwrap();
    }
    std::fs::write(
        dir.path().join("races/human.yaml"),
        "name: Human\ndescription: Adaptable and short-lived.\nlifespan: 80\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("skills/slash.ron"),
        r#"{"name": "Slash", "description": "A quick cut.", "cost": 3}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("skills/slash.toml"), "name = \"Shadowed\"\n").unwrap();
    std::fs::write(dir.path().join("items/potion.toml"), "name = \"Potion\"\nheal = 25\n").unwrap();
    dir
}

#[test]
fn loads_entries_by_id() {
    let dir = data_dir();
    let registries = RegistrySet::from_data_dir(dir.path()).unwrap();

    let human = registries.lookup(RegistryKind::Race, "human").unwrap();
    assert_eq!(human.name(), "Human");
    assert_eq!(human.description(), Some("Adaptable and short-lived."));
    assert_eq!(human.get("lifespan"), Some(&Value::Int(80)));

    let potion = registries.items().unwrap().load_by_id("potion").unwrap();
    assert_eq!(potion.get("heal"), Some(&Value::Int(25)));
}

#[test]
fn ron_is_tried_before_toml() {
    let dir = data_dir();
    let registries = RegistrySet::from_data_dir(dir.path()).unwrap();

    let slash = registries.lookup(RegistryKind::Skill, "slash").unwrap();
    assert_eq!(slash.name(), "Slash");
    assert_eq!(registries.skills().unwrap().ids().unwrap(), vec!["slash".to_owned()]);
}

#[test]
fn missing_entry_is_not_found() {
    let dir = data_dir();
    let registries = RegistrySet::from_data_dir(dir.path()).unwrap();

    for id in ["dwarf", "../races/human"] {
        let err = registries.lookup(RegistryKind::Race, id).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }), "{id}: {err}");
        assert_eq!(err.error_code(), "REGISTRY_NOT_FOUND");
    }
}

#[test]
fn malformed_entry_is_a_parse_error() {
    let dir = data_dir();
    std::fs::write(dir.path().join("magic/fireball.toml"), "name = ").unwrap();
    let registries = RegistrySet::from_data_dir(dir.path()).unwrap();

    let err = registries.lookup(RegistryKind::Magic, "fireball").unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
}

#[test]
fn shared_directory_is_rejected_at_build() {
    let dir = data_dir();
    let shared = dir.path().join("races");

    let err = RegistrySet::builder()
        .races(&shared)
        .magic(shared.join("."))
        .build()
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateDirectory { .. }));
}
