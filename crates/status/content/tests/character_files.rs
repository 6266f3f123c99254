use std::path::PathBuf;

use status_content::{CharacterLoader, ConfigLoader, DataFormat};
use status_core::{
    Attribute, AttributeSet, CharacterBuilder, CharacterMeta, LowerBoundRng, MetaField, PcgRng,
    StatusConfig, Track, ValidationMode, Value,
};
use tempfile::TempDir;

const HERO_YAML: &str = r#"
Name: "Debug #0"
Race: DebugRace
Level: 1
EXP: 0
Magical_Level: 1
Magical_EXP: 0
Magical_Skill_Level: 1
Magical_Skill_EXP: 0
Age: 20
Gender: 1
Skills:
  Debug: debug skill
Str: 10
Agi: 10
Dex: 10
Int: 10
Luck: 10
Wis: 10
Will: 10
Vit: 10
Per: 10
End: 10
Res: 10
Sta: 10
Bra: 10
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_yaml_character() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "hero.yaml", HERO_YAML);

    let hero = CharacterLoader::load(&path, StatusConfig::default(), &mut LowerBoundRng).unwrap();

    assert_eq!(hero.meta().name(), Some("Debug #0"));
    assert_eq!(hero.meta().gender(), Some(1));
    assert_eq!(hero.meta().skills().collect::<Vec<_>>(), vec![("Debug", "debug skill")]);
    assert_eq!(hero.attributes().score(Attribute::Bravery), Some(10));
    assert!(hero.derived().max_hit_point.is_available());
}

#[test]
fn missing_fields_are_repaired_unless_strict() {
    let dir = TempDir::new().unwrap();
    let trimmed: String = HERO_YAML
        .lines()
        .filter(|line| !line.starts_with("Age:") && !line.starts_with("Luck:"))
        .map(|line| format!("{line}\n"))
        .collect();
    let path = write(&dir, "hero.yml", &trimmed);

    let hero = CharacterLoader::load(&path, StatusConfig::default(), &mut LowerBoundRng).unwrap();
    assert_eq!(hero.meta().int(MetaField::Age), Some(0));
    assert_eq!(hero.attributes().score(Attribute::Luck), Some(0));

    let strict = StatusConfig::default().with_validation_mode(ValidationMode::Strict);
    let err = CharacterLoader::load(&path, strict, &mut LowerBoundRng).unwrap_err();
    assert!(format!("{err:#}").contains("invalid character data"));
}

#[test]
fn invalid_file_reports_every_failure() {
    let dir = TempDir::new().unwrap();
    let broken = HERO_YAML
        .replace("Gender: 1", "Gender: 9")
        .replace("Str: 10", "Str: strong");
    let path = write(&dir, "broken.yaml", &broken);

    let err =
        CharacterLoader::load(&path, StatusConfig::default(), &mut LowerBoundRng).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Str"), "{message}");
    assert!(message.contains("Gender"), "{message}");
}

#[test]
fn save_and_reload_in_every_format() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "hero.yaml", HERO_YAML);
    let mut hero =
        CharacterLoader::load(&source, StatusConfig::default(), &mut PcgRng::new(1)).unwrap();
    let _ = hero.gain_experience(500, &mut PcgRng::new(2));
    let _ = hero.gain_track_experience(Track::MagicalSkill, 40, &mut PcgRng::new(3));

    for format in [DataFormat::Ron, DataFormat::Toml, DataFormat::Yaml] {
        let path = dir.path().join(format!("saved.{}", format.extension()));
        CharacterLoader::save(&path, &hero).unwrap();

        let reloaded =
            CharacterLoader::load(&path, StatusConfig::default(), &mut PcgRng::new(4)).unwrap();
        assert_eq!(reloaded.serialize(), hero.serialize(), "{format}");
    }
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "hero.json", "{}");
    assert!(CharacterLoader::load(&path, StatusConfig::default(), &mut LowerBoundRng).is_err());
}

#[test]
fn dump_reports_the_failed_record() {
    let meta = CharacterMeta::named("Debug #0", "DebugRace");
    let hero = CharacterBuilder::new(meta, AttributeSet::uniform(10))
        .build(&mut LowerBoundRng)
        .unwrap();

    let (_, _, derived) = hero.serialize_full();
    assert_eq!(derived.get("Accuracy"), Some(&Value::NotAvailable));

    let err = DataFormat::Toml.dump(&derived).unwrap_err();
    assert!(err.value.contains("Accuracy"));
    assert!(DataFormat::Ron.dump(&derived).is_ok());
}

#[test]
fn config_file_drives_validation_mode() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "status.toml",
        "validation_mode = \"strict\"\ngrowth_min = 2\ngrowth_max = 2\n",
    );
    let config = ConfigLoader::load(&path).unwrap();
    assert_eq!(config.validation_mode, ValidationMode::Strict);

    let source = write(&dir, "hero.yaml", HERO_YAML);
    let mut hero = CharacterLoader::load(&source, config, &mut PcgRng::new(8)).unwrap();
    let _ = hero.level_up(&mut PcgRng::new(8));
    assert_eq!(hero.attributes().score(Attribute::Strength), Some(12));
    assert_eq!(hero.attributes().score(Attribute::Luck), Some(10));
}
