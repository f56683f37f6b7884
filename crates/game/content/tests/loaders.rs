use std::io::Write;
use std::path::PathBuf;

use battle_content::{ConfigLoader, Scenario, ScenarioLoader};
use battle_core::{ActorKind, BattleConfig, CardinalDirection, OccupantPrecedence, Position};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn bundled_duel_matches_builtin_actors() {
    let loaded = ScenarioLoader::load(&data_dir().join("duel.ron")).unwrap();
    let builtin = Scenario::duel();

    assert_eq!(loaded.actors, builtin.actors);
    assert_eq!(loaded.hit_effect, builtin.hit_effect);
    assert_eq!(loaded.script, vec![CardinalDirection::Up]);
    assert_eq!(loaded.map_objects.len(), 1);
    assert!(loaded.map_objects[0].collision);
}

#[test]
fn bundled_config_is_the_default() {
    let config = ConfigLoader::load(&data_dir().join("battle.toml")).unwrap();
    assert_eq!(config, BattleConfig::default());
}

#[test]
fn minimal_scenario_fills_defaults() {
    let file = write_temp(
        r#"(
            actors: [
                (id: "solo", kind: boy, health: 3, x: 0, y: 0),
            ],
        )"#,
    );

    let scenario = ScenarioLoader::load(file.path()).unwrap();
    assert!(scenario.map_objects.is_empty());
    assert!(scenario.script.is_empty());

    let state = scenario.into_state().unwrap();
    let solo = state.actor(&"solo".into()).unwrap();
    assert_eq!(solo.kind, ActorKind::Boy);
    assert_eq!(solo.position, Position::new(0, 0));
}

#[test]
fn duplicate_actor_ids_are_rejected() {
    let error = ScenarioLoader::parse(
        r#"(
            actors: [
                (id: "p3", kind: boy, health: 3, x: 0, y: 0),
                (id: "p3", kind: camouflage_green, health: 1, x: 16, y: 0),
            ],
        )"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("more than once"));
}

#[test]
fn empty_scenario_is_rejected() {
    assert!(ScenarioLoader::parse("(actors: [])").is_err());
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let file = write_temp("occupant_precedence = \"object_first\"\n");
    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.tile_size, BattleConfig::DEFAULT_TILE_SIZE);
    assert_eq!(config.occupant_precedence, OccupantPrecedence::ObjectFirst);
}

#[test]
fn non_positive_tile_size_is_rejected() {
    assert!(ConfigLoader::parse("tile_size = 0").is_err());
}

#[test]
fn missing_file_reports_path() {
    let error = ScenarioLoader::load(&data_dir().join("nope.ron")).unwrap_err();
    assert!(error.to_string().contains("nope.ron"));
}
