use pokebattle::data::moves::{DamageCategory, MoveDatabase};
use std::path::Path;

#[test]
fn load_full_move_database() {
    let path = Path::new("data/moves.yaml");
    let db = MoveDatabase::load_from_yaml_file(path).expect("load moves.yaml");
    assert!(!db.as_map().is_empty(), "move database should not be empty");

    let tackle = db.get("tackle").expect("expected tackle in full database");
    assert_eq!(tackle.power, 40);
    assert_eq!(tackle.move_type, "normal");
    assert_eq!(tackle.category, DamageCategory::Physical);
}

#[test]
fn bundled_moves_cover_every_bundled_species() {
    let moves = MoveDatabase::load_default().expect("load moves");
    let species = pokebattle::data::species::CreatureDatabase::load_default().expect("load species");
    for creature in species.as_map().values() {
        for move_name in &creature.moves {
            assert!(moves.get(move_name).is_some(), "{} is missing move {}", creature.name, move_name);
        }
    }
}

#[test]
fn status_moves_load_as_physical_with_zero_power() {
    let db = MoveDatabase::load_default().expect("load moves");
    let splash = db.get("Splash").expect("splash exists");
    assert_eq!(splash.power, 0);
    assert_eq!(splash.category, DamageCategory::Physical);

    let flamethrower = db.get("flamethrower").expect("flamethrower exists");
    assert_eq!(flamethrower.category, DamageCategory::Special);
    assert_eq!(flamethrower.power, 90);
}
