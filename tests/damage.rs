use pokebattle::core::damage::{calculate_damage, resolve_attack};
use pokebattle::core::factory::create_creature;
use pokebattle::core::moves::MoveResolver;
use pokebattle::core::state::Creature;
use pokebattle::data::moves::{DamageCategory, MoveData};
use pokebattle::data::species::CreatureDatabase;
use pokebattle::data::type_chart::TypeChart;
use pokebattle::error::{ProviderError, ResourceKind};
use pokebattle::provider::InMemoryProvider;

fn bundled(name: &str) -> Creature {
    let db = CreatureDatabase::load_default().expect("load species");
    create_creature(db.get(name).expect("species exists")).expect("create creature")
}

#[test]
fn flamethrower_against_venusaur() {
    let provider = InMemoryProvider::load_default().expect("bundled data");
    let resolver = MoveResolver::new(&provider);
    let charizard = bundled("charizard");
    let venusaur = bundled("venusaur");

    let attack = resolve_attack(&resolver, &TypeChart::new(), &charizard, &venusaur).expect("resolve");

    // 90 * 109 / 100 * 2.0
    assert_eq!(attack.move_name.as_deref(), Some("flamethrower"));
    assert_eq!(attack.multiplier, 2.0);
    assert_eq!(attack.damage, 196);
}

#[test]
fn splash_still_deals_one() {
    let provider = InMemoryProvider::load_default().expect("bundled data");
    let resolver = MoveResolver::new(&provider);
    let magikarp = bundled("magikarp");
    let snorlax = bundled("snorlax");

    let damage = calculate_damage(&resolver, &TypeChart::new(), &magikarp, &snorlax).expect("resolve");
    assert_eq!(damage, 1);
}

#[test]
fn immune_defender_takes_the_minimum() {
    let provider = InMemoryProvider::default()
        .with_move(MoveData::new("body-slam", 85, "normal", DamageCategory::Physical));
    let resolver = MoveResolver::new(&provider);
    let mut snorlax = bundled("snorlax");
    snorlax.moves = vec!["body-slam".to_string()];
    let gengar = bundled("gengar");

    let attack = resolve_attack(&resolver, &TypeChart::new(), &snorlax, &gengar).expect("resolve");
    assert_eq!(attack.multiplier, 0.0);
    assert_eq!(attack.damage, 1);
}

#[test]
fn creature_without_moves_deals_nothing() {
    // An empty provider proves no lookup happens.
    let provider = InMemoryProvider::default();
    let resolver = MoveResolver::new(&provider);
    let mut pikachu = bundled("pikachu");
    pikachu.moves.clear();
    let squirtle = bundled("squirtle");

    let attack = resolve_attack(&resolver, &TypeChart::new(), &pikachu, &squirtle).expect("resolve");
    assert_eq!(attack.move_name, None);
    assert_eq!(attack.damage, 0);
}

#[test]
fn missing_move_is_reported() {
    let provider = InMemoryProvider::default();
    let resolver = MoveResolver::new(&provider);
    let pikachu = bundled("pikachu");
    let squirtle = bundled("squirtle");

    let err = calculate_damage(&resolver, &TypeChart::new(), &pikachu, &squirtle).unwrap_err();
    assert_eq!(err, ProviderError::not_found(ResourceKind::Move, "thunderbolt"));
}
