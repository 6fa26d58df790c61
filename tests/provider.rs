use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pokebattle::data::moves::{DamageCategory, MoveData};
use pokebattle::data::species::{CreatureData, Stats};
use pokebattle::error::{ProviderError, ResourceKind};
use pokebattle::provider::{CachingProvider, DataProvider, InMemoryProvider};

/// Delegates to an in-memory provider and counts every call.
struct CountingProvider {
    inner: InMemoryProvider,
    creature_calls: AtomicUsize,
    move_calls: AtomicUsize,
}

impl CountingProvider {
    fn new(inner: InMemoryProvider) -> Self {
        Self {
            inner,
            creature_calls: AtomicUsize::new(0),
            move_calls: AtomicUsize::new(0),
        }
    }
}

impl DataProvider for CountingProvider {
    fn fetch_creature(&self, name: &str) -> Result<CreatureData, ProviderError> {
        self.creature_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_creature(name)
    }

    fn fetch_move(&self, name: &str) -> Result<MoveData, ProviderError> {
        self.move_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_move(name)
    }
}

fn eevee() -> CreatureData {
    CreatureData {
        id: 133,
        name: "eevee".to_string(),
        types: vec!["normal".to_string()],
        stats: Stats { hp: 55, attack: 55, defense: 50, special_attack: 45, special_defense: 65, speed: 55 },
        moves: vec!["tackle".to_string()],
    }
}

#[test]
fn caching_provider_fetches_each_name_once() {
    let inner = InMemoryProvider::default()
        .with_creature(eevee())
        .with_move(MoveData::new("tackle", 40, "normal", DamageCategory::Physical));
    let provider = CachingProvider::new(CountingProvider::new(inner));

    let first = provider.fetch_creature("eevee").expect("eevee");
    let second = provider.fetch_creature("EEVEE").expect("eevee again");
    assert_eq!(first, second);
    assert_eq!(provider.inner().creature_calls.load(Ordering::SeqCst), 1);

    provider.fetch_move("tackle").expect("tackle");
    provider.fetch_move("Tackle").expect("tackle again");
    assert_eq!(provider.inner().move_calls.load(Ordering::SeqCst), 1);
    assert!(provider.creature_cache().contains("eevee"));
    assert!(provider.move_cache().contains("tackle"));
}

#[test]
fn caching_provider_does_not_remember_failures() {
    let provider = CachingProvider::new(CountingProvider::new(InMemoryProvider::default()));

    for _ in 0..2 {
        let err = provider.fetch_creature("missingno").unwrap_err();
        assert!(err.is_not_found());
    }
    assert_eq!(provider.inner().creature_calls.load(Ordering::SeqCst), 2);
    assert!(provider.creature_cache().is_empty());
}

#[test]
fn in_memory_provider_reports_missing_resources() {
    let provider = InMemoryProvider::default();
    assert_eq!(
        provider.fetch_creature("MissingNo").unwrap_err(),
        ProviderError::NotFound { kind: ResourceKind::Creature, name: "missingno".to_string() }
    );
    assert_eq!(
        provider.fetch_move("struggle").unwrap_err(),
        ProviderError::NotFound { kind: ResourceKind::Move, name: "struggle".to_string() }
    );
}

#[test]
fn bundled_provider_is_usable_behind_an_arc() {
    let provider: Arc<dyn DataProvider> = Arc::new(InMemoryProvider::load_default().expect("bundled data"));
    let pikachu = provider.fetch_creature("Pikachu").expect("pikachu");
    assert_eq!(pikachu.id, 25);
    assert_eq!(provider.fetch_move("thunderbolt").expect("thunderbolt").power, 90);
}
