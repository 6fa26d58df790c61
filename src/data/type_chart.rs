use std::collections::HashMap;

/// Every elemental type a creature or move may carry.
pub const TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

pub fn is_known_type(type_name: &str) -> bool {
    let key = type_name.to_lowercase();
    TYPE_NAMES.iter().any(|t| *t == key)
}

/// Sparse attacking-type x defending-type multiplier table.
///
/// Pairs that are not listed are neutral (1.0). Lookups are case-insensitive.
#[derive(Clone, Debug)]
pub struct TypeChart {
    chart: HashMap<(String, String), f32>,
}

impl TypeChart {
    /// The standard chart for all eighteen types.
    pub fn new() -> Self {
        let mut chart = Self::empty();
        let mut add_entry = |attacking: &str, super_effective: &[&str], not_very: &[&str], no_effect: &[&str]| {
            for defending in super_effective {
                chart.insert(attacking, defending, 2.0);
            }
            for defending in not_very {
                chart.insert(attacking, defending, 0.5);
            }
            for defending in no_effect {
                chart.insert(attacking, defending, 0.0);
            }
        };

        add_entry("normal", &[], &["rock", "steel"], &["ghost"]);
        add_entry("fire", &["grass", "ice", "bug", "steel"], &["fire", "water", "rock", "dragon"], &[]);
        add_entry("water", &["fire", "ground", "rock"], &["water", "grass", "dragon"], &[]);
        add_entry("electric", &["water", "flying"], &["electric", "grass", "dragon"], &["ground"]);
        add_entry("grass", &["water", "ground", "rock"], &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"], &[]);
        add_entry("ice", &["grass", "ground", "flying", "dragon"], &["fire", "water", "ice", "steel"], &[]);
        add_entry("fighting", &["normal", "ice", "rock", "dark", "steel"], &["poison", "flying", "psychic", "bug", "fairy"], &["ghost"]);
        add_entry("poison", &["grass", "fairy"], &["poison", "ground", "rock", "ghost"], &["steel"]);
        add_entry("ground", &["fire", "electric", "poison", "rock", "steel"], &["grass", "bug"], &["flying"]);
        add_entry("flying", &["grass", "fighting", "bug"], &["electric", "rock", "steel"], &[]);
        add_entry("psychic", &["fighting", "poison"], &["psychic", "steel"], &["dark"]);
        add_entry("bug", &["grass", "psychic", "dark"], &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"], &[]);
        add_entry("rock", &["fire", "ice", "flying", "bug"], &["fighting", "ground", "steel"], &[]);
        add_entry("ghost", &["psychic", "ghost"], &["dark"], &["normal"]);
        add_entry("dragon", &["dragon"], &["steel"], &["fairy"]);
        add_entry("dark", &["psychic", "ghost"], &["fighting", "dark", "fairy"], &[]);
        add_entry("steel", &["ice", "rock", "fairy"], &["fire", "water", "electric", "steel"], &[]);
        add_entry("fairy", &["fighting", "dragon", "dark"], &["fire", "poison", "steel"], &[]);

        chart
    }

    /// A chart with no entries; every pair is neutral.
    pub fn empty() -> Self {
        Self {
            chart: HashMap::new(),
        }
    }

    pub fn from_entries(entries: &[(&str, &str, f32)]) -> Self {
        let mut chart = Self::empty();
        for (attacking, defending, multiplier) in entries {
            chart.insert(attacking, defending, *multiplier);
        }
        chart
    }

    pub fn insert(&mut self, attacking: &str, defending: &str, multiplier: f32) {
        self.chart
            .insert((attacking.to_lowercase(), defending.to_lowercase()), multiplier);
    }

    pub fn multiplier(&self, attacking: &str, defending: &str) -> f32 {
        self.chart
            .get(&(attacking.to_lowercase(), defending.to_lowercase()))
            .copied()
            .unwrap_or(1.0)
    }

    /// Product of the multipliers over every (attacking, defending) pair.
    /// Either side being empty yields 1.0.
    pub fn effectiveness(&self, attacking_types: &[String], defending_types: &[String]) -> f32 {
        if attacking_types.is_empty() || defending_types.is_empty() {
            return 1.0;
        }
        let mut multiplier = 1.0;
        for attacking in attacking_types {
            for defending in defending_types {
                multiplier *= self.multiplier(attacking, defending);
            }
        }
        multiplier
    }

    pub fn len(&self) -> usize {
        self.chart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}
