//! Static density table mapping ingredient names to reference measurements.
//!
//! Each entry records that `reference_amount` of `reference_unit` of the
//! ingredient weighs `reference_mass_oz` ounces, e.g. 1 cup of all-purpose
//! flour is 4.25 oz. Most entries are measured per cup; a handful use
//! tablespoons, teaspoons, or counts ("large" for eggs and garlic cloves).

use crate::rational::parse_rational;
use num_rational::BigRational;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One ingredient's volume-to-weight ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityEntry {
    /// How much of the reference unit was measured. Always positive.
    pub reference_amount: BigRational,
    /// The volume or count unit the ingredient was measured in.
    pub reference_unit: String,
    /// Weight of `reference_amount` of `reference_unit`, in ounces.
    pub reference_mass_oz: BigRational,
}

// =============================================================================
// Data loading
// =============================================================================

/// Raw JSON entry. Numbers are kept as strings so they can be parsed
/// into exact rationals instead of round-tripping through f64.
#[derive(Deserialize)]
struct RawEntry {
    amount: String,
    unit: String,
    ounces: String,
}

#[derive(Deserialize)]
struct DataFile {
    ingredients: HashMap<String, RawEntry>,
}

/// Embedded JSON data file.
static DENSITIES_JSON: &str = include_str!("data/densities.json");

/// Parsed density table, built once on first use.
static TABLE: LazyLock<HashMap<String, DensityEntry>> = LazyLock::new(|| {
    let data: DataFile =
        serde_json::from_str(DENSITIES_JSON).expect("densities.json should be valid JSON");
    data.ingredients
        .into_iter()
        .map(|(name, raw)| {
            let entry = DensityEntry {
                reference_amount: parse_rational(&raw.amount)
                    .expect("reference amount should be a valid rational"),
                reference_unit: raw.unit,
                reference_mass_oz: parse_rational(&raw.ounces)
                    .expect("reference mass should be a valid rational"),
            };
            (name, entry)
        })
        .collect()
});

// =============================================================================
// Public API
// =============================================================================

/// Look up the density entry for an ingredient name.
///
/// The match is byte-exact: no case folding, no fuzzy matching. Callers
/// that receive names with placeholder characters in place of spaces must
/// normalize before lookup.
pub fn lookup(name: &str) -> Option<&'static DensityEntry> {
    TABLE.get(name)
}

/// All supported ingredient names, sorted, for selection UIs.
pub fn ingredient_names() -> Vec<&'static str> {
    let mut names: Vec<&str> = TABLE.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

// =============================================================================
// Tests
// =============================================================================
