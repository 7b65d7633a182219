//! Fixed unit vocabulary for kitchen conversions.
//!
//! Each unit maps to its dimension and an exact ratio to that dimension's
//! canonical unit: cups for volume, ounces for weight. US customary
//! measure throughout (1 cup = 16 tbsp = 48 tsp = 8 fl oz).

use num_bigint::BigInt;
use num_rational::BigRational;

/// The dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Volume,
    Mass,
    /// Whole-item units such as "large" eggs or garlic cloves.
    Count,
}

/// A unit resolved against the fixed vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUnit {
    pub dimension: Dimension,
    /// Exact ratio of one of this unit to the dimension's canonical unit.
    pub to_canonical: BigRational,
}

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Grams per international avoirdupois ounce (28.349523125), exact.
pub fn grams_per_oz() -> BigRational {
    ratio(28_349_523_125, 1_000_000_000)
}

/// Resolve a unit name against the fixed vocabulary.
///
/// The vocabulary is a closed set: the request units (`oz`, `gram`,
/// `floz`, `cup`, `tsp`, `tbsp`) plus the long-form spellings the density
/// table uses for its reference units. Unknown names return `None`.
pub fn resolve(name: &str) -> Option<ResolvedUnit> {
    let (dimension, to_canonical) = match name {
        "cup" | "cups" => (Dimension::Volume, ratio(1, 1)),
        "tbsp" | "tablespoon" | "tablespoons" => (Dimension::Volume, ratio(1, 16)),
        "tsp" | "teaspoon" | "teaspoons" => (Dimension::Volume, ratio(1, 48)),
        "floz" => (Dimension::Volume, ratio(1, 8)),
        "oz" => (Dimension::Mass, ratio(1, 1)),
        "gram" => (Dimension::Mass, grams_per_oz().recip()),
        "large" => (Dimension::Count, ratio(1, 1)),
        _ => return None,
    };
    Some(ResolvedUnit {
        dimension,
        to_canonical,
    })
}
