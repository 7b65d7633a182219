//! Ingredient density lookup for volume/weight conversion.
//!
//! This crate provides density data for common cooking ingredients: each
//! entry relates a reference volume (or count, for things like eggs) to
//! its weight in ounces, enabling conversion between volume and weight
//! measurements.
//!
//! Data follows the King Arthur Baking ingredient weight chart.
//!
//! # Example
//!
//! ```
//! use ingredient_density::lookup;
//!
//! // 1 cup of all-purpose flour weighs 4.25 oz
//! let entry = lookup("All-Purpose Flour").unwrap();
//! assert_eq!(entry.reference_unit, "cup");
//! ```

mod density_table;
mod rational;

pub use density_table::{ingredient_names, lookup, DensityEntry};
pub use rational::parse_rational;
