//! The conversion engine: per-ingredient volume/weight transformations.
//!
//! Arithmetic stays in exact rationals from parsing to the final
//! three-decimal rounding, so chained conversions round-trip precisely.
//! The density entry is passed in explicitly; there is no per-ingredient
//! state to construct.

use crate::error::{ConvertError, Result};
use crate::units::{resolve, Dimension};
use ingredient_density::DensityEntry;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// A validated conversion request.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub ingredient: String,
    pub amount: BigRational,
    pub from_unit: String,
    pub to_unit: String,
    /// Recipe scale factor applied to the converted amount.
    pub multiplier: BigRational,
}

/// The converted, rounded amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Magnitude rounded to three decimal places.
    pub magnitude: f64,
    pub unit: String,
}

/// Convert the requested amount for the named ingredient.
///
/// Looks the ingredient up in the density table and delegates to
/// [`convert_with_entry`].
pub fn convert(request: &ConversionRequest) -> Result<Conversion> {
    let entry = ingredient_density::lookup(&request.ingredient)
        .ok_or_else(|| ConvertError::UnknownIngredient(request.ingredient.clone()))?;
    convert_with_entry(entry, request)
}

/// Convert the requested amount using the given density entry.
///
/// Same-dimension requests are plain linear unit conversions; requests
/// that cross between the entry's reference dimension and weight go
/// through the density ratio. Anything else is incompatible.
pub fn convert_with_entry(entry: &DensityEntry, request: &ConversionRequest) -> Result<Conversion> {
    let incompatible = || ConvertError::IncompatibleUnits {
        from: request.from_unit.clone(),
        to: request.to_unit.clone(),
    };

    let from = resolve(&request.from_unit).ok_or_else(incompatible)?;
    let to = resolve(&request.to_unit).ok_or_else(incompatible)?;

    // Express the amount in the source dimension's canonical unit.
    let canonical = &request.amount * &from.to_canonical;

    let bridged = if from.dimension == to.dimension {
        canonical
    } else {
        bridge(entry, canonical, from.dimension, to.dimension).ok_or_else(incompatible)?
    };

    let result = &(&bridged / &to.to_canonical) * &request.multiplier;

    Ok(Conversion {
        magnitude: round_to_3dp(&result),
        unit: request.to_unit.clone(),
    })
}

/// Cross-dimension step, in canonical units (cups/ounces/items).
///
/// The entry bridges exactly one dimension pair: its reference unit's
/// dimension and mass. Returns `None` for any other pair, and for a zero
/// reference quantity (nothing in the table has one, but a zero divisor
/// must not panic).
fn bridge(
    entry: &DensityEntry,
    canonical: BigRational,
    from: Dimension,
    to: Dimension,
) -> Option<BigRational> {
    let reference = resolve(&entry.reference_unit)?;
    let reference_canonical = &entry.reference_amount * &reference.to_canonical;

    if from == reference.dimension && to == Dimension::Mass {
        if reference_canonical.is_zero() {
            return None;
        }
        Some(&(&canonical * &entry.reference_mass_oz) / &reference_canonical)
    } else if from == Dimension::Mass && to == reference.dimension {
        if entry.reference_mass_oz.is_zero() {
            return None;
        }
        Some(&(&canonical * &reference_canonical) / &entry.reference_mass_oz)
    } else {
        None
    }
}

/// Round an exact rational to three decimal places, then widen to f64.
///
/// The rounding happens in rational space (ties away from zero) so the
/// f64 step never perturbs the chosen thousandth.
fn round_to_3dp(value: &BigRational) -> f64 {
    let thousand = BigRational::from_integer(BigInt::from(1000));
    let rounded = (value * &thousand).round() / thousand;
    rounded.to_f64().unwrap_or(f64::NAN)
}
