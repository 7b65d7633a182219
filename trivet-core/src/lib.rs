//! Conversion engine for the trivet kitchen calculator.
//!
//! Converts ingredient quantities between volume units (cup, tbsp, tsp,
//! floz) and weight units (oz, gram) using the per-ingredient density
//! data from the `ingredient-density` crate. All intermediate arithmetic
//! is exact rational; results are rounded to three decimals at the end.

pub mod convert;
pub mod error;
pub mod handler;
pub mod units;

pub use convert::{convert, convert_with_entry, Conversion, ConversionRequest};
pub use error::{ConvertError, Result};
pub use handler::{handle, handle_json, ConversionArgs, NO_RESULT, RESULT_KEY};
