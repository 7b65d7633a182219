//! Request boundary for the conversion engine.
//!
//! Callers hand over a flat map of string arguments and get back a
//! single-key map: `{"conversion": "226.796 gram(s)"}`. Every failure,
//! whatever its internal kind, collapses to `{"conversion": "-"}` so the
//! caller never sees an uncaught fault or the error taxonomy.

use crate::convert::{convert, ConversionRequest};
use crate::error::{ConvertError, Result};
use ingredient_density::parse_rational;
use serde::Deserialize;
use std::collections::HashMap;

/// Key under which the formatted result (or sentinel) is returned.
pub const RESULT_KEY: &str = "conversion";

/// Sentinel value returned for any invalid request.
pub const NO_RESULT: &str = "-";

/// Raw string arguments for one conversion call.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionArgs {
    /// Ingredient name; underscores stand in for spaces from callers
    /// that cannot pass them.
    pub ingredient: String,
    /// Decimal ("1.5") or fraction ("3/4") quantity.
    pub amount: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Recipe scale factor, same formats as `amount`.
    #[serde(default = "default_multiplier")]
    pub multiplier: String,
}

fn default_multiplier() -> String {
    "1".to_string()
}

/// Handle one conversion call.
pub fn handle(args: &ConversionArgs) -> HashMap<String, String> {
    let formatted = match run(args) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::debug!(error = %err, "conversion failed");
            NO_RESULT.to_string()
        }
    };
    HashMap::from([(RESULT_KEY.to_string(), formatted)])
}

/// Handle a JSON argument object.
///
/// Missing or non-string fields get the sentinel response, same as
/// engine errors.
pub fn handle_json(args: &serde_json::Value) -> serde_json::Value {
    match serde_json::from_value::<ConversionArgs>(args.clone()) {
        Ok(args) => serde_json::json!(handle(&args)),
        Err(_) => serde_json::json!({ RESULT_KEY: NO_RESULT }),
    }
}

fn run(args: &ConversionArgs) -> Result<String> {
    let request = parse_args(args)?;
    let conversion = convert(&request)?;
    Ok(format!("{:.3} {}(s)", conversion.magnitude, conversion.unit))
}

/// Build a typed request from raw string arguments.
fn parse_args(args: &ConversionArgs) -> Result<ConversionRequest> {
    let amount = parse_rational(&args.amount)
        .ok_or_else(|| ConvertError::MalformedQuantity(args.amount.clone()))?;
    let multiplier = parse_rational(&args.multiplier)
        .ok_or_else(|| ConvertError::MalformedQuantity(args.multiplier.clone()))?;
    Ok(ConversionRequest {
        ingredient: args.ingredient.replace('_', " "),
        amount,
        from_unit: args.from_unit.clone(),
        to_unit: args.to_unit.clone(),
        multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(ingredient: &str, amount: &str, from: &str, to: &str) -> ConversionArgs {
        ConversionArgs {
            ingredient: ingredient.to_string(),
            amount: amount.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            multiplier: "1".to_string(),
        }
    }

    #[test]
    fn test_formatted_result() {
        let response = handle(&args("Water (default)", "1", "cup", "gram"));
        assert_eq!(response["conversion"], "226.796 gram(s)");
    }

    #[test]
    fn test_formatted_result_padded_to_three_decimals() {
        let response = handle(&args("All-Purpose Flour", "2", "cup", "oz"));
        assert_eq!(response["conversion"], "8.500 oz(s)");
    }

    #[test]
    fn test_underscores_normalized_to_spaces() {
        let response = handle(&args("Water_(default)", "1", "cup", "gram"));
        assert_eq!(response["conversion"], "226.796 gram(s)");
    }

    #[test]
    fn test_unknown_ingredient_is_sentinel() {
        let response = handle(&args("Nonexistent Item", "1", "cup", "gram"));
        assert_eq!(response["conversion"], "-");
    }

    #[test]
    fn test_malformed_amount_is_sentinel() {
        let response = handle(&args("Water (default)", "a lot", "cup", "gram"));
        assert_eq!(response["conversion"], "-");

        let response = handle(&args("Water (default)", "", "cup", "gram"));
        assert_eq!(response["conversion"], "-");
    }

    #[test]
    fn test_malformed_multiplier_is_sentinel() {
        let mut a = args("Water (default)", "1", "cup", "gram");
        a.multiplier = "double".to_string();
        let response = handle(&a);
        assert_eq!(response["conversion"], "-");
    }

    #[test]
    fn test_unrecognized_unit_is_sentinel() {
        let response = handle(&args("Water (default)", "1", "hogshead", "gram"));
        assert_eq!(response["conversion"], "-");
    }

    #[test]
    fn test_handle_json_roundtrip() {
        let response = handle_json(&json!({
            "ingredient": "Butter",
            "amount": "1",
            "from_unit": "tbsp",
            "to_unit": "gram",
        }));
        assert_eq!(response, json!({ "conversion": "14.175 gram(s)" }));
    }

    #[test]
    fn test_handle_json_multiplier_default_and_override() {
        let base = handle_json(&json!({
            "ingredient": "All-Purpose Flour",
            "amount": "1",
            "from_unit": "cup",
            "to_unit": "oz",
        }));
        assert_eq!(base, json!({ "conversion": "4.250 oz(s)" }));

        let tripled = handle_json(&json!({
            "ingredient": "All-Purpose Flour",
            "amount": "1",
            "from_unit": "cup",
            "to_unit": "oz",
            "multiplier": "3",
        }));
        assert_eq!(tripled, json!({ "conversion": "12.750 oz(s)" }));
    }

    #[test]
    fn test_handle_json_missing_field_is_sentinel() {
        let response = handle_json(&json!({
            "ingredient": "Butter",
            "amount": "1",
        }));
        assert_eq!(response, json!({ "conversion": "-" }));

        let response = handle_json(&json!("not an object"));
        assert_eq!(response, json!({ "conversion": "-" }));
    }
}
