//! Exact rational parsing for quantity strings.
//!
//! Quantities stay rational through the whole conversion pipeline, so
//! amounts are parsed digit-by-digit rather than going through f64.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Parse a quantity string into an exact rational.
///
/// Handles:
/// - Integers: "8" → 8
/// - Decimals: "2.5" → 5/2
/// - Fractions: "1/2" → 1/2
/// - Mixed numbers: "1 1/2" → 3/2
///
/// Returns `None` for empty or non-numeric input.
pub fn parse_rational(s: &str) -> Option<BigRational> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Mixed number: "1 1/2" or "2 3/4"
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() == 2 {
        let whole = parse_decimal(parts[0])?;
        let frac = parse_fraction(parts[1])?;
        return Some(whole + frac);
    }
    if parts.len() > 2 {
        return None;
    }

    if s.contains('/') {
        return parse_fraction(s);
    }

    parse_decimal(s)
}

/// Parse "numerator/denominator" with integer parts.
fn parse_fraction(s: &str) -> Option<BigRational> {
    let (numer, denom) = s.split_once('/')?;
    let numer: BigInt = numer.trim().parse().ok()?;
    let denom: BigInt = denom.trim().parse().ok()?;
    if denom.is_zero() {
        return None;
    }
    Some(BigRational::new(numer, denom))
}

/// Parse a decimal or integer literal into an exact rational.
///
/// "2.5" becomes 25/10; no intermediate float, so values like
/// "0.3333333333333333" survive exactly as written.
fn parse_decimal(s: &str) -> Option<BigRational> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let scale = BigInt::from(10u32).pow(frac_part.len() as u32);
    let mut numer: BigInt = if int_part.is_empty() {
        BigInt::zero()
    } else {
        int_part.parse().ok()?
    };
    numer *= &scale;
    if !frac_part.is_empty() {
        numer += frac_part.parse::<BigInt>().ok()?;
    }
    if negative {
        numer = -numer;
    }

    Some(BigRational::new(numer, scale))
}
