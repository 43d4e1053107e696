//! Token amount scaling
//!
//! The ledger stores amounts as smallest-unit integers with 18 decimals.
//! Users type decimal strings; the UI shows rounded decimals.

use alloy_primitives::U256;

use crate::error::{DappError, DappResult};

/// Decimals of the token ledger
pub const TOKEN_DECIMALS: usize = 18;

/// Decimal places shown for balances
pub const BALANCE_PLACES: usize = 2;

/// Decimal places shown for project goals
pub const GOAL_PLACES: usize = 4;

/// Parse a user-entered decimal string into smallest units.
///
/// `"5"` becomes `5 * 10^18`, `"0.25"` becomes `25 * 10^16`. Signs,
/// exponents and more than 18 fractional digits are rejected.
pub fn parse_amount(input: &str) -> DappResult<U256> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DappError::Validation("amount is empty".to_string()));
    }

    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
        return Err(DappError::Validation(format!(
            "\"{}\" is not a decimal number",
            text
        )));
    }
    if frac.len() > TOKEN_DECIMALS {
        return Err(DappError::Validation(format!(
            "\"{}\" has more than {} decimal places",
            text, TOKEN_DECIMALS
        )));
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        parse_digits(whole)?
    };
    let frac = parse_digits(&format!("{:0<width$}", frac, width = TOKEN_DECIMALS))?;

    whole
        .checked_mul(pow10(TOKEN_DECIMALS))
        .and_then(|scaled| scaled.checked_add(frac))
        .ok_or_else(|| DappError::Validation(format!("\"{}\" is too large", text)))
}

/// Parse an amount that must be strictly positive
pub fn parse_positive_amount(input: &str) -> DappResult<U256> {
    let amount = parse_amount(input)?;
    if amount.is_zero() {
        return Err(DappError::Validation(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(amount)
}

/// Format smallest units as a decimal rounded half-up to `places`.
///
/// `2500000000000000000` with two places is `"2.50"`.
pub fn format_amount(value: U256, places: usize) -> String {
    let places = places.min(TOKEN_DECIMALS);
    let divisor = pow10(TOKEN_DECIMALS - places);
    let half = divisor / U256::from(2u64);
    let rounded = value
        .checked_add(half)
        .map(|v| v / divisor)
        .unwrap_or_else(|| value / divisor);

    if places == 0 {
        return rounded.to_string();
    }

    let scale = pow10(places);
    let whole = rounded / scale;
    let frac = (rounded % scale).to_string();
    format!("{}.{:0>width$}", whole, frac, width = places)
}

/// Lossy conversion for ratios shown in the UI
pub fn to_f64(value: U256) -> f64 {
    value.to_string().parse().unwrap_or(f64::INFINITY)
}

fn parse_digits(digits: &str) -> DappResult<U256> {
    digits
        .parse::<U256>()
        .map_err(|e| DappError::Validation(format!("\"{}\": {}", digits, e)))
}

// 10^18 is the largest power needed and still fits in a u64
fn pow10(exp: usize) -> U256 {
    U256::from(10u64.pow(exp as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(n: u64) -> U256 {
        U256::from(n) * pow10(TOKEN_DECIMALS)
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_amount("5").unwrap(), tokens(5));
        assert_eq!(parse_amount(" 12 ").unwrap(), tokens(12));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(
            parse_amount("0.25").unwrap(),
            U256::from(250_000_000_000_000_000u64)
        );
        assert_eq!(
            parse_amount(".5").unwrap(),
            U256::from(500_000_000_000_000_000u64)
        );
        assert_eq!(parse_amount("1.").unwrap(), tokens(1));
        assert_eq!(
            parse_amount("0.000000000000000001").unwrap(),
            U256::from(1u64)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "  ", ".", "-1", "1e3", "abc", "1.2.3", "0x10"] {
            let err = parse_amount(input).unwrap_err();
            assert!(matches!(err, DappError::Validation(_)), "{input:?}");
        }
        assert!(parse_amount("0.0000000000000000001").is_err());
    }

    #[test]
    fn test_parse_positive_rejects_zero() {
        assert!(parse_positive_amount("0").is_err());
        assert!(parse_positive_amount("0.0").is_err());
        assert_eq!(parse_positive_amount("3").unwrap(), tokens(3));
    }

    #[test]
    fn test_format_balance() {
        let value = U256::from(2_500_000_000_000_000_000u64);
        assert_eq!(format_amount(value, BALANCE_PLACES), "2.50");
        assert_eq!(format_amount(U256::ZERO, BALANCE_PLACES), "0.00");
        assert_eq!(format_amount(tokens(1234), BALANCE_PLACES), "1234.00");
    }

    #[test]
    fn test_format_rounds_half_up() {
        // 1.005 -> 1.01, 1.004999.. -> 1.00
        let value = U256::from(1_005_000_000_000_000_000u64);
        assert_eq!(format_amount(value, 2), "1.01");
        let value = U256::from(1_004_999_999_999_999_999u64);
        assert_eq!(format_amount(value, 2), "1.00");
        let value = U256::from(123_456_780_000_000_000u64);
        assert_eq!(format_amount(value, GOAL_PLACES), "0.1235");
    }

    #[test]
    fn test_format_edge_places() {
        let value = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_amount(value, 0), "2");
        assert_eq!(format_amount(value, 18), "1.500000000000000000");
        assert_eq!(format_amount(U256::MAX, 0).len(), 60);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(U256::from(150u64)), 150.0);
        assert_eq!(to_f64(tokens(2)), 2e18);
    }
}
