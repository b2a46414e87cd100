//! # Fixed-Point Units
//!
//! Currency and shares share one scale: 18 fractional digits. `1 ether`
//! and `1 share` are both `10^18` base units.
//!
//! All helpers use unsigned integer arithmetic with floor semantics.

use crate::entities::U256;
use crate::errors::UnitError;

/// Number of fractional digits in the shared fixed-point scale.
pub const DECIMALS: usize = 18;

/// `10^18`, the fixed-point scale.
pub const WAD: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Computes `floor(a * b / denominator)` without intermediate overflow.
///
/// Returns `None` when `denominator` is zero or the quotient does not fit
/// in 256 bits.
#[must_use]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let product = a.full_mul(b);
    let quotient = product / primitive_types::U512::from(denominator);
    U256::try_from(quotient).ok()
}

/// Parses a decimal string such as `"0.0006"` into 18-decimal base units.
///
/// # Errors
///
/// Returns [`UnitError`] for malformed input, more than 18 fractional
/// digits, or values above `U256::MAX`.
pub fn parse_ether(input: &str) -> Result<U256, UnitError> {
    let trimmed = input.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(UnitError::InvalidFormat(input.to_string()));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(UnitError::InvalidFormat(input.to_string()));
    }
    if fraction.len() > DECIMALS {
        return Err(UnitError::TooPrecise {
            places: fraction.len(),
        });
    }

    let whole_units = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole).map_err(|_| UnitError::Overflow)?
    };

    let mut padded = fraction.to_string();
    padded.extend(std::iter::repeat('0').take(DECIMALS - fraction.len()));
    let fraction_units = U256::from_dec_str(&padded).map_err(|_| UnitError::Overflow)?;

    whole_units
        .checked_mul(WAD)
        .and_then(|w| w.checked_add(fraction_units))
        .ok_or(UnitError::Overflow)
}

/// Renders base units as a decimal string, e.g. `600000000000000` -> `"0.0006"`.
#[must_use]
pub fn format_ether(value: U256) -> String {
    let whole = value / WAD;
    let fraction = value % WAD;
    if fraction.is_zero() {
        return format!("{whole}.0");
    }
    let digits = format!("{:0>width$}", fraction.to_string(), width = DECIMALS);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

// =============================================================================
// TESTS
// =============================================================================
