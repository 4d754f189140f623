//! # Quantum Conversion
//!
//! One SUPRA is 10^8 quantums. Amounts travel on-chain as integer quantums
//! and are shown to users as truncated decimal strings.

/// Number of decimals in the SUPRA coin.
pub const SUPRA_DECIMALS: u32 = 8;

/// Display precision used when the caller does not pick one.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

const QUANTS_PER_SUPRA: u128 = 10u128.pow(SUPRA_DECIMALS);

/// Convert a SUPRA amount to quantums.
///
/// The product is rounded to the nearest quantum so float noise such as
/// `1.1 * 1e8 = 110000000.00000001` does not leak into the result. Negative
/// and NaN inputs map to `0`, overflow saturates at `u64::MAX`.
///
/// ```rust
/// use lib_utils::to_supra_quant;
///
/// assert_eq!(to_supra_quant(1.5), 150_000_000);
/// ```
pub fn to_supra_quant(amount: f64) -> u64 {
    // `as` saturates and maps NaN to 0
    (amount * QUANTS_PER_SUPRA as f64).round() as u64
}

/// Format a quantum amount as SUPRA with `decimals` places.
///
/// Digits beyond `decimals` are truncated, never rounded.
///
/// ```rust
/// use lib_utils::from_supra_quant;
///
/// assert_eq!(from_supra_quant(150_000_000, 2), "1.50");
/// assert_eq!(from_supra_quant(199_999_999, 2), "1.99");
/// ```
pub fn from_supra_quant(amount: u128, decimals: u32) -> String {
    let whole = amount / QUANTS_PER_SUPRA;
    let fraction = amount % QUANTS_PER_SUPRA;

    if decimals == 0 {
        return whole.to_string();
    }

    let digits = if decimals <= SUPRA_DECIMALS {
        let kept = fraction / 10u128.pow(SUPRA_DECIMALS - decimals);
        format!("{:0>width$}", kept, width = decimals as usize)
    } else {
        let extra = (decimals - SUPRA_DECIMALS) as usize;
        format!("{:0>8}{}", fraction, "0".repeat(extra))
    };

    format!("{}.{}", whole, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_supra_quant() {
        assert_eq!(to_supra_quant(1.5), 150_000_000);
        assert_eq!(to_supra_quant(0.0), 0);
        assert_eq!(to_supra_quant(1.1), 110_000_000);
        assert_eq!(to_supra_quant(0.00000001), 1);
    }

    #[test]
    fn test_to_supra_quant_degenerate_inputs() {
        assert_eq!(to_supra_quant(-3.0), 0);
        assert_eq!(to_supra_quant(f64::NAN), 0);
        assert_eq!(to_supra_quant(f64::INFINITY), u64::MAX);
    }

    #[test]
    fn test_from_supra_quant_truncates() {
        assert_eq!(from_supra_quant(150_000_000, DEFAULT_DISPLAY_DECIMALS), "1.50");
        assert_eq!(from_supra_quant(199_999_999, 2), "1.99");
        assert_eq!(from_supra_quant(199_999_999, 4), "1.9999");
        assert_eq!(from_supra_quant(5, 2), "0.00");
        assert_eq!(from_supra_quant(123_456_789, 0), "1");
    }

    #[test]
    fn test_from_supra_quant_full_and_extra_precision() {
        assert_eq!(from_supra_quant(123_456_789, 8), "1.23456789");
        assert_eq!(from_supra_quant(1, 10), "0.0000000100");
    }

    #[test]
    fn test_round_trip_truncates() {
        let quants = to_supra_quant(2.345678);
        assert_eq!(from_supra_quant(quants as u128, 2), "2.34");
        assert_eq!(from_supra_quant(quants as u128, 6), "2.345678");
    }

    #[test]
    fn test_large_amounts() {
        let max = u64::MAX as u128;
        assert_eq!(from_supra_quant(max, 2), "184467440737.09");
    }
}
