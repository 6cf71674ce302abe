//! Conversions between human readable token units and integer base units.

use {
    bigdecimal::BigDecimal,
    num::{BigInt, One, Zero},
};

/// Converts a decimal token amount (e.g. `1.5`) into base units with the
/// specified number of decimals. Returns `None` if the scaled amount still has
/// a fractional part.
pub fn decimal_to_units(d: &BigDecimal, decimals: u32) -> Option<BigInt> {
    let scaled = d * BigDecimal::new(BigInt::one(), -i64::from(decimals));
    let (int, exp) = scaled.as_bigint_and_exponent();
    let factor = BigInt::from(10_u8).pow(u32::try_from(exp.unsigned_abs()).ok()?);
    if exp <= 0 {
        return Some(int * factor);
    }
    (&int % &factor).is_zero().then(|| int / factor)
}

/// Converts an amount in base units into a decimal token amount.
pub fn units_to_decimal(units: &BigInt, decimals: u32) -> BigDecimal {
    BigDecimal::new(units.clone(), i64::from(decimals))
}
