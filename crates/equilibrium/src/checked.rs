//! Width checked integer arithmetic emulating the reverting `uintN`
//! operations of the contract.

use {
    crate::Error,
    num::{BigInt, One, Signed, Zero},
};

pub const UINT256: u32 = 256;
pub const UINT248: u32 = 248;
pub const UINT112: u32 = 112;

/// Fails unless `0 <= value <= 2^bits - 1`.
pub fn validate_width(value: &BigInt, bits: u32) -> Result<(), Error> {
    if value.is_negative() || value.bits() > u64::from(bits) {
        return Err(Error::InvalidUint {
            value: value.clone(),
            bits,
        });
    }
    Ok(())
}

pub fn checked_add(a: &BigInt, b: &BigInt, bits: u32) -> Result<BigInt, Error> {
    let result = a + b;
    validate_width(&result, bits)?;
    Ok(result)
}

pub fn checked_sub(a: &BigInt, b: &BigInt, bits: u32) -> Result<BigInt, Error> {
    let result = a - b;
    validate_width(&result, bits)?;
    Ok(result)
}

pub fn checked_mul(a: &BigInt, b: &BigInt, bits: u32) -> Result<BigInt, Error> {
    let result = a * b;
    validate_width(&result, bits)?;
    Ok(result)
}

/// Division rounding up, `(numerator + denominator - 1) / denominator`, with
/// the quotient checked against `bits`.
///
/// The numerator is a full precision product and is not width checked, which
/// mirrors a 512-bit `mulDiv` in the contract.
pub fn ceil_div(numerator: &BigInt, denominator: &BigInt, bits: u32) -> Result<BigInt, Error> {
    if denominator.is_zero() {
        return Err(Error::ZeroDivision);
    }
    let result = (numerator + denominator - BigInt::one()) / denominator;
    validate_width(&result, bits)?;
    Ok(result)
}
