//! The two branches of the equilibrium curve.
//!
//! `f` prices the side of the curve where the traded reserve is at or below
//! its equilibrium point. `f_inverse` solves the quadratic form of the same
//! curve for the side above the equilibrium point. Every division rounds up so
//! that rounding never works in the trader's favour.

use {
    crate::{
        Error,
        PRECISION,
        PRECISION_U64,
        checked::{UINT248, UINT256, ceil_div, checked_add, checked_mul, validate_width},
        sqrt::ceil_sqrt,
        word::{Int256, Uint256},
    },
    num::{BigInt, One, Signed},
};

/// Returns the reserve `y` on the curve for a reserve `x <= x0`.
///
/// ```text
/// v = ceil(px * (x0 - x) * (c * x + (1 - c) * x0) / (x * 1e18))
/// y = y0 + ceil(v / py)
/// ```
///
/// The two factors of the numerator are computed in wrapping 256-bit
/// arithmetic and multiplied at full precision; `v` must fit 248 bits.
pub fn f(
    x: &BigInt,
    px: &BigInt,
    py: &BigInt,
    x0: &BigInt,
    y0: &BigInt,
    c: &BigInt,
) -> Result<BigInt, Error> {
    let precision = Uint256::from(PRECISION_U64);
    let x_word = Uint256::from_big_int(x)?;
    let x0_word = Uint256::from_big_int(x0)?;
    let c_word = Uint256::from_big_int(c)?;

    let distance = Uint256::from_big_int(&(x0 - x))?;
    let scaled_distance = Uint256::from_big_int(px)?.wrapping_mul(distance);
    let weight = c_word
        .wrapping_mul(x_word)
        .wrapping_add(precision.wrapping_sub(c_word).wrapping_mul(x0_word));

    let numerator = scaled_distance.to_big_int() * weight.to_big_int();
    let v = ceil_div(&numerator, &(x * &*PRECISION), UINT256)?;
    validate_width(&v, UINT248)?;
    Ok(y0 + ceil_div(&v, py, UINT256)?)
}

/// Returns the reserve `x` on the curve for a reserve `y > y0`, i.e. the
/// positive root of `A x^2 + B x + C = 0` with `A = c`, clamped to `x0`.
pub fn f_inverse(
    y: &BigInt,
    px: &BigInt,
    py: &BigInt,
    x0: &BigInt,
    y0: &BigInt,
    c: &BigInt,
) -> Result<BigInt, Error> {
    let precision = Uint256::from(PRECISION_U64);
    let c_word = Uint256::from_big_int(c)?;
    let x0_word = Uint256::from_big_int(x0)?;

    // Non-negative since `y >= y0` on this branch.
    let term1 = ceil_div(
        &(Uint256::from_big_int(py)?.wrapping_mul(precision).to_big_int()
            * Uint256::from_big_int(y)?
                .wrapping_sub(Uint256::from_big_int(y0)?)
                .to_big_int()),
        px,
        UINT256,
    )?;
    let term2 = Int256::from(2)
        .wrapping_mul(Int256::from_bits(c_word))
        .wrapping_sub(Int256::from_bits(precision))
        .wrapping_mul(Int256::from_bits(x0_word));
    // Signed division truncates towards zero.
    let b = Int256::from_bits(Uint256::from_big_int(&term1)?)
        .wrapping_sub(term2)
        .to_big_int()
        / &*PRECISION;

    let c_term = ceil_div(
        &(precision.wrapping_sub(c_word).to_big_int() * x0 * x0),
        &PRECISION,
        UINT256,
    )?;
    let four_ac = ceil_div(&(BigInt::from(4) * c * &c_term), &PRECISION, UINT256)?;

    let abs_b = b.abs();
    let discriminant = &b * &b + &four_ac;
    let root = ceil_sqrt(&discriminant)?;

    // Pick the form of the root that avoids cancellation.
    let x = if !b.is_positive() {
        let numerator = (&abs_b + &root) * &*PRECISION;
        let denominator = checked_mul(&BigInt::from(2), c, UINT256)?;
        checked_add(
            &ceil_div(&numerator, &denominator, UINT256)?,
            &BigInt::one(),
            UINT256,
        )?
    } else {
        let numerator = checked_mul(&BigInt::from(2), &c_term, UINT256)?;
        let denominator = checked_add(&abs_b, &root, UINT256)?;
        checked_add(
            &ceil_div(&numerator, &denominator, UINT256)?,
            &BigInt::one(),
            UINT256,
        )?
    };

    if &x >= x0 { Ok(x0.clone()) } else { Ok(x) }
}
