//! Integer square roots.

use {
    crate::{Error, checked::UINT256},
    num::{BigInt, One, Signed, ToPrimitive},
    std::sync::LazyLock,
};

/// Below this bound `f64` represents the radicand exactly, so a float
/// estimate is a usable Newton seed.
static FLOAT_SEED_BOUND: LazyLock<BigInt> = LazyLock::new(|| BigInt::one() << 52);

/// Returns `floor(sqrt(value))` using Newton's method.
pub fn sqrt(value: &BigInt) -> Result<BigInt, Error> {
    if value.is_negative() {
        return Err(Error::InvalidUint {
            value: value.clone(),
            bits: UINT256,
        });
    }
    if value < &BigInt::from(2) {
        return Ok(value.clone());
    }
    if value < &BigInt::from(16) {
        return Ok(BigInt::from(float_sqrt(value)));
    }

    let mut next = if value < &*FLOAT_SEED_BOUND {
        // Start a little low; the first step overshoots to above the root.
        BigInt::from(float_sqrt(value) - 3)
    } else {
        decimal_seed(value)
    };
    loop {
        let current = next;
        next = (value / &current + &current) >> 1;
        if next == current || current == &next - 1 {
            return Ok(current);
        }
    }
}

/// Returns `sqrt(value)` rounded up.
pub fn ceil_sqrt(value: &BigInt) -> Result<BigInt, Error> {
    let root = sqrt(value)?;
    if &(&root * &root) < value {
        Ok(root + 1)
    } else {
        Ok(root)
    }
}

fn float_sqrt(value: &BigInt) -> u64 {
    value.to_f64().unwrap_or_default().sqrt() as u64
}

/// Seed for large radicands from the number of decimal digits, which is
/// always at or above the root and avoids float precision loss.
fn decimal_seed(value: &BigInt) -> BigInt {
    let digits = u32::try_from(value.to_string().len()).unwrap_or(u32::MAX);
    let magnitude = BigInt::from(10).pow(digits / 2);
    if digits % 2 == 0 {
        magnitude
    } else {
        magnitude * 4
    }
}
