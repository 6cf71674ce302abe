//! Fixed width 256-bit words with wrapping arithmetic.
//!
//! The contract performs some steps inside `unchecked` blocks and relies on a
//! later checked step to reject the inputs for which the wraparound would
//! matter. Plain `BigInt` arithmetic never wraps, so these types are used at
//! exactly those steps and nowhere else.

use {
    crate::{Error, checked::UINT256},
    num::{BigInt, One},
    number::conversions::{big_int_to_u256, u256_to_big_int},
    primitive_types::U256,
    std::sync::LazyLock,
};

static TWO_POW_256: LazyLock<BigInt> = LazyLock::new(|| BigInt::one() << 256);

/// An unsigned 256-bit word, `uint256` inside an `unchecked` block.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Uint256(U256);

impl Uint256 {
    pub fn from_big_int(value: &BigInt) -> Result<Self, Error> {
        big_int_to_u256(value)
            .map(Self)
            .map_err(|_| Error::InvalidUint {
                value: value.clone(),
                bits: UINT256,
            })
    }

    pub fn to_big_int(self) -> BigInt {
        u256_to_big_int(&self.0)
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.overflowing_add(rhs.0).0)
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.overflowing_sub(rhs.0).0)
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.overflowing_mul(rhs.0).0)
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

/// A signed 256-bit word, `int256` inside an `unchecked` block.
///
/// The word is stored as raw two's complement bits. Wrapping addition,
/// subtraction and multiplication produce the same bits for signed and
/// unsigned operands, so only the interpretation differs from [`Uint256`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Int256(U256);

impl Int256 {
    /// Reinterprets the bits of an unsigned word, like `int256(x)`.
    pub fn from_bits(value: Uint256) -> Self {
        Self(value.0)
    }

    /// Encodes a value in `[-2^255, 2^255)`. Only the tests build signed words
    /// from integers; the curve reinterprets unsigned words instead.
    #[cfg(test)]
    fn from_big_int(value: &BigInt) -> Result<Self, Error> {
        let half = TWO_POW_256.clone() >> 1_u32;
        if value < &-&half || value >= &half {
            return Err(Error::InvalidUint {
                value: value.clone(),
                bits: UINT256,
            });
        }
        let bits = if value.sign() == num::bigint::Sign::Minus {
            value + &*TWO_POW_256
        } else {
            value.clone()
        };
        Uint256::from_big_int(&bits).map(Self::from_bits)
    }

    pub fn is_negative(self) -> bool {
        self.0.bit(255)
    }

    pub fn to_big_int(self) -> BigInt {
        let bits = u256_to_big_int(&self.0);
        if self.is_negative() {
            bits - &*TWO_POW_256
        } else {
            bits
        }
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.overflowing_sub(rhs.0).0)
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.overflowing_mul(rhs.0).0)
    }
}

impl From<u64> for Int256 {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}
