//! Reference model of an on-chain concentrated liquidity curve that pivots
//! around an equilibrium point.
//!
//! Quotes are bit exact with the contract: every intermediate value is checked
//! against the width the contract stores it in, the steps the contract
//! performs unchecked wrap at 256 bits, and all divisions round against the
//! trader. Any condition under which the contract reverts is reported as an
//! [`Error`].

pub mod checked;
pub mod curve;
mod error;
pub mod solver;
pub mod sqrt;
pub mod vectors;
pub mod word;

#[cfg(test)]
mod tests;

use {num::BigInt, std::sync::LazyLock};

pub use {
    error::{Error, ErrorKind},
    solver::{Asset, CurveParams, Reserves, Swap, SwapKind, find_equilibrium_point, quote},
};

/// Fixed point scale of prices and concentrations.
pub const PRECISION_U64: u64 = 1_000_000_000_000_000_000;

pub static PRECISION: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(PRECISION_U64));
