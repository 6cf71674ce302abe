//! Recorded contract calls used for differential testing.
//!
//! A vector file is a JSON array of [`Vector`]s. Integers are encoded as
//! decimal strings:
//!
//! ```json
//! {
//!   "name": "constant sum exact in asset0",
//!   "swap": { "amount": "1000", "kind": "exactIn", "input": "asset0" },
//!   "reserves": { "reserve0": "1000000000000000000", "reserve1": "1000000000000000000" },
//!   "curve": {
//!     "price0": "1000000000000000000",
//!     "price1": "1000000000000000000",
//!     "concentration0": "1000000000000000000",
//!     "concentration1": "1000000000000000000"
//!   },
//!   "expected": { "output": "999" }
//! }
//! ```

use {
    crate::{CurveParams, ErrorKind, Reserves, Swap, quote},
    num::BigInt,
    number::serialization::DecimalBigInt,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
    std::fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vector {
    pub name: String,
    pub swap: Swap,
    pub reserves: Reserves,
    pub curve: VectorCurve,
    pub expected: Expectation,
}

/// Curve parameters of a vector. The equilibrium reserves default to the
/// current reserves when omitted.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorCurve {
    #[serde_as(as = "DecimalBigInt")]
    pub price0: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub price1: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub concentration0: BigInt,
    #[serde_as(as = "DecimalBigInt")]
    pub concentration1: BigInt,
    #[serde_as(as = "Option<DecimalBigInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equilibrium_reserve0: Option<BigInt>,
    #[serde_as(as = "Option<DecimalBigInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equilibrium_reserve1: Option<BigInt>,
}

/// The recorded result of a call: the returned amount or the kind of revert.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Expectation {
    Output(#[serde_as(as = "DecimalBigInt")] BigInt),
    Error(ErrorKind),
}

impl Display for Expectation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Output(amount) => write!(f, "output {amount}"),
            Self::Error(kind) => write!(f, "{kind} error"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("vector {name:?}: expected {expected} but got {actual}")]
pub struct Mismatch {
    pub name: String,
    pub expected: Expectation,
    pub actual: Expectation,
}

impl Vector {
    pub fn curve_params(&self) -> CurveParams {
        let curve = &self.curve;
        CurveParams {
            equilibrium_reserve0: curve
                .equilibrium_reserve0
                .clone()
                .unwrap_or_else(|| self.reserves.reserve0.clone()),
            equilibrium_reserve1: curve
                .equilibrium_reserve1
                .clone()
                .unwrap_or_else(|| self.reserves.reserve1.clone()),
            price0: curve.price0.clone(),
            price1: curve.price1.clone(),
            concentration0: curve.concentration0.clone(),
            concentration1: curve.concentration1.clone(),
        }
    }

    /// Quotes the vector's swap and records the outcome in the same shape as
    /// the expectation.
    pub fn evaluate(&self) -> Expectation {
        match quote(&self.curve_params(), &self.reserves, &self.swap) {
            Ok(amount) => Expectation::Output(amount),
            Err(err) => {
                tracing::debug!(name = %self.name, ?err, "vector reverted");
                Expectation::Error(err.kind())
            }
        }
    }

    pub fn verify(&self) -> Result<(), Mismatch> {
        let actual = self.evaluate();
        if actual == self.expected {
            return Ok(());
        }
        Err(Mismatch {
            name: self.name.clone(),
            expected: self.expected.clone(),
            actual,
        })
    }
}
