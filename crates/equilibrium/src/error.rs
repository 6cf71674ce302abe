use {crate::solver::Asset, num::BigInt, serde::{Deserialize, Serialize}};

/// Conditions under which the modeled contract reverts.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A value is negative or does not fit into `uint{bits}`. Checked
    /// arithmetic overflow and underflow surface as this error as well.
    #[error("{value} is not a valid uint{bits}")]
    InvalidUint { value: BigInt, bits: u32 },
    #[error("insufficient reserve of {asset} for the swap out operation")]
    InsufficientReserve { asset: Asset },
    #[error("division by zero")]
    ZeroDivision,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUint { .. } => ErrorKind::InvalidUint,
            Self::InsufficientReserve { .. } => ErrorKind::InsufficientReserve,
            Self::ZeroDivision => ErrorKind::ZeroDivision,
        }
    }
}

/// The error variant without its payload, as recorded in vector files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ErrorKind {
    InvalidUint,
    InsufficientReserve,
    ZeroDivision,
}
