//! Serialization helpers for arbitrary precision integers.

use {
    num::BigInt,
    serde::{Deserialize, Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::str::FromStr,
};

/// Serializes a `BigInt` as a base 10 string. JSON numbers lose precision
/// past 2^53, so integers that routinely span 256 bits travel as strings.
///
/// ```ignore
/// #[serde_as]
/// #[derive(Deserialize)]
/// struct Amount {
///     #[serde_as(as = "DecimalBigInt")]
///     value: BigInt,
/// }
/// ```
#[derive(Debug)]
pub struct DecimalBigInt;

impl SerializeAs<BigInt> for DecimalBigInt {
    fn serialize_as<S>(source: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(source)
    }
}

impl<'de> DeserializeAs<'de, BigInt> for DecimalBigInt {
    fn deserialize_as<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BigInt::from_str(&s).map_err(|err| {
            de::Error::custom(format!("failed to decode {s:?} as a decimal integer: {err}"))
        })
    }
}
