use {
    anyhow::{Result, ensure},
    num::{BigInt, Signed, bigint::Sign},
    primitive_types::U256,
};

/// Converts a `BigInt` into a `U256`. Fails for negative values and for
/// values that need more than 256 bits.
pub fn big_int_to_u256(input: &BigInt) -> Result<U256> {
    ensure!(!input.is_negative(), "{input} is negative");
    let (_, bytes) = input.to_bytes_be();
    ensure!(bytes.len() <= 32, "{input} does not fit into 256 bits");
    Ok(U256::from_big_endian(&bytes))
}

pub fn u256_to_big_int(input: &U256) -> BigInt {
    let mut bytes = [0_u8; 32];
    input.to_big_endian(&mut bytes);
    BigInt::from_bytes_be(Sign::Plus, &bytes)
}
