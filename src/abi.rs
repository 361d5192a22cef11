//! Ethereum ABI encoding of the flattened coordinates.
//!
//! The payload is the parameter encoding of a single `uint256[]`: an offset
//! word (`0x20`), a length word and one big endian word per element. This
//! is what `abi.decode(data, (uint[]))` expects on the Solidity side.

use alloy_primitives::U256;
use alloy_sol_types::SolValue;

use crate::error::Result;

pub fn encode_uint_array(values: &[U256]) -> Vec<u8> {
    (values.to_vec(),).abi_encode_params()
}

pub fn decode_uint_array(data: &[u8]) -> Result<Vec<U256>> {
    let (values,) = <(Vec<U256>,)>::abi_decode_params(data, true)?;
    Ok(values)
}

/// Lowercase hex with a `0x` prefix.
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}
