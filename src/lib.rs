//! secp256k1 point addition vectors for the Solidity test suite.
//!
//! Reads `test/vectors/points.json`, normalizes every point to affine
//! coordinates and packs them as an ABI encoded `uint[]`. The elements are
//! read sequentially: P.x, P.y, Q.x, Q.y, expected.x, expected.y for the
//! first case, then the same six for the next, and so on.

pub mod abi;
pub mod error;
pub mod flatten;
pub mod logging;
pub mod point;
pub mod reference;
pub mod report;
pub mod vectors;

use std::path::Path;

use alloy_primitives::U256;

pub use error::{EccRefError, Result, VectorError};
pub use point::{Affine, NormalizedCase};
pub use vectors::{TestCase, VectorFile, DEFAULT_VECTORS_PATH};

/// Decodes every case of `file`, stopping at the first bad point.
pub fn normalize(file: &VectorFile) -> Result<Vec<NormalizedCase>> {
    point::normalize_all(&file.vectors)
}

/// The flattened coordinate list for `file`.
pub fn flattened(file: &VectorFile) -> Result<Vec<U256>> {
    Ok(flatten::flatten(&normalize(file)?))
}

/// `0x` prefixed ABI encoding of the flattened coordinates of `file`.
pub fn encode_points(file: &VectorFile) -> Result<String> {
    let words = flattened(file)?;
    Ok(abi::to_hex(&abi::encode_uint_array(&words)))
}

/// Loads the vector file at `path` and encodes it.
pub fn encode_points_file(path: impl AsRef<Path>) -> Result<String> {
    encode_points(&vectors::load(path)?)
}
