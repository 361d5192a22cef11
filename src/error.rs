use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a point vector file into its ABI encoding.
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vector file")]
    Json(#[from] serde_json::Error),

    #[error("vector {index}: field `{field}` is not valid hex")]
    InvalidHex {
        index: usize,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("vector {index}: field `{field}` is not a valid secp256k1 point")]
    InvalidPoint { index: usize, field: &'static str },

    #[error("vector {index}: field `{field}` encodes the point at infinity")]
    PointAtInfinity { index: usize, field: &'static str },

    #[error("failed to render YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid ABI payload")]
    Abi(#[from] alloy_sol_types::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors raised by the reference curve operations behind `ecc_ref`.
#[derive(Debug, Error)]
pub enum EccRefError {
    #[error("missing arguments: point coordinates")]
    MissingCoordinates,

    #[error("invalid arguments: odd number of coordinates ({count})")]
    OddCoordinates { count: usize },

    #[error("point {index}: coordinate does not fit in 256 bits")]
    CoordinateTooLarge { index: usize },

    #[error("point {index}: not a secp256k1 point")]
    NotOnCurve { index: usize },

    #[error("invalid private key")]
    InvalidSecretKey,

    #[error("failed to parse message hash")]
    InvalidMessageHash(#[from] hex::FromHexError),

    #[error("message hash is {len} bytes, expected at most 32")]
    MessageHashTooLong { len: usize },

    #[error("failed to sign message")]
    Signing,
}
