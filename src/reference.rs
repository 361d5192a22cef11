//! Reference secp256k1 operations used to cross check the Solidity tests.
//!
//! Points cross the command line as base 10 coordinate pairs; `(0, 0)`
//! stands for the point at infinity in both directions.

use k256::{
    elliptic_curve::sec1::FromEncodedPoint, schnorr::SigningKey, AffinePoint, EncodedPoint,
    ProjectivePoint,
};
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    error::EccRefError,
    point::{to_field_bytes, Affine},
};

fn point_from_coordinates(
    x: &BigUint,
    y: &BigUint,
    index: usize,
) -> Result<ProjectivePoint, EccRefError> {
    if x.bits() == 0 && y.bits() == 0 {
        return Ok(ProjectivePoint::IDENTITY);
    }
    let too_large = || EccRefError::CoordinateTooLarge { index };
    let x = to_field_bytes(x).ok_or_else(too_large)?;
    let y = to_field_bytes(y).ok_or_else(too_large)?;

    let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);
    let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
    point
        .map(ProjectivePoint::from)
        .ok_or(EccRefError::NotOnCurve { index })
}

/// Sums the points given as consecutive `x, y` coordinates.
///
/// Every pair is validated first. Summation stops as soon as a partial sum
/// hits the identity, which is then the result.
pub fn point_addition(coordinates: &[BigUint]) -> Result<Affine, EccRefError> {
    if coordinates.is_empty() {
        return Err(EccRefError::MissingCoordinates);
    }
    if coordinates.len() % 2 != 0 {
        return Err(EccRefError::OddCoordinates {
            count: coordinates.len(),
        });
    }

    let points = coordinates
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| point_from_coordinates(&pair[0], &pair[1], index))
        .collect::<Result<Vec<_>, _>>()?;

    let mut sum = points[0];
    for (index, point) in points.iter().enumerate().skip(1) {
        sum += point;
        if sum == ProjectivePoint::IDENTITY {
            debug!(index, "partial sum reached the identity");
            break;
        }
    }
    Ok(Affine::from_projective(&sum).unwrap_or(Affine::ZERO))
}

/// BIP-340 Schnorr signature over a 32 byte message hash.
///
/// The hash is hex, with or without `0x`, and is left padded to 32 bytes.
/// Signing uses all-zero auxiliary randomness so output is deterministic.
pub fn schnorr_sign(secret: &BigUint, message_hash: &str) -> Result<[u8; 64], EccRefError> {
    let key_bytes = to_field_bytes(secret).ok_or(EccRefError::InvalidSecretKey)?;
    let signing_key =
        SigningKey::from_bytes(&key_bytes).map_err(|_| EccRefError::InvalidSecretKey)?;

    let raw = message_hash.strip_prefix("0x").unwrap_or(message_hash);
    let padded = if raw.len() % 2 == 1 {
        format!("0{raw}")
    } else {
        raw.to_string()
    };
    let bytes = hex::decode(padded)?;
    if bytes.len() > 32 {
        return Err(EccRefError::MessageHashTooLong { len: bytes.len() });
    }
    let mut digest = [0u8; 32];
    digest[32 - bytes.len()..].copy_from_slice(&bytes);

    let signature = signing_key
        .sign_raw(&digest, &[0u8; 32])
        .map_err(|_| EccRefError::Signing)?;
    Ok(signature.to_bytes())
}
