//! secp256k1 point decoding and affine normalization.

use alloy_primitives::U256;
use k256::{
    elliptic_curve::{
        ops::Reduce,
        sec1::{Coordinates, FromEncodedPoint, Tag, ToEncodedPoint},
    },
    AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar,
};
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    error::{Result, VectorError},
    vectors::TestCase,
};

/// Affine (x, y) coordinates of a curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    pub x: U256,
    pub y: U256,
}

impl Affine {
    /// Conventional encoding of the point at infinity.
    pub const ZERO: Self = Self {
        x: U256::ZERO,
        y: U256::ZERO,
    };

    /// Normalizes a projective point. Returns `None` for the identity.
    pub fn from_projective(point: &ProjectivePoint) -> Option<Self> {
        let encoded = point.to_affine().to_encoded_point(false);
        match encoded.coordinates() {
            Coordinates::Uncompressed { x, y } => Some(Self {
                x: U256::from_be_slice(x),
                y: U256::from_be_slice(y),
            }),
            _ => None,
        }
    }

    /// 32 byte big endian words, x first.
    pub fn to_be_words(&self) -> ([u8; 32], [u8; 32]) {
        (self.x.to_be_bytes::<32>(), self.y.to_be_bytes::<32>())
    }
}

/// Decodes a SEC1 point, compressed or uncompressed, with or without `0x`.
///
/// `index` and `field` only label the error.
pub fn decode_point(encoded: &str, index: usize, field: &'static str) -> Result<ProjectivePoint> {
    let raw = encoded.strip_prefix("0x").unwrap_or(encoded);
    let bytes = hex::decode(raw).map_err(|source| VectorError::InvalidHex {
        index,
        field,
        source,
    })?;

    let encoded =
        EncodedPoint::from_bytes(&bytes).map_err(|_| VectorError::InvalidPoint { index, field })?;
    if encoded.is_identity() {
        return Err(VectorError::PointAtInfinity { index, field });
    }
    // Only the 02/03/04 SEC1 forms.
    if !matches!(
        encoded.tag(),
        Tag::CompressedEvenY | Tag::CompressedOddY | Tag::Uncompressed
    ) {
        return Err(VectorError::InvalidPoint { index, field });
    }

    let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
    point
        .map(ProjectivePoint::from)
        .ok_or(VectorError::InvalidPoint { index, field })
}

fn to_affine(point: &ProjectivePoint, index: usize, field: &'static str) -> Result<Affine> {
    Affine::from_projective(point).ok_or(VectorError::PointAtInfinity { index, field })
}

/// A test case with every point in affine form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedCase {
    pub p: Affine,
    pub q: Affine,
    pub expected: Affine,
    /// False when `expected` was absent and Q stands in for it.
    pub asserts_sum: bool,
}

impl NormalizedCase {
    /// Coordinates in emission order: P.x, P.y, Q.x, Q.y, expected.x, expected.y.
    pub fn words(&self) -> [U256; 6] {
        [
            self.p.x,
            self.p.y,
            self.q.x,
            self.q.y,
            self.expected.x,
            self.expected.y,
        ]
    }
}

pub fn normalize_case(index: usize, case: &TestCase) -> Result<NormalizedCase> {
    let p = decode_point(&case.p, index, "P")?;
    let q = decode_point(&case.q, index, "Q")?;
    let (e, asserts_sum) = match case.expected() {
        Some(expected) => (decode_point(expected, index, "expected")?, true),
        None => (q, false),
    };

    let normalized = NormalizedCase {
        p: to_affine(&p, index, "P")?,
        q: to_affine(&q, index, "Q")?,
        expected: to_affine(&e, index, "expected")?,
        asserts_sum,
    };
    debug!(index, asserts_sum, "normalized vector");
    Ok(normalized)
}

pub fn normalize_all(cases: &[TestCase]) -> Result<Vec<NormalizedCase>> {
    cases
        .iter()
        .enumerate()
        .map(|(index, case)| normalize_case(index, case))
        .collect()
}

/// Order of the secp256k1 group.
pub fn group_order() -> BigUint {
    BigUint::from_bytes_be(&(-Scalar::ONE).to_bytes()) + 1u32
}

/// Big endian 32 byte encoding of `n`, or `None` if it needs more bytes.
pub fn to_field_bytes(n: &BigUint) -> Option<FieldBytes> {
    let bytes = n.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    let mut repr = FieldBytes::default();
    repr[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(repr)
}

/// Reduces `k` modulo the group order.
pub fn scalar_from_biguint(k: &BigUint) -> Scalar {
    let reduced = k % group_order();
    let mut repr = FieldBytes::default();
    let bytes = reduced.to_bytes_be();
    repr[32 - bytes.len()..].copy_from_slice(&bytes);
    <Scalar as Reduce<k256::U256>>::reduce_bytes(&repr)
}

/// Computes `[k]G`, reducing `k` modulo the group order first.
///
/// The identity maps to [`Affine::ZERO`].
pub fn scalar_base_mul(k: &BigUint) -> Affine {
    let point = ProjectivePoint::GENERATOR * scalar_from_biguint(k);
    Affine::from_projective(&point).unwrap_or(Affine::ZERO)
}
