//! YAML rendering of normalized point vectors.

use serde::Serialize;

use crate::{error::Result, point::Affine, point::NormalizedCase};

#[derive(Serialize)]
struct PointAddVector {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    p_x_hex: String,
    p_y_hex: String,
    q_x_hex: String,
    q_y_hex: String,
    expected_x_hex: String,
    expected_y_hex: String,
    asserts_sum: bool,
}

#[derive(Serialize)]
struct PointsTestFile {
    algorithm: String,
    description: String,
    test_vectors: Vec<PointAddVector>,
}

fn coordinates_hex(point: &Affine) -> (String, String) {
    let (x, y) = point.to_be_words();
    (hex::encode(x), hex::encode(y))
}

pub fn to_yaml(cases: &[NormalizedCase]) -> Result<String> {
    let test_vectors = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let (p_x_hex, p_y_hex) = coordinates_hex(&case.p);
            let (q_x_hex, q_y_hex) = coordinates_hex(&case.q);
            let (expected_x_hex, expected_y_hex) = coordinates_hex(&case.expected);
            PointAddVector {
                name: format!("vector_{i}"),
                description: (!case.asserts_sum)
                    .then(|| "expected omitted, Q used in its place".to_string()),
                p_x_hex,
                p_y_hex,
                q_x_hex,
                q_y_hex,
                expected_x_hex,
                expected_y_hex,
                asserts_sum: case.asserts_sum,
            }
        })
        .collect();

    let file = PointsTestFile {
        algorithm: "secp256k1".to_string(),
        description: "secp256k1 affine point addition vectors: P + Q = expected".to_string(),
        test_vectors,
    };
    Ok(serde_yaml::to_string(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    #[test]
    fn renders_padded_coordinates() {
        let point = Affine {
            x: U256::from(1u64),
            y: U256::from(0xabu64),
        };
        let cases = [NormalizedCase {
            p: point,
            q: point,
            expected: point,
            asserts_sum: false,
        }];

        let yaml = to_yaml(&cases).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let vector = &doc["test_vectors"][0];

        assert_eq!(doc["algorithm"].as_str(), Some("secp256k1"));
        assert_eq!(vector["name"].as_str(), Some("vector_0"));
        assert_eq!(
            vector["p_x_hex"].as_str(),
            Some(format!("{}1", "0".repeat(63)).as_str())
        );
        assert_eq!(
            vector["expected_y_hex"].as_str(),
            Some(format!("{}ab", "0".repeat(62)).as_str())
        );
        assert_eq!(vector["asserts_sum"].as_bool(), Some(false));
        assert!(vector["description"].as_str().is_some());
    }
}
