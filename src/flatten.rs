use alloy_primitives::U256;

use crate::point::NormalizedCase;

/// Number of words each test case contributes.
pub const WORDS_PER_CASE: usize = 6;

/// Concatenates the coordinates of every case, in input order.
pub fn flatten(cases: &[NormalizedCase]) -> Vec<U256> {
    let mut out = Vec::with_capacity(cases.len() * WORDS_PER_CASE);
    for case in cases {
        out.extend(case.words());
    }
    out
}
