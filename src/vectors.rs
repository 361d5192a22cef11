//! Point vector file loading.
//!
//! The file is a JSON object with a single `vectors` array. Each entry
//! carries SEC1 hex encodings of two operands `P` and `Q` and, optionally,
//! their claimed sum `expected`:
//!
//! ```json
//! { "vectors": [ { "P": "02...", "Q": "02...", "expected": "03..." } ] }
//! ```
//!
//! When `expected` is absent the case falls back to `Q`, meaning the case
//! asserts no addition at all.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, VectorError};

/// Location of the vector file, relative to the repository root.
pub const DEFAULT_VECTORS_PATH: &str = "test/vectors/points.json";

#[derive(Debug, Clone, Deserialize)]
pub struct VectorFile {
    pub vectors: Vec<TestCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    #[serde(rename = "P")]
    pub p: String,
    #[serde(rename = "Q")]
    pub q: String,
    #[serde(default)]
    pub expected: Option<String>,
}

impl TestCase {
    /// The `expected` encoding, if the case asserts a sum.
    ///
    /// An empty string counts as absent.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref().filter(|e| !e.is_empty())
    }
}

impl VectorFile {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Reads and parses the vector file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<VectorFile> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = VectorFile::from_json(&raw)?;
    info!(path = %path.display(), vectors = file.vectors.len(), "loaded point vectors");
    Ok(file)
}
