//! Results manifest: the static JSON document describing laws and cases.
//!
//! ## Shape
//!
//! ```json
//! {
//!   "laws": [
//!     {
//!       "key": "optics",
//!       "label": "Optics",
//!       "cases": [
//!         {
//!           "instruction": "Turn off the desk lamp",
//!           "input_image": "static/img/optics/001/input.png",
//!           "images": [
//!             { "id": "input", "label": "Input", "path": "static/img/optics/001/input.png" },
//!             { "id": "gpt-image-1", "label": "GPT-Image-1", "path": "static/img/optics/001/gpt.png" }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Lenient Decoding
//!
//! The manifest is produced by a separate export script and is read as-is.
//! Only malformed JSON text is an error. Inside valid JSON, any field with the
//! wrong type decodes to its empty value: a non-array `cases` is an empty case
//! list, a numeric `label` is an empty string, and array elements that are not
//! objects are skipped. The gallery then reports the emptiness through its own
//! placeholder messages.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Method id reserved for the unedited source image.
pub const INPUT_ID: &str = "input";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    #[serde(deserialize_with = "lenient_vec")]
    pub laws: Vec<Law>,
}

/// A physical law category, e.g. optics or mechanics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Law {
    #[serde(deserialize_with = "lenient_string")]
    pub key: String,
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub cases: Vec<Case>,
}

/// One editing instruction applied to one input image, with the candidate
/// outputs of every evaluated method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Case {
    #[serde(deserialize_with = "lenient_string")]
    pub instruction: String,
    #[serde(deserialize_with = "lenient_string")]
    pub input_image: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub images: Vec<ImageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageEntry {
    /// Method identifier (`"input"` for the source image).
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "lenient_string")]
    pub path: String,
}

impl ImageEntry {
    pub fn is_input(&self) -> bool {
        self.id.eq_ignore_ascii_case(INPUT_ID)
    }

    /// Whether this entry becomes a grid card.
    ///
    /// Entries without an id, the input entry, and entries whose id starts
    /// with one of `excluded_prefixes` (case-insensitive) are hidden.
    pub fn is_visible_card(&self, excluded_prefixes: &[String]) -> bool {
        if self.id.is_empty() || self.is_input() {
            return false;
        }
        let id = self.id.to_lowercase();
        !excluded_prefixes
            .iter()
            .any(|prefix| id.starts_with(&prefix.to_lowercase()))
    }
}

impl Manifest {
    /// Decode a manifest from JSON text.
    ///
    /// A top-level `null` or non-object value yields an empty manifest.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// First law whose key equals `key`.
    pub fn law(&self, key: &str) -> Option<&Law> {
        self.laws.iter().find(|law| law.key == key)
    }

    /// Keys that appear on more than one law, in first-seen order.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut order = Vec::new();
        for law in &self.laws {
            let count = counts.entry(law.key.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(law.key.clone());
            }
        }
        order
    }

    pub fn case_count(&self) -> usize {
        self.laws.iter().map(|law| law.cases.len()).sum()
    }
}

/// Load the manifest from disk.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    Manifest::from_json(&content)
}

/// The first `limit` entries that become grid cards, in manifest order.
pub fn build_card_list<'a>(
    entries: &'a [ImageEntry],
    limit: usize,
    excluded_prefixes: &[String],
) -> Vec<&'a ImageEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_visible_card(excluded_prefixes))
        .take(limit)
        .collect()
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}
