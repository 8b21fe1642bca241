//! Asset verification: every image the page will request must exist.
//!
//! The asset root is indexed once with `walkdir`, then each path the page can
//! request is looked up: carousel sources, case input images, and the outputs
//! of methods that become cards. Hidden entries are not checked.
//!
//! Missing files are reported, never fatal: a broken image on the page only
//! affects its own card.

use crate::carousel::ExampleItem;
use crate::config::GalleryConfig;
use crate::manifest::{Manifest, build_card_list};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// A referenced image that is not present under the asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub path: String,
    /// Where the reference came from, e.g. `optics case 2 (m1)`.
    pub referenced_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    /// Distinct local paths that were looked up.
    pub checked: usize,
    pub missing: Vec<MissingAsset>,
}

impl AssetReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check manifest and carousel image paths against files under `asset_root`.
///
/// Remote (`http://`, `https://`, `data:`) and empty paths are skipped.
pub fn verify_assets(
    asset_root: &Path,
    manifest: &Manifest,
    examples: &[ExampleItem],
    config: &GalleryConfig,
) -> AssetReport {
    let present = index_files(asset_root);
    let mut report = AssetReport::default();
    let mut seen = BTreeSet::new();

    let mut check = |raw: &str, referenced_by: String| {
        let Some(path) = normalize(raw) else {
            return;
        };
        if seen.insert(path.clone()) {
            report.checked += 1;
        }
        if !present.contains(&path) {
            warn!(path = %path, referenced_by = %referenced_by, "missing asset");
            report.missing.push(MissingAsset {
                path,
                referenced_by,
            });
        }
    };

    for item in examples {
        check(&item.src, format!("carousel ({})", item.label));
    }
    for law in &manifest.laws {
        for (idx, case) in law.cases.iter().enumerate() {
            let case_ref = format!("{} case {}", law.key, idx + 1);
            check(&case.input_image, format!("{case_ref} (input)"));
            let cards = build_card_list(&case.images, config.max_cards, &config.excluded_prefixes);
            for image in cards {
                check(&image.path, format!("{case_ref} ({})", image.id));
            }
        }
    }
    report
}

/// Relative paths of every file under `root`, `/`-separated.
fn index_files(root: &Path) -> HashSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let rel = entry.path().strip_prefix(root).ok()?;
            let parts: Vec<_> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            Some(parts.join("/"))
        })
        .collect()
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("data:")
    {
        return None;
    }
    let path = trimmed.trim_start_matches("./").trim_start_matches('/');
    Some(path.to_string())
}
