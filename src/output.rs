//! CLI output formatting.
//!
//! Output leads with what the page will show: each law with its positional
//! index and label, each case with its instruction and card count. Keys and
//! file paths follow as indented context lines.
//!
//! ```text
//! Laws
//! 001 Optics (3 cases)
//!     Key: optics
//!     001 Turn off the lamp (3 cards)
//!     002 Remove the mirror (3 cards)
//! 002 State Transition (0 cases)
//!     Key: state
//!
//! Carousel
//!     8 examples
//!
//! Assets
//!     17 referenced, 2 missing
//!     missing: optics/1/m1.png ← optics case 1 (m1)
//! ```
//!
//! Each `format_*` function returns `Vec<String>` for testability; the
//! `print_*` wrappers write to stdout.

use crate::assets::AssetReport;
use crate::carousel::ExampleItem;
use crate::config::GalleryConfig;
use crate::manifest::{Manifest, build_card_list};

const INSTRUCTION_WIDTH: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Truncate to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

/// Law and case inventory as the gallery will present it.
pub fn format_manifest_summary(manifest: &Manifest, config: &GalleryConfig) -> Vec<String> {
    let mut lines = vec!["Laws".to_string()];
    if manifest.laws.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, law) in manifest.laws.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            law.label,
            plural(law.cases.len(), "case")
        ));
        lines.push(format!("{}Key: {}", indent(1), law.key));
        for (j, case) in law.cases.iter().enumerate() {
            let cards =
                build_card_list(&case.images, config.max_cards, &config.excluded_prefixes).len();
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(j + 1),
                truncate(&case.instruction, INSTRUCTION_WIDTH),
                plural(cards, "card")
            ));
        }
    }
    for key in manifest.duplicate_keys() {
        lines.push(format!("{}warning: duplicate law key '{}'", indent(1), key));
    }
    lines
}

pub fn format_carousel_summary(examples: &[ExampleItem]) -> Vec<String> {
    vec![
        "Carousel".to_string(),
        format!("{}{}", indent(1), plural(examples.len(), "example")),
    ]
}

pub fn format_asset_report(report: &AssetReport) -> Vec<String> {
    let mut lines = vec![
        "Assets".to_string(),
        format!(
            "{}{} referenced, {} missing",
            indent(1),
            report.checked,
            report.missing.len()
        ),
    ];
    for missing in &report.missing {
        lines.push(format!(
            "{}missing: {} ← {}",
            indent(1),
            missing.path,
            missing.referenced_by
        ));
    }
    lines
}

/// Full `check` command output, sections separated by blank lines.
pub fn format_check_output(
    manifest: &Manifest,
    config: &GalleryConfig,
    examples: &[ExampleItem],
    report: &AssetReport,
) -> Vec<String> {
    let mut lines = format_manifest_summary(manifest, config);
    lines.push(String::new());
    lines.extend(format_carousel_summary(examples));
    lines.push(String::new());
    lines.extend(format_asset_report(report));
    lines
}

pub fn print_check_output(
    manifest: &Manifest,
    config: &GalleryConfig,
    examples: &[ExampleItem],
    report: &AssetReport,
) {
    for line in format_check_output(manifest, config, examples, report) {
        println!("{}", line);
    }
}

/// `--version` text: the bare package version on a release tag, otherwise
/// the version followed by the short commit hash when one is known.
pub fn format_version(version: &str, git_hash: &str, on_release_tag: bool) -> String {
    if on_release_tag || git_hash.is_empty() {
        version.to_string()
    } else {
        format!("{version} ({git_hash})")
    }
}
