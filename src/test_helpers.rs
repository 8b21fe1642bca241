//! Shared test utilities for the showcase test suite.
//!
//! Provides manifest builders, a canned three-law manifest, and grid
//! assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let gallery = Gallery::new(sample_manifest(), GalleryConfig::default()).unwrap();
//! assert_all_faces(&gallery, Face::Input);
//! ```

use crate::gallery::{Face, Gallery};
use crate::manifest::{Case, ImageEntry, Law, Manifest};

/// Single law, single case: one input entry and one method.
pub const OPTICS_JSON: &str = r#"{"laws":[{"key":"optics","label":"Optics","cases":[{"instruction":"x","input_image":"in.png","images":[{"id":"input","label":"Input","path":"in.png"},{"id":"m1","label":"Method1","path":"out1.png"}]}]}]}"#;

// =========================================================================
// Builders
// =========================================================================

pub fn entry(id: &str, label: &str, path: &str) -> ImageEntry {
    ImageEntry {
        id: id.to_string(),
        label: label.to_string(),
        path: path.to_string(),
    }
}

pub fn case(instruction: &str, input_image: &str, images: Vec<ImageEntry>) -> Case {
    Case {
        instruction: instruction.to_string(),
        input_image: input_image.to_string(),
        images,
    }
}

pub fn law(key: &str, label: &str, cases: Vec<Case>) -> Law {
    Law {
        key: key.to_string(),
        label: label.to_string(),
        cases,
    }
}

/// Input entry plus methods `m1..=count`, stored under `{prefix}/`.
fn method_images(prefix: &str, count: usize) -> Vec<ImageEntry> {
    let mut images = vec![entry("input", "Input", &format!("{prefix}/input.png"))];
    images.extend((1..=count).map(|i| {
        entry(
            &format!("m{i}"),
            &format!("Method {i}"),
            &format!("{prefix}/m{i}.png"),
        )
    }));
    images
}

/// Three laws:
///
/// - `optics`: three cases with three methods each
/// - `mechanics`: one case with four methods
/// - `state`: no cases
pub fn sample_manifest() -> Manifest {
    Manifest {
        laws: vec![
            law(
                "optics",
                "Optics",
                vec![
                    case("Turn off the lamp", "optics/1/input.png", method_images("optics/1", 3)),
                    case("Remove the mirror", "optics/2/input.png", method_images("optics/2", 3)),
                    case("Open the curtains", "optics/3/input.png", method_images("optics/3", 3)),
                ],
            ),
            law(
                "mechanics",
                "Mechanics",
                vec![case(
                    "Drop the glass",
                    "mechanics/1/input.png",
                    method_images("mechanics/1", 4),
                )],
            ),
            law("state", "State Transition", vec![]),
        ],
    }
}

// =========================================================================
// Grid assertions
// =========================================================================

/// Sources currently displayed by each card, in grid order.
pub fn displayed(gallery: &Gallery) -> Vec<String> {
    gallery
        .cards()
        .iter()
        .map(|card| card.displayed_src().to_string())
        .collect()
}

/// Assert every card shows `face`. Panics listing the offending cards.
pub fn assert_all_faces(gallery: &Gallery, face: Face) {
    let cards = gallery.cards();
    assert!(!cards.is_empty(), "grid has no cards");
    let wrong: Vec<&str> = cards
        .iter()
        .filter(|card| card.face != face)
        .map(|card| card.method_id.as_str())
        .collect();
    assert!(wrong.is_empty(), "cards {wrong:?} do not show {face:?}");
}
