//! End-to-end showcase flow: load, interact, render, and the CLI.
//!
//! Run with: `cargo test --test showcase_flow`

use picabench_showcase::carousel::{Carousel, default_examples};
use picabench_showcase::config::ShowcaseConfig;
use picabench_showcase::events::{Key, KeyEvent, KeyOutcome, PointerTarget};
use picabench_showcase::gallery::{Face, GalleryPhase, Mode, Placeholder};
use picabench_showcase::manifest::load_manifest;
use picabench_showcase::render::render_page;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "laws": [
    {
      "key": "optics",
      "label": "Optics",
      "cases": [
        {
          "instruction": "Turn off the lamp",
          "input_image": "img/optics/1/input.png",
          "images": [
            {"id": "input", "label": "Input", "path": "img/optics/1/input.png"},
            {"id": "005-baseline", "label": "Baseline", "path": "img/optics/1/base.png"},
            {"id": "m1", "label": "Method 1", "path": "img/optics/1/m1.png"},
            {"id": "m2", "label": "Method 2", "path": "img/optics/1/m2.png"}
          ]
        },
        {
          "instruction": "Remove the mirror",
          "input_image": "img/optics/2/input.png",
          "images": [
            {"id": "m1", "label": "Method 1", "path": "img/optics/2/m1.png"}
          ]
        }
      ]
    },
    {"key": "mechanics", "label": "Mechanics", "cases": "pending"}
  ]
}"#;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn write_site(root: &Path) {
    fs::write(root.join("results.json"), MANIFEST).unwrap();
    for rel in [
        "img/optics/1/input.png",
        "img/optics/1/m1.png",
        "img/optics/1/m2.png",
        "img/optics/2/input.png",
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"png").unwrap();
    }
    fs::write(
        root.join("showcase.toml"),
        format!(
            "manifest = \"{}\"\nasset_root = \"{}\"\n",
            root.join("results.json").display(),
            root.display()
        ),
    )
    .unwrap();
}

fn ready_phase(root: &Path) -> GalleryPhase {
    let config = ShowcaseConfig::default();
    GalleryPhase::from_load(load_manifest(&root.join("results.json")), &config.gallery)
}

fn faces(phase: &GalleryPhase) -> Vec<Face> {
    phase
        .gallery()
        .unwrap()
        .cards()
        .iter()
        .map(|c| c.face)
        .collect()
}

// ---------------------------------------------------------------------------
// Library flow
// ---------------------------------------------------------------------------

#[test]
fn gallery_session_walkthrough() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path());
    let mut phase = ready_phase(tmp.path());

    let gallery = phase.gallery_mut().unwrap();
    let ids: Vec<&str> = gallery.cards().iter().map(|c| c.method_id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2"]);
    assert!(!gallery.nav_disabled());

    gallery.advance(Duration::from_millis(1200));
    assert_eq!(faces(&phase), vec![Face::Output, Face::Output]);

    let gallery = phase.gallery_mut().unwrap();
    assert_eq!(gallery.on_key_down(&KeyEvent::new(Key::ArrowRight)), KeyOutcome::Handled);
    assert_eq!(gallery.instruction(), "Remove the mirror");
    assert_eq!(faces(&phase), vec![Face::Input]);

    let gallery = phase.gallery_mut().unwrap();
    gallery.on_mode_button("interactive");
    assert!(!gallery.is_flipping());
    gallery.on_pointer_over(PointerTarget::Card(0));
    assert_eq!(gallery.cards()[0].displayed_src(), "img/optics/2/m1.png");
    gallery.on_pointer_leave();
    assert_eq!(gallery.cards()[0].displayed_src(), "img/optics/2/input.png");

    gallery.select_law("mechanics");
    assert_eq!(gallery.case_index(), 0);
    assert!(gallery.nav_disabled());
    assert_eq!(gallery.grid().placeholder(), Some(Placeholder::NoVisuals));
    assert_eq!(gallery.mode(), Mode::Interactive);
}

#[test]
fn carousel_handles_arrow_before_gallery() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path());
    let mut phase = ready_phase(tmp.path());
    let mut carousel = Carousel::new(default_examples(), Duration::from_millis(2000)).unwrap();

    // Both widgets listen on the window; the carousel script is registered first.
    let mut event = KeyEvent::new(Key::ArrowRight);
    event.record(carousel.on_key_down(&event, false));
    let outcome = phase.gallery_mut().unwrap().on_key_down(&event);

    assert_eq!(carousel.index(), 1);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(phase.gallery().unwrap().case_index(), 0);
}

#[test]
fn missing_manifest_renders_error_placeholder() {
    let tmp = TempDir::new().unwrap();
    let phase = GalleryPhase::from_load(
        load_manifest(&tmp.path().join("absent.json")),
        &ShowcaseConfig::default().gallery,
    );
    let html = render_page("PICABench", None, &phase).into_string();
    assert!(html.contains("Unable to load results. Please refresh the page."));
    assert!(!html.contains("picabench-example-gallery"));
}

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_picabench-showcase"))
}

#[test]
fn cli_render_writes_page() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path());
    let output = tmp.path().join("dist/index.html");

    let status = bin()
        .args(["--config", tmp.path().join("showcase.toml").to_str().unwrap()])
        .args(["render", "--output", output.to_str().unwrap(), "--title", "Showcase"])
        .status()
        .expect("failed to run picabench-showcase");
    assert!(status.success());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Showcase</title>"));
    assert!(html.contains(r#"data-method-id="m2""#));
    assert!(!html.contains(r#"data-method-id="005-baseline""#));
}

#[test]
fn cli_check_reports_missing_assets() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path());

    let out = bin()
        .args(["--config", tmp.path().join("showcase.toml").to_str().unwrap()])
        .arg("check")
        .output()
        .expect("failed to run picabench-showcase");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("001 Optics (2 cases)"));
    assert!(stdout.contains("002 Mechanics (0 cases)"));
    assert!(!stdout.contains("base.png"));
    assert!(stdout.contains("missing: img/optics/2/m1.png"));
    assert!(stdout.contains("==> Manifest has warnings"));
}

#[test]
fn cli_check_fails_on_unparseable_manifest() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("broken.json");
    fs::write(&manifest, "{\"laws\": [").unwrap();

    let status = bin()
        .args(["--config", tmp.path().join("none.toml").to_str().unwrap()])
        .args(["--manifest", manifest.to_str().unwrap()])
        .arg("check")
        .status()
        .expect("failed to run picabench-showcase");
    assert!(!status.success());
}

#[test]
fn cli_gen_config_prints_stock_file() {
    let out = bin().arg("gen-config").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let parsed: ShowcaseConfig = toml::from_str(&stdout).unwrap();
    assert_eq!(parsed, ShowcaseConfig::default());
}
