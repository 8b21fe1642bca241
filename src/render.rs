//! HTML markup for the showcase widgets.
//!
//! Markup mirrors the element ids, classes, and data attributes the page
//! scripts bind to, so a rendered state can be dropped into the page as-is:
//!
//! ```text
//! #picabench-example-gallery          carousel root
//!   img#picabench-example-image       current example (alt = label)
//! .picabench-gallery[data-gallery-mode]
//!   .picabench-mode-button[data-mode] auto / interactive (.active)
//!   #picabench-law-buttons            role="tab" buttons, data-law-key
//!   #picabench-case-controls          [data-case-nav=prev|next], #picabench-case-status
//!   #picabench-case-title, #picabench-instruction
//!   #picabench-grid                   .picabench-card[data-method-id] or p.picabench-placeholder
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating with
//! automatic escaping.

use crate::carousel::Carousel;
use crate::gallery::{CardView, Gallery, GalleryPhase, Mode, Placeholder};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the example carousel at its current item.
pub fn render_carousel(carousel: &Carousel) -> Markup {
    let item = carousel.current();
    html! {
        section.picabench-example id="picabench-example-gallery" {
            figure.picabench-example-frame {
                img id="picabench-example-image" src=(item.src) alt=(item.label);
                figcaption.picabench-example-label { (item.label) }
            }
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn placeholder(p: Placeholder) -> Markup {
    html! {
        p.picabench-placeholder { (p.message()) }
    }
}

fn mode_buttons(current: Mode) -> Markup {
    html! {
        div.picabench-mode-switch role="group" aria-label="Display mode" {
            @for mode in Mode::ALL {
                @let active = mode == current;
                button.picabench-mode-button.active[active] type="button" data-mode=(mode.as_str())
                    aria-pressed=(flag(active)) {
                    @match mode {
                        Mode::Auto => { "Auto flip" }
                        Mode::Interactive => { "Hover to compare" }
                    }
                }
            }
        }
    }
}

fn card(card: &CardView) -> Markup {
    html! {
        div.picabench-card
            data-method-id=(card.method_id)
            tabindex=(if card.focusable() { 0 } else { -1 })
            role=[card.focusable().then_some("button")] {
            div.picabench-image-wrapper {
                img loading="lazy" src=(card.displayed_src()) alt=(card.alt)
                    data-output-src=(card.output_src) data-input-src=(card.input_src);
            }
            p.picabench-caption { (card.label) }
        }
    }
}

fn case_controls(gallery: Option<&Gallery>) -> Markup {
    let disabled = gallery.is_none_or(Gallery::nav_disabled);
    let status = gallery
        .filter(|g| g.case_total() > 0)
        .map(|g| format!("Case {} / {}", g.case_index() + 1, g.case_total()));
    html! {
        div.picabench-case-controls id="picabench-case-controls" {
            button.picabench-case-nav type="button" data-case-nav="prev"
                disabled[disabled] aria-disabled=(flag(disabled)) aria-label="Previous case" { "‹" }
            span.picabench-case-status id="picabench-case-status" aria-live="polite" {
                @if let Some(status) = status { (status) }
            }
            button.picabench-case-nav type="button" data-case-nav="next"
                disabled[disabled] aria-disabled=(flag(disabled)) aria-label="Next case" { "›" }
        }
    }
}

/// Renders the comparison gallery in any load phase.
pub fn render_gallery(phase: &GalleryPhase) -> Markup {
    let gallery = phase.gallery();
    let mode = gallery.map(Gallery::mode).unwrap_or_default();
    html! {
        section.picabench-gallery data-gallery-mode=(mode.as_str()) {
            (mode_buttons(mode))
            div.picabench-law-buttons id="picabench-law-buttons" role="tablist" {
                @if let Some(gallery) = gallery {
                    @for tab in gallery.law_tabs() {
                        button.picabench-law-button.active[tab.active] type="button" role="tab"
                            data-law-key=(tab.key) aria-selected=(flag(tab.active)) tabindex=(tab.tab_index()) {
                            (tab.label)
                        }
                    }
                }
            }
            (case_controls(gallery))
            h3.picabench-case-title id="picabench-case-title" {
                @if let Some(gallery) = gallery { (gallery.case_title()) }
            }
            p.picabench-instruction id="picabench-instruction" {
                @if let Some(gallery) = gallery { (gallery.instruction()) }
            }
            div.picabench-grid id="picabench-grid" {
                @match (phase.placeholder(), gallery) {
                    (Some(p), _) => { (placeholder(p)) }
                    (None, Some(gallery)) => {
                        @if let Some(p) = gallery.grid().placeholder() {
                            (placeholder(p))
                        } @else {
                            @for c in gallery.cards() {
                                (card(c))
                            }
                        }
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

/// Renders a complete showcase document.
pub fn render_page(title: &str, carousel: Option<&Carousel>, phase: &GalleryPhase) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="static/css/picabench.css";
            }
            body {
                main.picabench-showcase {
                    h1 { (title) }
                    @if let Some(carousel) = carousel {
                        (render_carousel(carousel))
                    }
                    (render_gallery(phase))
                }
                script src="static/js/picabench-example.js" defer {}
                script src="static/js/picabench-gallery.js" defer {}
            }
        }
    }
}

/// Write a rendered page to `path`, creating parent directories.
pub fn write_page(path: &Path, markup: Markup) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markup.into_string())?;
    Ok(())
}
