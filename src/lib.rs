//! # PICABench Showcase
//!
//! The two interactive widgets of the PICABench showcase page, built as
//! headless state machines plus the markup that presents them:
//!
//! - **Example carousel**: a fixed list of example images that auto-advances,
//!   pauses on hover, and steps with the arrow keys.
//! - **Comparison gallery**: laws and cases from a static results manifest,
//!   shown as a grid of method cards that either flip between input and output
//!   on a timer (auto mode) or reveal outputs on hover/focus (interactive mode).
//!
//! # Architecture: Events In, View Out
//!
//! ```text
//! host event loop ──key / pointer / focus / elapsed time──▶ Carousel, Gallery
//!                                                             │
//!                        render (maud) ◀──── view state ──────┘
//! ```
//!
//! Widgets never own a clock or a thread. The host reports elapsed time and
//! input events; each widget mutates its own state synchronously and exposes
//! what should be on screen. Timers are plain values ([`timer::TimerSlot`])
//! holding at most one live interval, so "only one timer of each kind" holds
//! by construction.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Results manifest model, lenient JSON decoding, card filtering |
//! | [`timer`] | Cancellable repeating intervals driven by elapsed time |
//! | [`events`] | Keyboard, pointer, and focus events delivered by the host |
//! | [`carousel`] | Example carousel state machine |
//! | [`gallery`] | Gallery load phases, law/case selection, grid and mode visuals |
//! | [`render`] | Maud markup for both widgets and the full page |
//! | [`assets`] | Verifies that every referenced image exists |
//! | [`config`] | `showcase.toml` loading, validation, and stock template |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lenient Manifest
//!
//! The manifest is exported by a separate script. Only unparseable JSON is an
//! error; wrong-typed fields decode as empty and surface as placeholder
//! messages in the grid instead of failures.
//!
//! ## Case Navigation Is Not Image Navigation
//!
//! Previous/next controls are disabled when the current law has at most one
//! case, regardless of how many cards that case shows.

pub mod assets;
pub mod carousel;
pub mod config;
pub mod events;
pub mod gallery;
pub mod manifest;
pub mod output;
pub mod render;
pub mod timer;

#[cfg(test)]
pub(crate) mod test_helpers;
