//! Example carousel: a fixed list of benchmark examples shown one at a time.
//!
//! The carousel auto-advances on a timer, pauses while the pointer is over
//! it, and steps with the left/right arrow keys. Navigation wraps in both
//! directions.

use crate::events::{KeyEvent, KeyOutcome, wrap_step};
use crate::timer::TimerSlot;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleItem {
    pub src: String,
    pub label: String,
}

impl ExampleItem {
    pub fn new(src: &str, label: &str) -> Self {
        Self {
            src: src.to_string(),
            label: label.to_string(),
        }
    }
}

const EXAMPLE_DIR: &str = "static/img/PICABench_Example";

/// The stock showcase examples, one per law sub-category.
pub fn default_examples() -> Vec<ExampleItem> {
    [
        ("example_optics_lightpropagation.png", "Optics · Light Propagation"),
        ("example_optics_lightsource.png", "Optics · Light Source Effects"),
        ("example_optics_reflection.png", "Optics · Reflection"),
        ("example_optics_refraction.png", "Optics · Refraction"),
        ("example_mechanics_causality.png", "Mechanics · Causality"),
        ("example_mechanics_deformation.png", "Mechanics · Deformation"),
        ("example_state_gst.png", "State Transition · Global"),
        ("example_state_lst.png", "State Transition · Local"),
    ]
    .into_iter()
    .map(|(file, label)| ExampleItem::new(&format!("{EXAMPLE_DIR}/{file}"), label))
    .collect()
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<ExampleItem>,
    index: usize,
    interval: Duration,
    timer: TimerSlot,
}

impl Carousel {
    /// Create a carousel showing the first item with auto-advance running.
    ///
    /// Returns `None` for an empty list; the host then leaves the widget alone.
    pub fn new(items: Vec<ExampleItem>, interval: Duration) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let mut carousel = Self {
            items,
            index: 0,
            interval,
            timer: TimerSlot::default(),
        };
        carousel.start_auto();
        Some(carousel)
    }

    pub fn items(&self) -> &[ExampleItem] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The item currently on display. Its label doubles as the image alt text.
    pub fn current(&self) -> &ExampleItem {
        &self.items[self.index]
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_running()
    }

    /// Move by `delta` positions, wrapping around the list.
    ///
    /// With `restart`, the auto-advance countdown begins again so a manual
    /// step is never followed immediately by an automatic one.
    pub fn navigate(&mut self, delta: isize, restart: bool) {
        self.index = wrap_step(self.index, delta, self.items.len());
        debug!(index = self.index, label = %self.current().label, "carousel navigated");
        if restart {
            self.start_auto();
        }
    }

    pub fn start_auto(&mut self) {
        self.timer.start(self.interval);
    }

    pub fn stop_auto(&mut self) {
        self.timer.stop();
    }

    pub fn on_pointer_enter(&mut self) {
        self.stop_auto();
    }

    pub fn on_pointer_leave(&mut self) {
        self.start_auto();
    }

    /// Arrow keys step the carousel unless a text field outside the carousel
    /// holds focus.
    pub fn on_key_down(&mut self, event: &KeyEvent, focus_within_root: bool) -> KeyOutcome {
        if !focus_within_root && event.target.is_text_entry() {
            return KeyOutcome::Ignored;
        }
        match event.key.step() {
            Some(delta) => {
                self.navigate(delta, true);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Report elapsed time. Each completed period advances one item without
    /// restarting the countdown.
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.timer.advance(dt) as usize;
        if fired > 0 {
            self.navigate((fired % self.items.len()) as isize, false);
        }
    }
}
