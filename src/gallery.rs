//! Comparison gallery: law tabs, case navigation, and the method grid.
//!
//! ## Lifecycle
//!
//! ```text
//! Loading ──load ok, laws──▶ Ready(Gallery)
//!    │  └───load ok, no laws──▶ Empty
//!    └──────load failed───────▶ Failed
//! ```
//!
//! The manifest is loaded once. A failed load shows a placeholder and the
//! gallery never initialises; there is no retry.
//!
//! ## State
//!
//! A ready [`Gallery`] owns the manifest plus `(current law, case index, mode)`.
//! Every grid rebuild re-reads the current law and case, rebuilds the cards,
//! and reapplies the mode visuals.
//!
//! ## Modes
//!
//! - **Auto**: one repeating timer flips every card between its output and
//!   the shared input image. All cards flip together.
//! - **Interactive**: no timer. Hover or keyboard focus on any card shows every
//!   card's output; leaving the grid shows the inputs again.
//!
//! Switching mode tears down the previous mode first. Interaction listeners
//! carry an `attached` flag so attaching or detaching twice is harmless.

use crate::config::GalleryConfig;
use crate::events::{KeyEvent, KeyOutcome, PointerTarget, wrap_step};
use crate::manifest::{Law, Manifest, ManifestError, build_card_list};
use crate::timer::TimerSlot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Auto,
    Interactive,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Interactive => "interactive",
        }
    }

    pub const ALL: [Mode; 2] = [Mode::Auto, Mode::Interactive];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Mode::Auto),
            "interactive" => Ok(Mode::Interactive),
            other => Err(format!("unknown gallery mode '{other}'")),
        }
    }
}

/// Messages shown in place of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    LoadFailed,
    ComingSoon,
    NoVisuals,
    NoLawSelected,
    NoCases,
    NoAssets,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::Loading => "Loading visual comparisons…",
            Placeholder::LoadFailed => "Unable to load results. Please refresh the page.",
            Placeholder::ComingSoon => "PICABench examples will appear here soon.",
            Placeholder::NoVisuals => "No visuals available for this selection.",
            Placeholder::NoLawSelected => "No physics law selected.",
            Placeholder::NoCases => "No curated examples for this law yet.",
            Placeholder::NoAssets => "No visual assets found for this case.",
        }
    }
}

/// Which of its two images a card is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Input,
    Output,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub method_id: String,
    pub label: String,
    pub alt: String,
    pub input_src: String,
    pub output_src: String,
    /// The reserved `input` method. Informational only: not focusable and
    /// always shows the input image.
    pub is_input: bool,
    pub face: Face,
}

impl CardView {
    pub fn displayed_src(&self) -> &str {
        match self.face {
            Face::Input => &self.input_src,
            Face::Output => &self.output_src,
        }
    }

    /// Cards other than the input card act as buttons in the tab order.
    pub fn focusable(&self) -> bool {
        !self.is_input
    }

    fn show_output(&mut self) {
        self.face = if self.is_input {
            Face::Input
        } else {
            Face::Output
        };
    }

    fn show_input(&mut self) {
        self.face = Face::Input;
    }
}

/// Grid contents: cards or a placeholder message.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid {
    Cards(Vec<CardView>),
    Placeholder(Placeholder),
}

impl Grid {
    pub fn cards(&self) -> &[CardView] {
        match self {
            Grid::Cards(cards) => cards,
            Grid::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Grid::Placeholder(p) => Some(*p),
            Grid::Cards(_) => None,
        }
    }
}

/// A law selector button.
#[derive(Debug, Clone, PartialEq)]
pub struct LawTab<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub active: bool,
}

impl LawTab<'_> {
    /// Roving tab index: only the active tab is in the tab order.
    pub fn tab_index(&self) -> i32 {
        if self.active { 0 } else { -1 }
    }
}

/// Load phase of the gallery widget.
#[derive(Debug, Clone)]
pub enum GalleryPhase {
    Loading,
    Failed,
    Empty,
    Ready(Box<Gallery>),
}

impl GalleryPhase {
    /// Resolve the outcome of the one-time manifest load.
    pub fn from_load(result: Result<Manifest, ManifestError>, config: &GalleryConfig) -> Self {
        match result {
            Ok(manifest) => Self::from_manifest(manifest, config),
            Err(e) => {
                error!(error = %e, "failed to load results manifest");
                GalleryPhase::Failed
            }
        }
    }

    pub fn from_manifest(manifest: Manifest, config: &GalleryConfig) -> Self {
        match Gallery::new(manifest, config.clone()) {
            Some(gallery) => GalleryPhase::Ready(Box::new(gallery)),
            None => GalleryPhase::Empty,
        }
    }

    /// Placeholder shown while the gallery is not ready.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            GalleryPhase::Loading => Some(Placeholder::Loading),
            GalleryPhase::Failed => Some(Placeholder::LoadFailed),
            GalleryPhase::Empty => Some(Placeholder::ComingSoon),
            GalleryPhase::Ready(_) => None,
        }
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            GalleryPhase::Ready(gallery) => Some(&**gallery),
            _ => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match self {
            GalleryPhase::Ready(gallery) => Some(&mut **gallery),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    manifest: Manifest,
    config: GalleryConfig,
    current_law: String,
    case_index: usize,
    mode: Mode,
    grid: Grid,
    instruction: String,
    case_title: String,
    nav_disabled: bool,
    flip_timer: TimerSlot,
    flip_showing_output: bool,
    listeners_attached: bool,
    render_count: usize,
}

impl Gallery {
    /// Initialise on the first law. Returns `None` when the manifest has no laws.
    pub fn new(manifest: Manifest, config: GalleryConfig) -> Option<Self> {
        let first_key = manifest.laws.first()?.key.clone();
        let mut gallery = Self {
            mode: config.initial_mode,
            manifest,
            config,
            current_law: first_key.clone(),
            case_index: 0,
            grid: Grid::Placeholder(Placeholder::Loading),
            instruction: String::new(),
            case_title: String::new(),
            nav_disabled: false,
            flip_timer: TimerSlot::default(),
            flip_showing_output: false,
            listeners_attached: false,
            render_count: 0,
        };
        gallery.select_law(&first_key);
        Some(gallery)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn current_law_key(&self) -> &str {
        &self.current_law
    }

    pub fn current_law(&self) -> Option<&Law> {
        self.manifest.law(&self.current_law)
    }

    pub fn case_index(&self) -> usize {
        self.case_index
    }

    /// Number of cases in the current law.
    pub fn case_total(&self) -> usize {
        self.current_law().map(|law| law.cases.len()).unwrap_or(0)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cards(&self) -> &[CardView] {
        self.grid.cards()
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn case_title(&self) -> &str {
        &self.case_title
    }

    pub fn nav_disabled(&self) -> bool {
        self.nav_disabled
    }

    pub fn is_flipping(&self) -> bool {
        self.flip_timer.is_running()
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// How many times the grid has been rebuilt.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn law_tabs(&self) -> Vec<LawTab<'_>> {
        self.manifest
            .laws
            .iter()
            .map(|law| LawTab {
                key: &law.key,
                label: &law.label,
                active: law.key == self.current_law,
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Switch to a law and show its first case. An empty key is ignored.
    pub fn select_law(&mut self, key: &str) {
        if key.is_empty() {
            return;
        }
        debug!(law = key, "law selected");
        self.current_law = key.to_string();
        self.case_index = 0;
        self.set_case(0, true);
    }

    /// Step through the current law's cases, wrapping at both ends.
    pub fn navigate_case(&mut self, delta: isize) {
        let total = self.case_total();
        if total == 0 {
            self.set_case(0, false);
            return;
        }
        let target = wrap_step(self.case_index, delta, total);
        self.set_case(target as isize, false);
    }

    /// Move to `index` (wrapped into range) and rebuild the grid when the
    /// index changed, when `force` is set, or when the law has a single case.
    pub fn set_case(&mut self, index: isize, force: bool) {
        let total = self.case_total();
        if total == 0 {
            self.case_index = 0;
            self.show_placeholder(Placeholder::NoVisuals);
            return;
        }
        let normalised = wrap_step(0, index, total);
        let previous = self.case_index;
        self.case_index = normalised;
        if force || total <= 1 || previous != normalised {
            self.update_grid();
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        debug!(%mode, "gallery mode set");
        self.mode = mode;
        self.update_grid();
    }

    /// Click on a mode button carrying `data-mode`. Unknown or current modes
    /// are ignored.
    pub fn on_mode_button(&mut self, data_mode: &str) {
        match data_mode.parse::<Mode>() {
            Ok(mode) if mode != self.mode => self.set_mode(mode),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    /// Window-level arrow key navigation between cases.
    pub fn on_key_down(&mut self, event: &KeyEvent) -> KeyOutcome {
        if event.default_prevented || event.modifiers.any() || event.target.is_form_control() {
            return KeyOutcome::Ignored;
        }
        match event.key.step() {
            Some(delta) => {
                self.navigate_case(delta);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Ignored,
        }
    }

    pub fn on_pointer_over(&mut self, target: PointerTarget) {
        if self.interactive_listening() && target.is_card() {
            self.show_all_outputs();
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.interactive_listening() {
            self.show_all_inputs();
        }
    }

    pub fn on_focus_in(&mut self, target: PointerTarget) {
        if self.interactive_listening() && target.is_card() {
            self.show_all_outputs();
        }
    }

    /// Focus left `target`; `related` is where it went, if anywhere.
    /// Moving focus between cards keeps the outputs visible.
    pub fn on_focus_out(&mut self, related: Option<PointerTarget>) {
        if !self.interactive_listening() {
            return;
        }
        if related.is_some_and(|r| r.is_within_grid()) {
            return;
        }
        self.show_all_inputs();
    }

    /// Report elapsed time to the auto-flip timer.
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.flip_timer.advance(dt);
        if fired == 0 {
            return;
        }
        // An even number of flips lands back on the same face
        if fired % 2 == 1 {
            self.flip_showing_output = !self.flip_showing_output;
        }
        if self.flip_showing_output {
            self.show_all_outputs();
        } else {
            self.show_all_inputs();
        }
    }

    // ------------------------------------------------------------------
    // Grid
    // ------------------------------------------------------------------

    fn update_grid(&mut self) {
        self.render_count += 1;
        let Some(law) = self.manifest.law(&self.current_law) else {
            self.show_placeholder(Placeholder::NoLawSelected);
            return;
        };
        if law.cases.is_empty() {
            self.show_placeholder(Placeholder::NoCases);
            return;
        }

        let total = law.cases.len();
        self.case_index = self.case_index.min(total - 1);
        let case = &law.cases[self.case_index];
        let instruction = case.instruction.clone();
        let cards: Vec<CardView> = if case.images.is_empty() {
            Vec::new()
        } else {
            build_card_list(
                &case.images,
                self.config.max_cards,
                &self.config.excluded_prefixes,
            )
            .into_iter()
            .map(|entry| {
                let input_src = if case.input_image.is_empty() {
                    entry.path.clone()
                } else {
                    case.input_image.clone()
                };
                CardView {
                    method_id: entry.id.clone(),
                    label: entry.label.clone(),
                    alt: format!("{} result", entry.label),
                    output_src: entry.path.clone(),
                    input_src,
                    is_input: entry.is_input(),
                    face: match self.mode {
                        Mode::Interactive => Face::Input,
                        Mode::Auto => Face::Output,
                    },
                }
            })
            .collect()
        };
        let has_images = !case.images.is_empty();

        self.nav_disabled = total <= 1;
        if self.nav_disabled {
            self.stop_auto_flip();
        }
        self.case_title.clear();
        self.instruction = instruction;

        if !has_images {
            self.detach_listeners();
            self.stop_auto_flip();
            self.grid = Grid::Placeholder(Placeholder::NoAssets);
            return;
        }

        debug!(
            law = %self.current_law,
            case = self.case_index,
            cards = cards.len(),
            "grid rebuilt"
        );
        self.grid = Grid::Cards(cards);
        self.apply_mode_visuals();
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.nav_disabled = true;
        self.detach_listeners();
        self.stop_auto_flip();
        self.case_title.clear();
        self.instruction.clear();
        self.grid = Grid::Placeholder(placeholder);
    }

    fn apply_mode_visuals(&mut self) {
        match self.mode {
            Mode::Interactive => {
                self.attach_listeners();
                self.stop_auto_flip();
                self.show_all_inputs();
            }
            Mode::Auto => {
                self.detach_listeners();
                self.show_all_inputs();
                // Single-case laws hold still
                if self.nav_disabled {
                    self.stop_auto_flip();
                } else {
                    self.start_auto_flip();
                }
            }
        }
    }

    fn attach_listeners(&mut self) {
        if self.listeners_attached {
            return;
        }
        self.listeners_attached = true;
    }

    fn detach_listeners(&mut self) {
        if !self.listeners_attached {
            return;
        }
        self.listeners_attached = false;
    }

    fn interactive_listening(&self) -> bool {
        self.listeners_attached && self.mode == Mode::Interactive
    }

    fn show_all_outputs(&mut self) {
        if let Grid::Cards(cards) = &mut self.grid {
            cards.iter_mut().for_each(CardView::show_output);
        }
    }

    fn show_all_inputs(&mut self) {
        if let Grid::Cards(cards) = &mut self.grid {
            cards.iter_mut().for_each(CardView::show_input);
        }
    }

    fn start_auto_flip(&mut self) {
        self.stop_auto_flip();
        if self.cards().is_empty() {
            return;
        }
        self.flip_timer.start(self.config.flip_interval());
    }

    fn stop_auto_flip(&mut self) {
        self.flip_timer.stop();
        self.flip_showing_output = false;
    }
}
