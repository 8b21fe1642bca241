//! Input events delivered to the widgets by the host page.

/// Keyboard keys the widgets react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }

    /// Case step for arrow keys.
    pub fn step(&self) -> Option<isize> {
        match self {
            Key::ArrowLeft => Some(-1),
            Key::ArrowRight => Some(1),
            Key::Other(_) => None,
        }
    }
}

/// Apply `delta` to `index` in a ring of `len` items, wrapping at both ends.
///
/// Any `delta` is accepted; `len` must be nonzero.
pub fn wrap_step(index: usize, delta: isize, len: usize) -> usize {
    (index as i128 + delta as i128).rem_euclid(len as i128) as usize
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.meta || self.ctrl || self.alt || self.shift
    }
}

/// Kind of element that owns keyboard focus or received an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementKind {
    Input,
    TextArea,
    Select,
    #[default]
    Other,
}

impl ElementKind {
    /// Map a DOM `tagName`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "INPUT" => ElementKind::Input,
            "TEXTAREA" => ElementKind::TextArea,
            "SELECT" => ElementKind::Select,
            _ => ElementKind::Other,
        }
    }

    /// Elements that consume arrow keys for text editing.
    pub fn is_text_entry(&self) -> bool {
        matches!(self, ElementKind::Input | ElementKind::TextArea)
    }

    pub fn is_form_control(&self) -> bool {
        matches!(
            self,
            ElementKind::Input | ElementKind::TextArea | ElementKind::Select
        )
    }
}

/// A window-level `keydown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub target: ElementKind,
    /// Set when an earlier listener already handled the event.
    pub default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            target: ElementKind::Other,
            default_prevented: false,
        }
    }

    pub fn with_target(mut self, target: ElementKind) -> Self {
        self.target = target;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Record the outcome of a listener, the way `preventDefault` marks a DOM event.
    pub fn record(&mut self, outcome: KeyOutcome) {
        if outcome == KeyOutcome::Handled {
            self.default_prevented = true;
        }
    }
}

/// Result of offering a key event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The widget acted on the key and prevented the default action.
    Handled,
    Ignored,
}

/// Where a pointer or focus event landed relative to the comparison grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the card at this grid position.
    Card(usize),
    /// Inside the grid but between cards.
    Grid,
    Outside,
}

impl PointerTarget {
    pub fn is_card(&self) -> bool {
        matches!(self, PointerTarget::Card(_))
    }

    pub fn is_within_grid(&self) -> bool {
        !matches!(self, PointerTarget::Outside)
    }
}
