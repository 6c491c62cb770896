//! Roving-focus tracker for composite widgets.
//!
//! Implements the WAI-ARIA roving-tabindex pattern over an ordered set of
//! item ids: exactly one item is "active" (reachable in the tab order) at a
//! time, and arrow keys move that single stop among siblings with wraparound.
//! The tracker owns arrow-key navigation; the composing widget owns
//! everything else (selection, filtering, typeahead).

use crossterm::event::{KeyCode, KeyEvent};

/// Navigation axis of a composite widget. `Unset` behaves as vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// No explicit orientation; arrow handling matches `Vertical`.
    #[default]
    Unset,
    /// Left/Right arrows navigate; Up/Down are ignored.
    Horizontal,
    /// Up/Down arrows navigate; Left/Right are ignored.
    Vertical,
}

impl Orientation {
    /// The `aria-orientation` attribute value, or `None` when unset.
    pub fn as_aria(self) -> Option<&'static str> {
        match self {
            Orientation::Unset => None,
            Orientation::Horizontal => Some("horizontal"),
            Orientation::Vertical => Some("vertical"),
        }
    }
}

/// Tracks which item in an ordered collection holds the single focus stop.
///
/// Items are referenced by the stable ids their owner assigns. Every
/// operation on an empty tracker is a no-op; indices clamp rather than panic.
#[derive(Debug, Default)]
pub struct RovingFocus {
    items: Vec<String>,
    active: Option<usize>,
    orientation: Orientation,
}

impl RovingFocus {
    /// Create an empty tracker with no active item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the navigation orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Replace the tracked items and reset the active pointer to the first
    /// item (or none, when the list is empty).
    pub fn init_items(&mut self, items: Vec<String>) {
        self.active = if items.is_empty() { None } else { Some(0) };
        self.items = items;
    }

    /// Replace the tracked items, preserving the active item by id when it
    /// still exists in the new list, otherwise defaulting to the first.
    pub fn update_items(&mut self, items: Vec<String>) {
        let previous = self.active_item().map(str::to_string);
        self.items = items;
        self.active = match previous.and_then(|id| self.position(&id)) {
            Some(i) => Some(i),
            None if self.items.is_empty() => None,
            None => Some(0),
        };
    }

    /// The tracked item ids, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The id of the active item, if any.
    pub fn active_item(&self) -> Option<&str> {
        self.active.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    /// The index of the active item within the tracked list.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Whether the given id is the active item.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_item() == Some(id)
    }

    /// Reassign the active pointer without moving input focus. Returns
    /// `false` (and leaves the pointer untouched) when the id is untracked.
    pub fn update_active_item(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(i) => {
                self.active = Some(i);
                true
            }
            None => false,
        }
    }

    /// Reassign the active pointer and report the id that should receive
    /// real input focus. Returns `None` when the id is untracked.
    pub fn focus_on_item(&mut self, id: &str) -> Option<&str> {
        if !self.update_active_item(id) {
            return None;
        }
        self.active_item()
    }

    /// Advance the active pointer, wrapping past the end.
    pub fn next(&mut self) -> Option<&str> {
        self.step(1)
    }

    /// Retreat the active pointer, wrapping before the start.
    pub fn prev(&mut self) -> Option<&str> {
        self.step(-1)
    }

    /// Handle an arrow key according to the configured orientation, returning
    /// the id of the newly active item when the key was handled. Arrows on
    /// the other axis (and all non-arrow keys) are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<&str> {
        let horizontal = self.orientation == Orientation::Horizontal;
        match key.code {
            KeyCode::Up if !horizontal => self.prev(),
            KeyCode::Down if !horizontal => self.next(),
            KeyCode::Left if horizontal => self.prev(),
            KeyCode::Right if horizontal => self.next(),
            _ => None,
        }
    }

    fn step(&mut self, delta: isize) -> Option<&str> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as isize;
        let current = self.active.unwrap_or(0).min(self.items.len() - 1) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active = Some(next);
        self.active_item()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn init_resets_to_first() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b", "c"]));
        assert_eq!(rf.active_item(), Some("a"));
        rf.next();
        rf.init_items(ids(&["x", "y"]));
        assert_eq!(rf.active_item(), Some("x"));
    }

    #[test]
    fn init_empty_has_no_active() {
        let mut rf = RovingFocus::new();
        rf.init_items(vec![]);
        assert_eq!(rf.active_item(), None);
    }

    #[test]
    fn update_preserves_active_by_id() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b", "c"]));
        rf.update_active_item("b");
        rf.update_items(ids(&["c", "b"]));
        assert_eq!(rf.active_item(), Some("b"));
        assert_eq!(rf.active_index(), Some(1));
    }

    #[test]
    fn update_defaults_to_first_when_active_removed() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b"]));
        rf.update_active_item("b");
        rf.update_items(ids(&["a", "c"]));
        assert_eq!(rf.active_item(), Some("a"));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b", "c"]));
        assert_eq!(rf.next(), Some("b"));
        assert_eq!(rf.next(), Some("c"));
        assert_eq!(rf.next(), Some("a"));
        assert_eq!(rf.prev(), Some("c"));
    }

    #[test]
    fn empty_navigation_is_noop() {
        let mut rf = RovingFocus::new();
        assert_eq!(rf.next(), None);
        assert_eq!(rf.prev(), None);
        assert_eq!(rf.handle_key(&key(KeyCode::Down)), None);
    }

    #[test]
    fn unknown_id_leaves_pointer() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b"]));
        assert!(!rf.update_active_item("zzz"));
        assert_eq!(rf.active_item(), Some("a"));
        assert_eq!(rf.focus_on_item("zzz"), None);
    }

    #[test]
    fn vertical_ignores_horizontal_arrows() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b"]));
        assert_eq!(rf.handle_key(&key(KeyCode::Right)), None);
        assert_eq!(rf.handle_key(&key(KeyCode::Left)), None);
        assert_eq!(rf.handle_key(&key(KeyCode::Down)), Some("b"));
        assert_eq!(rf.handle_key(&key(KeyCode::Up)), Some("a"));
    }

    #[test]
    fn horizontal_ignores_vertical_arrows() {
        let mut rf = RovingFocus::new();
        rf.set_orientation(Orientation::Horizontal);
        rf.init_items(ids(&["a", "b"]));
        assert_eq!(rf.handle_key(&key(KeyCode::Down)), None);
        assert_eq!(rf.handle_key(&key(KeyCode::Right)), Some("b"));
        assert_eq!(rf.handle_key(&key(KeyCode::Left)), Some("a"));
    }

    #[test]
    fn unset_orientation_behaves_vertical() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b"]));
        assert_eq!(rf.handle_key(&key(KeyCode::Down)), Some("b"));
        assert_eq!(rf.handle_key(&key(KeyCode::Right)), None);
    }

    #[test]
    fn focus_on_item_returns_focus_target() {
        let mut rf = RovingFocus::new();
        rf.init_items(ids(&["a", "b", "c"]));
        assert_eq!(rf.focus_on_item("c"), Some("c"));
        assert!(rf.is_active("c"));
    }

    #[test]
    fn orientation_aria_values() {
        assert_eq!(Orientation::Unset.as_aria(), None);
        assert_eq!(Orientation::Horizontal.as_aria(), Some("horizontal"));
        assert_eq!(Orientation::Vertical.as_aria(), Some("vertical"));
    }
}
