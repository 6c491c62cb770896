//! Listbox coordinator: selection, filtering, typeahead, and keyboard
//! navigation over a host-supplied option collection.
//!
//! The coordinator is the single authority for filter and selection state.
//! It composes two leaf collaborators — the [`RovingFocus`] tracker, which
//! owns the single "active" focus stop and arrow-key navigation, and the
//! [`a11y`] publisher, which projects state into accessibility attributes —
//! and routes host-forwarded input events into state transitions.
//!
//! Hosts forward four event kinds verbatim ([`Message::KeyDown`],
//! [`Message::KeyUp`], [`Message::Click`], [`Message::OptionFocused`]) plus
//! two configuration messages ([`Message::SetFilter`],
//! [`Message::SetValue`]). The coordinator answers with at most one
//! notification per turn: [`Message::Input`] when the derived value changed
//! programmatically, [`Message::Changed`] when it changed through a committed
//! user action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};
use opal_core::{Command, Component};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::a11y;
use crate::option::{ListOption, Value};
use crate::roving::{Orientation, RovingFocus};

/// Filter text that bypasses filtering entirely.
const WILDCARD: &str = "*";

/// Messages for the listbox coordinator.
#[derive(Debug, Clone)]
pub enum Message<V> {
    /// A key press forwarded from the host.
    KeyDown(KeyEvent),
    /// A key release forwarded from the host. Only Shift releases are
    /// meaningful (range reconciliation in multi-select mode).
    KeyUp(KeyEvent),
    /// An option was clicked, with the modifiers held at click time.
    Click(String, KeyModifiers),
    /// An option received real input focus.
    OptionFocused(String),
    /// Replace the filter text.
    SetFilter(String),
    /// Select exactly the options whose values appear in the payload
    /// (membership in multi-select mode, first element in single-select).
    SetValue(Vec<V>),
    /// Outbound: the derived value changed programmatically (filter side
    /// effect or [`Message::SetValue`]).
    Input(Value<V>),
    /// Outbound: the derived value changed through a committed user action
    /// (click, Enter/Space, Ctrl+A, Shift range, selection-follows-focus).
    Changed(Value<V>),
}

/// Style configuration for the listbox.
#[derive(Debug, Clone)]
pub struct ListboxStyle {
    /// Base style for unselected options.
    pub normal: Style,
    /// Style applied to selected options.
    pub selected: Style,
    /// Style applied to disabled options.
    pub disabled: Style,
    /// Symbol rendered to the left of the active option (e.g. "▸ ").
    pub highlight_symbol: String,
}

impl Default for ListboxStyle {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// The option that was active when Shift went down, one endpoint of any
/// subsequent range gesture. Its selection state at that moment decides what
/// a plain (non-Ctrl) range applies.
#[derive(Debug, Clone)]
struct ShiftAnchor {
    id: String,
    selected: bool,
}

/// A filterable, keyboard-navigable listbox with single- or multi-select
/// semantics.
///
/// The host supplies the option collection via [`set_options`](Self::set_options)
/// and must not mutate option annotations directly afterwards; the
/// coordinator owns them. The derived value is never stored — query it with
/// [`value`](Self::value).
///
/// # Example
///
/// ```ignore
/// use opal_widgets::listbox::Listbox;
/// use opal_widgets::option::ListOption;
///
/// let mut listbox = Listbox::new().with_multi_selectable(true);
/// listbox.set_options(vec![
///     ListOption::new("o1", "Blue", "blue"),
///     ListOption::new("o2", "Green", "green"),
/// ]);
/// ```
pub struct Listbox<V> {
    options: Vec<ListOption<V>>,
    filter: String,
    case_sensitive: bool,
    disable_filter: bool,
    match_anywhere: bool,
    multi_selectable: bool,
    orientation: Orientation,
    disabled: bool,
    /// Transient wildcard override, set by a `*` keystroke and cleared at the
    /// top of the next keydown.
    show_all: bool,
    shift_anchor: Option<ShiftAnchor>,
    /// The option the environment reports as holding real input focus.
    focused_option: Option<String>,
    /// Focus intent for the host to apply after its render settles.
    pending_focus: Option<String>,
    roving: RovingFocus,
    focus: bool,
    style: ListboxStyle,
    block: Option<Block<'static>>,
}

impl<V: Clone + PartialEq + Send + 'static> Listbox<V> {
    /// Create an empty listbox with default configuration: filtering on,
    /// case-insensitive, match-at-start, single-select, unset orientation.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            filter: String::new(),
            case_sensitive: false,
            disable_filter: false,
            match_anywhere: false,
            multi_selectable: false,
            orientation: Orientation::Unset,
            disabled: false,
            show_all: false,
            shift_anchor: None,
            focused_option: None,
            pending_focus: None,
            roving: RovingFocus::new(),
            focus: false,
            style: ListboxStyle::default(),
            block: None,
        }
    }

    /// Create a listbox pre-populated with options.
    pub fn with_options(options: Vec<ListOption<V>>) -> Self {
        let mut listbox = Self::new();
        listbox.set_options(options);
        listbox
    }

    /// Enable or disable multi-select at construction.
    pub fn with_multi_selectable(mut self, multi: bool) -> Self {
        self.multi_selectable = multi;
        self
    }

    /// Make filter and typeahead matching case-sensitive.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Match the filter anywhere in the option text instead of only at the
    /// start.
    pub fn with_match_anywhere(mut self, match_anywhere: bool) -> Self {
        self.match_anywhere = match_anywhere;
        self
    }

    /// Disable text filtering entirely; every option stays visible.
    pub fn with_disable_filter(mut self, disable_filter: bool) -> Self {
        self.disable_filter = disable_filter;
        self
    }

    /// Set the navigation orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self.roving.set_orientation(orientation);
        self
    }

    /// Set the visual style configuration.
    pub fn with_style(mut self, style: ListboxStyle) -> Self {
        self.style = style;
        self
    }

    /// Set an optional block (border/chrome) around the listbox.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    // --- Configuration setters (each re-evaluates dependent derived state) ---

    /// Toggle case sensitivity and re-evaluate the visible set.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        if self.case_sensitive != case_sensitive {
            self.case_sensitive = case_sensitive;
            self.reconcile_with_focus();
        }
    }

    /// Toggle match-anywhere and re-evaluate the visible set.
    pub fn set_match_anywhere(&mut self, match_anywhere: bool) {
        if self.match_anywhere != match_anywhere {
            self.match_anywhere = match_anywhere;
            self.reconcile_with_focus();
        }
    }

    /// Toggle the filter as a whole and re-evaluate the visible set.
    pub fn set_disable_filter(&mut self, disable_filter: bool) {
        if self.disable_filter != disable_filter {
            self.disable_filter = disable_filter;
            self.reconcile_with_focus();
        }
    }

    /// Switch between single- and multi-select. Leaving multi-select
    /// collapses the selection to its first member so the single-selection
    /// invariant holds, and drops any pending range anchor.
    pub fn set_multi_selectable(&mut self, multi: bool) {
        if self.multi_selectable == multi {
            return;
        }
        self.multi_selectable = multi;
        if !multi {
            self.shift_anchor = None;
            let mut seen = false;
            for opt in &mut self.options {
                if opt.selected {
                    if seen {
                        opt.selected = false;
                    } else {
                        seen = true;
                    }
                }
            }
            let selected = self
                .options
                .iter()
                .find(|o| o.selected())
                .map(|o| o.id().to_string());
            if let Some(id) = selected {
                self.roving.update_active_item(&id);
            }
        }
    }

    /// Set the navigation orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.roving.set_orientation(orientation);
    }

    /// Enable or disable the whole listbox. While disabled, every message is
    /// silently ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    // --- Option collection ---

    /// Replace the full option list.
    ///
    /// No-op when the new list has the same option ids in the same order
    /// (identity-and-order comparison, not deep equality), so re-supplying an
    /// unchanged collection never disturbs selection or focus. On an actual
    /// replacement every option is re-annotated with its position-in-set and
    /// the set size, and the roving tracker is reinitialized on the visible
    /// subset with the first item active.
    pub fn set_options(&mut self, options: Vec<ListOption<V>>) {
        let unchanged = self.options.len() == options.len()
            && self.options.iter().zip(&options).all(|(a, b)| a.id() == b.id());
        if unchanged {
            return;
        }
        let set_size = options.len();
        self.options = options;
        for (i, opt) in self.options.iter_mut().enumerate() {
            opt.pos_in_set = i;
            opt.set_size = set_size;
        }
        let visible_ids = self.apply_hidden_markers();
        self.roving.init_items(visible_ids);
    }

    /// The full option list, in order.
    pub fn options(&self) -> &[ListOption<V>] {
        &self.options
    }

    /// The current filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether multi-select is enabled.
    pub fn multi_selectable(&self) -> bool {
        self.multi_selectable
    }

    /// Whether the listbox ignores interaction.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// The option currently tracked as the active descendant.
    pub fn active_option(&self) -> Option<&ListOption<V>> {
        self.roving.active_item().and_then(|id| self.option(id))
    }

    // --- Derived state (pure, no side effects) ---

    /// The derived value: every selected option's value in multi-select
    /// mode, the first selected option's value otherwise. Recomputed on
    /// every access.
    pub fn value(&self) -> Value<V> {
        if self.multi_selectable {
            Value::Many(
                self.options
                    .iter()
                    .filter(|o| o.selected())
                    .map(|o| o.value().clone())
                    .collect(),
            )
        } else {
            match self.options.iter().find(|o| o.selected()) {
                Some(opt) => Value::One(opt.value().clone()),
                None => Value::None,
            }
        }
    }

    /// The currently selected options, in list order.
    pub fn selected_options(&self) -> Vec<&ListOption<V>> {
        self.options.iter().filter(|o| o.selected()).collect()
    }

    /// The options the active filter lets through, in list order.
    ///
    /// Never empty while the full list is non-empty: when the filter matches
    /// nothing the full unfiltered list is shown instead. This query is pure;
    /// hidden markers only move in
    /// [`reconcile_visibility`](Self::reconcile_visibility).
    pub fn visible_options(&self) -> Vec<&ListOption<V>> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.options[i])
            .collect()
    }

    /// Whether every comma-separated token in `text` names an existing
    /// option's text. Empty input is invalid, not an error.
    pub fn is_valid(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        text.split(',').all(|token| {
            let token = token.trim();
            !token.is_empty() && self.options.iter().any(|o| o.text() == token)
        })
    }

    // --- Visibility reconciliation ---

    /// Re-derive the visible set and push it into the hidden markers and the
    /// roving tracker.
    ///
    /// `focused` is the option the environment currently reports as holding
    /// real input focus — ownership of that fact belongs to the host, so it
    /// is a parameter here rather than internal state. When the focused
    /// option is being hidden, the active pointer moves to the first visible
    /// option, a focus intent is queued for
    /// [`take_pending_focus`](Self::take_pending_focus), and in single-select
    /// mode the moved focus carries the selection with it.
    ///
    /// Returns whether the derived value changed as a side effect.
    pub fn reconcile_visibility(&mut self, focused: Option<&str>) -> bool {
        self.focused_option = focused.map(str::to_string);
        self.reconcile(focused)
    }

    /// Drain the focus intent queued by the last reconciliation or click,
    /// to be applied by the host once its render cycle settles.
    pub fn take_pending_focus(&mut self) -> Option<String> {
        self.pending_focus.take()
    }

    /// Mark the listbox focused and queue a focus restore to the active item.
    pub fn focus(&mut self) {
        self.focus = true;
        let active = self.roving.active_item().map(str::to_string);
        if let Some(id) = active {
            self.roving.focus_on_item(&id);
            self.pending_focus = Some(id);
        }
    }

    /// Remove focus from the listbox.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Project current state into accessibility attributes.
    pub fn aria_snapshot(&self) -> a11y::Snapshot {
        a11y::snapshot(
            &self.options,
            self.roving.active_item(),
            self.multi_selectable,
            self.orientation,
            self.disabled,
        )
    }

    // --- Internals ---

    fn option(&self, id: &str) -> Option<&ListOption<V>> {
        self.options.iter().find(|o| o.id() == id)
    }

    fn option_mut(&mut self, id: &str) -> Option<&mut ListOption<V>> {
        self.options.iter_mut().find(|o| o.id() == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id() == id)
    }

    fn visible_indices(&self) -> Vec<usize> {
        if self.disable_filter
            || self.show_all
            || self.filter == WILDCARD
            || self.filter.is_empty()
        {
            return (0..self.options.len()).collect();
        }
        let needle = if self.case_sensitive {
            self.filter.clone()
        } else {
            self.filter.to_lowercase()
        };
        let matched: Vec<usize> = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, opt)| {
                let text = if self.case_sensitive {
                    opt.text().to_string()
                } else {
                    opt.text().to_lowercase()
                };
                if self.match_anywhere {
                    text.contains(&needle)
                } else {
                    text.starts_with(&needle)
                }
            })
            .map(|(i, _)| i)
            .collect();
        if matched.is_empty() {
            (0..self.options.len()).collect()
        } else {
            matched
        }
    }

    /// Sync hidden markers with the visible set; returns the visible ids.
    fn apply_hidden_markers(&mut self) -> Vec<String> {
        let visible = self.visible_indices();
        let mut is_visible = vec![false; self.options.len()];
        for &i in &visible {
            is_visible[i] = true;
        }
        for (i, opt) in self.options.iter_mut().enumerate() {
            opt.hidden = !is_visible[i];
        }
        visible
            .iter()
            .map(|&i| self.options[i].id().to_string())
            .collect()
    }

    fn reconcile_with_focus(&mut self) -> bool {
        let focused = self.focused_option.clone();
        self.reconcile(focused.as_deref())
    }

    fn reconcile(&mut self, focused: Option<&str>) -> bool {
        let before = self.value();
        let visible_ids = self.apply_hidden_markers();
        let focus_lost = focused.is_some_and(|id| {
            self.options.iter().any(|o| o.id() == id) && !visible_ids.iter().any(|v| v == id)
        });
        self.roving.update_items(visible_ids);
        if focus_lost {
            let active = self.roving.active_item().map(str::to_string);
            if let Some(id) = active {
                self.pending_focus = Some(id.clone());
                self.focused_option = Some(id.clone());
                if !self.multi_selectable {
                    self.select_exclusive(&id);
                }
            }
        }
        self.value() != before
    }

    fn select_exclusive(&mut self, id: &str) {
        for opt in &mut self.options {
            opt.selected = opt.id() == id;
        }
    }

    /// Apply a range gesture between the anchor and the target, inclusive,
    /// over the full option list. The smaller index is the range start no
    /// matter which end is the anchor. With `ctrl` the range toggles as a
    /// unit (deselect when fully selected, select otherwise); without it,
    /// every option in the range takes the anchor's recorded selection state.
    /// A stale anchor collapses the range to the target item alone.
    fn apply_range(&mut self, anchor: &ShiftAnchor, target_id: &str, ctrl: bool) {
        let Some(target) = self.index_of(target_id) else {
            return;
        };
        let start = self.index_of(&anchor.id).unwrap_or(target);
        let (lo, hi) = if start <= target {
            (start, target)
        } else {
            (target, start)
        };
        let range = &mut self.options[lo..=hi];
        if ctrl {
            let all_selected = range.iter().all(|o| o.selected());
            for opt in range {
                opt.selected = !all_selected;
            }
        } else {
            for opt in range {
                opt.selected = anchor.selected;
            }
        }
    }

    fn record_shift_anchor(&mut self) {
        let anchor = self.roving.active_item().and_then(|id| {
            let selected = self.options.iter().find(|o| o.id() == id)?.selected();
            Some(ShiftAnchor {
                id: id.to_string(),
                selected,
            })
        });
        self.shift_anchor = anchor;
    }

    fn emit_changed(&self, before: Value<V>) -> Command<Message<V>> {
        let after = self.value();
        if after != before {
            Command::message(Message::Changed(after))
        } else {
            Command::none()
        }
    }

    /// Focus moved to `id` through navigation (arrows, typeahead). In
    /// single-select mode selection follows focus.
    fn on_focus_moved(&mut self, id: String) -> Command<Message<V>> {
        self.focused_option = Some(id.clone());
        self.pending_focus = Some(id.clone());
        if !self.multi_selectable {
            let before = self.value();
            self.select_exclusive(&id);
            return self.emit_changed(before);
        }
        Command::none()
    }

    fn on_key_down(&mut self, key: KeyEvent) -> Command<Message<V>> {
        // Any keystroke cancels the wildcard override from a previous `*`,
        // regardless of which branch handles it below.
        let mut pre = Command::none();
        if self.show_all {
            self.show_all = false;
            if self.reconcile_with_focus() {
                pre = Command::message(Message::Input(self.value()));
            }
        }
        if key
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER)
        {
            return pre;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // Literal a/A only; layout- and IME-composed input is an
            // intentional scope limitation. Any other Ctrl combo passes
            // through untouched.
            let cmd = if matches!(key.code, KeyCode::Char('a') | KeyCode::Char('A')) {
                self.select_all()
            } else {
                Command::none()
            };
            return Command::batch([pre, cmd]);
        }
        let cmd = match key.code {
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                if self.multi_selectable {
                    self.record_shift_anchor();
                }
                Command::none()
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                match self.roving.handle_key(&key).map(str::to_string) {
                    Some(id) => self.on_focus_moved(id),
                    None => Command::none(),
                }
            }
            KeyCode::Char('*') => {
                self.show_all = true;
                self.reconcile_with_focus();
                Command::none()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.commit_active(key.modifiers),
            KeyCode::Char(c) if c.is_alphanumeric() && key.modifiers.is_empty() => {
                self.typeahead(c)
            }
            _ => Command::none(),
        };
        Command::batch([pre, cmd])
    }

    fn on_key_up(&mut self, key: KeyEvent) -> Command<Message<V>> {
        let is_shift = matches!(
            key.code,
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
        );
        if !is_shift || !self.multi_selectable {
            return Command::none();
        }
        // Releasing Shift settles any keyboard-driven range (arrows moved the
        // active pointer while the anchor stood still) and clears the anchor.
        let Some(anchor) = self.shift_anchor.take() else {
            return Command::none();
        };
        let Some(active) = self.roving.active_item().map(str::to_string) else {
            return Command::none();
        };
        if anchor.id == active {
            return Command::none();
        }
        let before = self.value();
        self.apply_range(&anchor, &active, false);
        self.emit_changed(before)
    }

    fn on_click(&mut self, id: &str, mods: KeyModifiers) -> Command<Message<V>> {
        let Some(opt) = self.option(id) else {
            return Command::none();
        };
        if opt.disabled() {
            return Command::none();
        }
        let before = self.value();
        if self.multi_selectable {
            if mods.contains(KeyModifiers::SHIFT) {
                // No recorded anchor means no range to apply.
                if let Some(anchor) = self.shift_anchor.clone() {
                    self.apply_range(&anchor, id, mods.contains(KeyModifiers::CONTROL));
                }
            } else if let Some(opt) = self.option_mut(id) {
                opt.selected = !opt.selected;
            }
        } else {
            self.select_exclusive(id);
        }
        if self.roving.focus_on_item(id).is_some() {
            self.pending_focus = Some(id.to_string());
        }
        self.focused_option = Some(id.to_string());
        self.emit_changed(before)
    }

    fn on_option_focused(&mut self, id: &str) -> Command<Message<V>> {
        self.focused_option = Some(id.to_string());
        if !self.roving.update_active_item(id) {
            return Command::none();
        }
        if !self.multi_selectable {
            let before = self.value();
            self.select_exclusive(id);
            return self.emit_changed(before);
        }
        Command::none()
    }

    fn on_set_filter(&mut self, text: String) -> Command<Message<V>> {
        if text == self.filter {
            return Command::none();
        }
        self.filter = text;
        if self.reconcile_with_focus() {
            return Command::message(Message::Input(self.value()));
        }
        Command::none()
    }

    fn on_set_value(&mut self, values: Vec<V>) -> Command<Message<V>> {
        let before = self.value();
        if self.multi_selectable {
            for opt in &mut self.options {
                opt.selected = values.contains(opt.value());
            }
        } else {
            let first = values.first();
            for opt in &mut self.options {
                opt.selected = first == Some(opt.value());
            }
            // Keep the single-select invariant: the selection is the active
            // descendant.
            let selected = self
                .options
                .iter()
                .find(|o| o.selected())
                .map(|o| o.id().to_string());
            if let Some(id) = selected {
                self.roving.update_active_item(&id);
            }
        }
        let after = self.value();
        if after != before {
            Command::message(Message::Input(after))
        } else {
            Command::none()
        }
    }

    /// Ctrl+A: a whole-list range with the toggle rule — select every option
    /// unless all are already selected, in which case deselect every option.
    fn select_all(&mut self) -> Command<Message<V>> {
        if !self.multi_selectable || self.options.is_empty() {
            return Command::none();
        }
        let before = self.value();
        let all_selected = self.options.iter().all(|o| o.selected());
        for opt in &mut self.options {
            opt.selected = !all_selected;
        }
        self.emit_changed(before)
    }

    /// Enter/Space on the active option: range against the anchor when Shift
    /// is held in multi-select, plain toggle otherwise; in single-select,
    /// commit the active descendant as the sole selection.
    fn commit_active(&mut self, mods: KeyModifiers) -> Command<Message<V>> {
        let Some(id) = self.roving.active_item().map(str::to_string) else {
            return Command::none();
        };
        let before = self.value();
        if self.multi_selectable {
            if mods.contains(KeyModifiers::SHIFT) {
                if let Some(anchor) = self.shift_anchor.clone() {
                    self.apply_range(&anchor, &id, false);
                }
            } else if let Some(opt) = self.option_mut(&id) {
                opt.selected = !opt.selected;
            }
        } else {
            self.select_exclusive(&id);
        }
        self.emit_changed(before)
    }

    /// Advance focus to the next visible, non-disabled option whose text
    /// starts with the typed character, searching circularly from just after
    /// the active item.
    fn typeahead(&mut self, c: char) -> Command<Message<V>> {
        let needle: String = if self.case_sensitive {
            c.to_string()
        } else {
            c.to_lowercase().collect()
        };
        let order = self.visible_indices();
        if order.is_empty() {
            return Command::none();
        }
        let active_pos = self
            .roving
            .active_item()
            .and_then(|id| order.iter().position(|&i| self.options[i].id() == id));
        let start = active_pos.map_or(0, |p| p + 1);
        for k in 0..order.len() {
            let i = order[(start + k) % order.len()];
            let opt = &self.options[i];
            if opt.disabled() {
                continue;
            }
            let matched = if self.case_sensitive {
                opt.text().starts_with(&needle)
            } else {
                opt.text().to_lowercase().starts_with(&needle)
            };
            if matched {
                let id = opt.id().to_string();
                self.roving.focus_on_item(&id);
                return self.on_focus_moved(id);
            }
        }
        Command::none()
    }
}

impl<V: Clone + PartialEq + Send + 'static> Default for Listbox<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + PartialEq + Send + 'static> Component for Listbox<V> {
    type Message = Message<V>;

    fn update(&mut self, msg: Message<V>) -> Command<Message<V>> {
        // A disabled listbox silently ignores every mutation.
        if self.disabled {
            return Command::none();
        }
        match msg {
            Message::KeyDown(key) => self.on_key_down(key),
            Message::KeyUp(key) => self.on_key_up(key),
            Message::Click(id, mods) => self.on_click(&id, mods),
            Message::OptionFocused(id) => self.on_option_focused(&id),
            Message::SetFilter(text) => self.on_set_filter(text),
            Message::SetValue(values) => self.on_set_value(values),
            Message::Input(_) | Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut y = inner.y;
        let show_filter = !self.filter.is_empty() && !self.disable_filter;
        if show_filter && inner.height > 1 {
            let line = Line::from(vec![
                Span::styled("/ ", Style::default().fg(Color::Yellow)),
                Span::raw(self.filter.clone()),
            ]);
            frame.render_widget(Paragraph::new(line), Rect { height: 1, y, ..inner });
            y += 1;
        }

        let rows = (inner.y + inner.height).saturating_sub(y) as usize;
        let visible = self.visible_indices();
        for (row, &i) in visible.iter().take(rows).enumerate() {
            let opt = &self.options[i];
            let marker = if self.roving.is_active(opt.id()) {
                self.style.highlight_symbol.as_str()
            } else {
                "  "
            };
            let check = if self.multi_selectable {
                if opt.selected() {
                    "[x] "
                } else {
                    "[ ] "
                }
            } else {
                ""
            };
            let style = if opt.disabled() {
                self.style.disabled
            } else if opt.selected() {
                self.style.selected
            } else {
                self.style.normal
            };
            let prefix = format!("{marker}{check}");
            let budget = (inner.width as usize).saturating_sub(prefix.width());
            let text = truncate_to_width(opt.text(), budget);
            let line = Line::from(vec![Span::raw(prefix), Span::styled(text, style)]);
            frame.render_widget(
                Paragraph::new(line),
                Rect {
                    y: y + row as u16,
                    height: 1,
                    ..inner
                },
            );
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Truncate to `max_width` display columns, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
