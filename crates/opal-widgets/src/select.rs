//! A single-select picker that opens a listbox beneath a trigger line.
//!
//! [`Select`] is a host for the [`Listbox`] coordinator: it owns opening and
//! closing, routes key events into the listbox while open, and re-broadcasts
//! a committed choice as [`Message::Selected`].

use crossterm::event::{KeyCode, KeyEvent};
use opal_core::{Command, Component};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::listbox::{self, Listbox};
use crate::option::{ListOption, Value};

/// Messages for the select widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press forwarded from the host while the select has focus.
    KeyPress(KeyEvent),
    /// Open the picker programmatically.
    Open,
    /// Close the picker programmatically.
    Close,
    /// Outbound: the user committed a choice and the picker closed.
    Selected(String),
}

/// A dropdown-style single-select built on [`Listbox`].
pub struct Select {
    listbox: Listbox<String>,
    open: bool,
    focus: bool,
    placeholder: String,
    max_visible: usize,
    block: Option<Block<'static>>,
}

impl Select {
    /// Create a select over the given choices. Each choice's text doubles as
    /// its value.
    pub fn new(choices: Vec<String>) -> Self {
        let options = choices
            .iter()
            .enumerate()
            .map(|(i, text)| ListOption::new(format!("opt-{i}"), text.clone(), text.clone()))
            .collect();
        Self {
            listbox: Listbox::with_options(options),
            open: false,
            focus: false,
            placeholder: "Select an option".to_string(),
            max_visible: 8,
            block: None,
        }
    }

    /// Text shown on the trigger before anything is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Cap how many options the open picker shows at once.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self
    }

    /// Set an optional block around the trigger line.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Give the select keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus and close the picker if open.
    pub fn blur(&mut self) {
        self.focus = false;
        self.close_picker();
    }

    /// Whether the picker is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The committed value, if any.
    pub fn selected_value(&self) -> Option<String> {
        match self.listbox.value() {
            Value::One(v) => Some(v),
            _ => None,
        }
    }

    /// The inner listbox, for configuration (filter mode, orientation).
    pub fn listbox_mut(&mut self) -> &mut Listbox<String> {
        &mut self.listbox
    }

    fn open_picker(&mut self) {
        self.open = true;
        self.listbox.focus();
    }

    fn close_picker(&mut self) {
        self.open = false;
        self.listbox.blur();
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open_picker();
                    Command::none()
                }
                _ => Command::none(),
            };
        }
        match key.code {
            KeyCode::Esc => {
                self.close_picker();
                Command::none()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Commit the active option, then close and re-broadcast.
                let _ = self.listbox.update(listbox::Message::KeyDown(key));
                self.close_picker();
                match self.selected_value() {
                    Some(value) => Command::message(Message::Selected(value)),
                    None => Command::none(),
                }
            }
            _ => {
                // Navigation and typeahead stay internal; the listbox's own
                // change notifications are not re-broadcast until commit.
                let _ = self.listbox.update(listbox::Message::KeyDown(key));
                Command::none()
            }
        }
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.on_key(key),
            Message::Open => {
                self.open_picker();
                Command::none()
            }
            Message::Close => {
                self.close_picker();
                Command::none()
            }
            _ => Command::none(),
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

        let label = match self.selected_value() {
            Some(value) => Span::raw(value),
            None => Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        let arrow = if self.open { " ▴" } else { " ▾" };
        let trigger = Line::from(vec![
            label,
            Span::styled(arrow.to_string(), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(trigger), Rect { height: 1, ..inner });

        if self.open {
            let rows = self
                .listbox
                .visible_options()
                .len()
                .min(self.max_visible) as u16;
            let list_area = Rect::new(area.x, area.y.saturating_add(area.height), area.width, rows);
            frame.render_widget(Clear, list_area);
            self.listbox.view(frame, list_area);
        }
    }

    fn focused(&self) -> bool {
        self.focus
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

    fn select() -> Select {
        let mut s = Select::new(vec!["Blue".into(), "Green".into(), "Red".into()]);
        s.focus();
        s
    }

    #[test]
    fn enter_opens_the_picker() {
        let mut s = select();
        assert!(!s.is_open());
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(s.is_open());
    }

    #[test]
    fn esc_closes_without_committing() {
        let mut s = select();
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        let cmd = s.update(Message::KeyPress(key(KeyCode::Esc)));
        assert!(cmd.is_none());
        assert!(!s.is_open());
    }

    #[test]
    fn arrows_navigate_then_enter_commits() {
        let mut s = select();
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        s.update(Message::KeyPress(key(KeyCode::Down)));
        let cmd = s.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(!s.is_open());
        match cmd.into_message() {
            Some(Message::Selected(v)) => assert_eq!(v, "Green"),
            other => panic!("expected Selected, got {other:?}"),
        }
        assert_eq!(s.selected_value().as_deref(), Some("Green"));
    }

    #[test]
    fn typeahead_reaches_an_option() {
        let mut s = select();
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        s.update(Message::KeyPress(key(KeyCode::Char('r'))));
        let cmd = s.update(Message::KeyPress(key(KeyCode::Enter)));
        match cmd.into_message() {
            Some(Message::Selected(v)) => assert_eq!(v, "Red"),
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[test]
    fn unfocused_select_ignores_keys() {
        let mut s = Select::new(vec!["Blue".into()]);
        let cmd = s.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
        assert!(!s.is_open());
    }

    #[test]
    fn blur_closes_the_picker() {
        let mut s = select();
        s.update(Message::Open);
        assert!(s.is_open());
        s.blur();
        assert!(!s.is_open());
        assert!(!s.focused());
    }

    #[test]
    fn selection_survives_reopen() {
        let mut s = select();
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        s.update(Message::KeyPress(key(KeyCode::Down)));
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        s.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(s.is_open());
        assert_eq!(s.selected_value().as_deref(), Some("Green"));
    }
}
