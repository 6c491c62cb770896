use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// An embeddable widget that renders into a given [`Rect`] area.
///
/// A host model owns its components, forwards input events to them as
/// messages, and re-broadcasts the [`Command`]s they return. The host decides
/// *where* each component renders by passing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the host message and use
/// [`Command::map`] to translate notifications:
///
/// ```rust,ignore
/// use opal_core::{Command, Component};
///
/// struct App { picker: opal_widgets::select::Select }
///
/// enum AppMsg { Picker(opal_widgets::select::Message) }
///
/// impl App {
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Picker(m) => self.picker.update(m).map(AppMsg::Picker),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Hosts typically wrap this in one of their own message variants so that
    /// events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying any
    /// notifications for the host.
    ///
    /// All state transitions run synchronously inside this call: state
    /// mutation, derived-state recomputation, then notification dispatch, in
    /// that order.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has input focus.
    ///
    /// This is a hint for input routing. A host can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
