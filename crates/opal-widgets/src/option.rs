//! The option data model shared by the selection widgets.
//!
//! A [`ListOption`] is created and destroyed by the host; the
//! [`Listbox`](crate::listbox::Listbox) only annotates it (selection,
//! position-in-set, hidden-by-filter) and reads its text, value, and disabled
//! state.

/// One selectable entry in a listbox.
///
/// The type parameter `V` is the arbitrary value the host associates with the
/// option. It never influences filtering or navigation; only selection and
/// value derivation compare it.
#[derive(Debug, Clone)]
pub struct ListOption<V> {
    id: String,
    text: String,
    value: V,
    pub(crate) selected: bool,
    disabled: bool,
    pub(crate) pos_in_set: usize,
    pub(crate) set_size: usize,
    pub(crate) hidden: bool,
}

impl<V> ListOption<V> {
    /// Create an option with a stable identifier, display text, and value.
    pub fn new(id: impl Into<String>, text: impl Into<String>, value: V) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            value,
            selected: false,
            disabled: false,
            pos_in_set: 0,
            set_size: 0,
            hidden: false,
        }
    }

    /// Mark the option as initially selected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark the option as disabled. Disabled options are skipped by typeahead
    /// and ignore clicks.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The stable identifier supplied by the host.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display text used for filtering and typeahead matching.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The associated host value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Whether this option is currently selected.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Whether this option is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// 0-based position among *all* options, including filtered-out ones.
    /// The accessibility projection exposes this 1-based.
    pub fn pos_in_set(&self) -> usize {
        self.pos_in_set
    }

    /// Count of all options in the full list.
    pub fn set_size(&self) -> usize {
        self.set_size
    }

    /// Whether the active filter currently hides this option. Hiding is
    /// visual only; a hidden option keeps its selection.
    pub fn hidden(&self) -> bool {
        self.hidden
    }
}

/// The derived value of a listbox. Never stored; recomputed on every access.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<V> {
    /// No option is selected (single-select mode only).
    #[default]
    None,
    /// The first selected option's value (single-select mode).
    One(V),
    /// Every selected option's value, in list order (multi-select mode).
    Many(Vec<V>),
}

impl<V> Value<V> {
    /// Returns `true` when no option contributes a value.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::None => true,
            Value::One(_) => false,
            Value::Many(values) => values.is_empty(),
        }
    }
}
