//! Accessibility-state projection for the listbox widgets.
//!
//! Pure translation of listbox and option state into the attribute set an
//! accessibility tree consumes. No business logic lives here; the
//! [`Listbox`](crate::listbox::Listbox) coordinator is the only writer, and
//! hosts read the snapshot to mirror widget state for assistive technology.

use crate::option::ListOption;
use crate::roving::Orientation;

/// Attributes published for the listbox container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxState {
    /// Id of the option considered focused for accessibility purposes,
    /// independent of which element literally holds input focus.
    pub active_descendant: Option<String>,
    /// Whether more than one option may be selected.
    pub multi_selectable: bool,
    /// Navigation axis, omitted when unset.
    pub orientation: Option<&'static str>,
    /// Whether the whole listbox ignores interaction.
    pub disabled: bool,
}

impl ListboxState {
    /// The ARIA role of the container.
    pub const ROLE: &'static str = "listbox";

    /// Render as `(attribute, value)` pairs for a host attribute layer.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("role", Self::ROLE.to_string())];
        if let Some(id) = &self.active_descendant {
            attrs.push(("aria-activedescendant", id.clone()));
        }
        attrs.push(("aria-multiselectable", self.multi_selectable.to_string()));
        if let Some(orientation) = self.orientation {
            attrs.push(("aria-orientation", orientation.to_string()));
        }
        if self.disabled {
            attrs.push(("aria-disabled", "true".to_string()));
        }
        attrs
    }
}

/// Attributes published for a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionState {
    /// The option's stable id.
    pub id: String,
    pub selected: bool,
    pub disabled: bool,
    /// 1-based position among all options, including filtered-out ones.
    pub pos_in_set: usize,
    /// Count of all options in the full list.
    pub set_size: usize,
    /// Whether the active filter hides this option.
    pub hidden: bool,
    /// Roving tabindex: `0` for the active item, `-1` for everything else.
    pub tab_index: i8,
}

impl OptionState {
    /// The ARIA role of an option.
    pub const ROLE: &'static str = "option";

    /// Render as `(attribute, value)` pairs for a host attribute layer.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", Self::ROLE.to_string()),
            ("aria-selected", self.selected.to_string()),
            ("aria-posinset", self.pos_in_set.to_string()),
            ("aria-setsize", self.set_size.to_string()),
            ("tabindex", self.tab_index.to_string()),
        ];
        if self.disabled {
            attrs.push(("aria-disabled", "true".to_string()));
        }
        if self.hidden {
            attrs.push(("hidden", "true".to_string()));
        }
        attrs
    }
}

/// A full projection of listbox state into accessibility attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub listbox: ListboxState,
    /// One entry per option in the full list, in list order.
    pub options: Vec<OptionState>,
}

/// Project the given listbox state into an accessibility [`Snapshot`].
///
/// `active` is the id of the roving tracker's active item. Position-in-set is
/// translated from the 0-based internal annotation to the 1-based value
/// assistive technology expects.
pub fn snapshot<V>(
    options: &[ListOption<V>],
    active: Option<&str>,
    multi_selectable: bool,
    orientation: Orientation,
    disabled: bool,
) -> Snapshot {
    Snapshot {
        listbox: ListboxState {
            active_descendant: active.map(str::to_string),
            multi_selectable,
            orientation: orientation.as_aria(),
            disabled,
        },
        options: options
            .iter()
            .map(|opt| OptionState {
                id: opt.id().to_string(),
                selected: opt.selected(),
                disabled: opt.disabled(),
                pos_in_set: opt.pos_in_set() + 1,
                set_size: opt.set_size(),
                hidden: opt.hidden(),
                tab_index: if active == Some(opt.id()) { 0 } else { -1 },
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listbox::{Listbox, Message};
    use crate::option::ListOption;
    use opal_core::Component;

    fn options(texts: &[&str]) -> Vec<ListOption<String>> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| ListOption::new(format!("opt-{i}"), *t, t.to_string()))
            .collect()
    }

    #[test]
    fn listbox_attributes_include_active_descendant() {
        let state = ListboxState {
            active_descendant: Some("opt-2".into()),
            multi_selectable: true,
            orientation: Some("vertical"),
            disabled: false,
        };
        let attrs = state.attributes();
        assert!(attrs.contains(&("role", "listbox".into())));
        assert!(attrs.contains(&("aria-activedescendant", "opt-2".into())));
        assert!(attrs.contains(&("aria-multiselectable", "true".into())));
        assert!(attrs.contains(&("aria-orientation", "vertical".into())));
        assert!(!attrs.iter().any(|(name, _)| *name == "aria-disabled"));
    }

    #[test]
    fn disabled_listbox_publishes_flag() {
        let state = ListboxState {
            active_descendant: None,
            multi_selectable: false,
            orientation: None,
            disabled: true,
        };
        let attrs = state.attributes();
        assert!(attrs.contains(&("aria-disabled", "true".into())));
        assert!(!attrs.iter().any(|(name, _)| *name == "aria-orientation"));
    }

    #[test]
    fn snapshot_translates_posinset_to_one_based() {
        let mut lb: Listbox<String> = Listbox::new();
        lb.set_options(options(&["Blue", "Green", "Red"]));
        let snap = lb.aria_snapshot();
        let positions: Vec<usize> = snap.options.iter().map(|o| o.pos_in_set).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert!(snap.options.iter().all(|o| o.set_size == 3));
    }

    #[test]
    fn snapshot_roves_tabindex_with_active_item() {
        let mut lb: Listbox<String> = Listbox::new();
        lb.set_options(options(&["Blue", "Green", "Red"]));
        lb.update(Message::OptionFocused("opt-1".into()));
        let snap = lb.aria_snapshot();
        assert_eq!(snap.listbox.active_descendant.as_deref(), Some("opt-1"));
        let tab_indices: Vec<i8> = snap.options.iter().map(|o| o.tab_index).collect();
        assert_eq!(tab_indices, vec![-1, 0, -1]);
    }

    #[test]
    fn option_attributes_reflect_selection_and_hiding() {
        let state = OptionState {
            id: "opt-0".into(),
            selected: true,
            disabled: true,
            pos_in_set: 1,
            set_size: 8,
            hidden: true,
            tab_index: -1,
        };
        let attrs = state.attributes();
        assert!(attrs.contains(&("aria-selected", "true".into())));
        assert!(attrs.contains(&("aria-posinset", "1".into())));
        assert!(attrs.contains(&("aria-setsize", "8".into())));
        assert!(attrs.contains(&("aria-disabled", "true".into())));
        assert!(attrs.contains(&("hidden", "true".into())));
        assert!(attrs.contains(&("tabindex", "-1".into())));
    }
}
