//! Accessible selection widgets for the **opal** library.
//!
//! Every widget in this crate implements [`opal_core::Component`], so it can
//! be embedded in any message-driven host and composed freely within
//! [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`listbox`] | Filterable single/multi-select listbox with typeahead |
//! | [`select`] | Dropdown-style single-choice picker built on the listbox |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`option`] | The [`ListOption`](option::ListOption) data model and derived [`Value`](option::Value) |
//! | [`roving`] | [`RovingFocus`](roving::RovingFocus) tracker for the roving-tabindex pattern |
//! | [`a11y`] | Projection of widget state into accessibility attributes |

pub mod a11y;
pub mod listbox;
pub mod option;
pub mod roving;
pub mod select;
