//! **opal** -- accessible selection widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! opal = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`opal_core`] are available at the crate root
//!   ([`Component`], [`Command`]).
//! * The [`widgets`] module re-exports everything from [`opal_widgets`]
//!   (the listbox coordinator, the select picker, the roving-focus tracker,
//!   and the accessibility projection).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use opal::widgets::listbox::{Listbox, Message};
//! use opal::widgets::option::ListOption;
//! use opal::Component;
//!
//! let mut listbox = Listbox::new().with_multi_selectable(true);
//! listbox.set_options(vec![
//!     ListOption::new("o1", "Blue", "blue"),
//!     ListOption::new("o2", "Green", "green"),
//! ]);
//!
//! // Forward input events from your host loop:
//! // let cmd = listbox.update(Message::KeyDown(key_event));
//! ```

pub use opal_core::*;
pub mod widgets {
    pub use opal_widgets::*;
}

// Re-export dependencies for use in downstream crates
pub use crossterm;
pub use ratatui;
