//! Core contract for **opal** widgets.
//!
//! This crate defines the seam between a host application and the widgets in
//! `opal-widgets`: the [`Component`] trait (update/view/focused) and the
//! [`Command`] type widgets use to notify their host of user-visible changes.
//!
//! There is no runtime here. Widgets are synchronous state machines: the host
//! forwards input events in, commands come back out, and the host's own event
//! loop (or test harness) drives the cycle.

mod command;
mod component;

pub use command::Command;
pub use component::Component;
