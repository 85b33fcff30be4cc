//! Widgets and widget infrastructure.

pub mod accessibility;
mod base;
mod focus;
pub mod widgets;

pub use base::{FocusPolicy, WidgetBase, WidgetId};
pub use focus::{FocusManager, FocusReason};
