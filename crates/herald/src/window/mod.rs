//! Window controllers.

mod status_window;

pub use status_window::{STATUS_ACTIVITY_ID, STATUS_TEXT, StatusWindow};
