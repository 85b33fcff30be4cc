//! Herald - accessibility notification widgets.
//!
//! Herald shows how a text control raises a platform accessibility
//! "Notification" event so screen readers announce a status change. It
//! provides:
//!
//! - [`widget::widgets::NotificationTextBlock`]: a text control whose
//!   automation peer forwards announcement requests to the platform
//! - [`widget::accessibility`]: the [AccessKit](https://accesskit.dev/)-based
//!   accessibility layer and the automation peer/binding
//! - [`platform`]: the notification backend seam (UI Automation on Windows)
//! - [`window::StatusWindow`]: the demo controller tying it together
//!
//! # Example
//!
//! ```
//! use herald::widget::accessibility::AutomationBinding;
//! use herald::window::StatusWindow;
//!
//! let mut window = StatusWindow::new(AutomationBinding::platform());
//! // The hosting framework supplies the provider resolver on realization.
//! window.attach_automation(Box::new(|| None));
//!
//! window.notify_button_clicked();
//! assert_eq!(window.status_block().text(), herald::window::STATUS_TEXT);
//! ```

pub use herald_core::*;

pub mod platform;
pub mod prelude;
pub mod widget;
pub mod window;
