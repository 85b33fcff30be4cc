//! Core primitives for Herald.
//!
//! This crate provides the GUI-independent foundations of the Herald
//! accessibility notification widgets:
//!
//! - **Signal/Slot System**: Type-safe, UI-thread communication between
//!   widgets and their observers
//! - **Notification Model**: The kind/processing classification and request
//!   payload for platform notification events
//! - **Availability State**: The shared, one-way "this platform cannot raise
//!   notification events" latch
//! - **Error Taxonomy**: The typed result of a platform notification call
//!
//! # Signal/Slot Example
//!
//! ```
//! use herald_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

pub mod availability;
mod error;
pub mod notification;
pub mod signal;

pub use availability::NotificationAvailability;
pub use error::RaiseError;
pub use notification::{NotificationKind, NotificationProcessing, NotificationRequest};
pub use signal::{ConnectionId, Signal};
