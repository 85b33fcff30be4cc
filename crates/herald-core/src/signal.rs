//! Signal/slot system for Herald.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism for
//! communication between widgets and their observers. Signals are emitted by
//! widgets when their state changes, and connected slots (callbacks) are
//! invoked in response.
//!
//! All of Herald runs on the application's UI thread, so every connection is
//! direct: emitting a signal invokes the connected slots synchronously before
//! `emit` returns. There is no queued or cross-thread dispatch.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Example
//!
//! ```
//! use herald_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
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

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args)>;

/// A signal that notifies connected slots when emitted.
///
/// Slots receive the emitted arguments by reference and are invoked in the
/// emitting call frame. Connecting or disconnecting a slot while an emission
/// is in progress takes effect on the next emission; the slot set is
/// snapshotted before invocation.
pub struct Signal<Args: 'static> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// The slot is invoked every time the signal is emitted, until it is
    /// disconnected. Returns a [`ConnectionId`] for later disconnection.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns `true` if the connection existed and was removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    /// Number of currently connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Emit the signal, invoking every connected slot with `args`.
    pub fn emit(&self, args: Args) {
        // Snapshot the slots so a slot may connect/disconnect re-entrantly
        // without holding the lock across user code.
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Rc::new(Cell::new(0));

        let received_clone = received.clone();
        signal.connect(move |value| {
            received_clone.set(*value);
        });

        signal.emit(42);
        assert_eq!(received.get(), 42);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        let id = signal.connect(move |()| {
            count_clone.set(count_clone.get() + 1);
        });

        signal.emit(());
        assert_eq!(count.get(), 1);

        assert!(signal.disconnect(id));
        signal.emit(());
        assert_eq!(count.get(), 1);

        // Disconnecting twice is a no-op.
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<String>::new();
        let log = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let log = log.clone();
            signal.connect(move |_| log.set(log.get() + 1));
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit("hello".to_string());
        assert_eq!(log.get(), 3);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
        signal.emit("again".to_string());
        assert_eq!(log.get(), 3);
    }

    #[test]
    fn test_reentrant_disconnect_takes_effect_next_emission() {
        let signal = Rc::new(Signal::<()>::new());
        let count = Rc::new(Cell::new(0));

        let signal_clone = signal.clone();
        let count_clone = count.clone();
        signal.connect(move |()| {
            count_clone.set(count_clone.get() + 1);
            signal_clone.disconnect_all();
        });

        signal.emit(());
        assert_eq!(count.get(), 1);

        signal.emit(());
        assert_eq!(count.get(), 1);
    }
}
