//! Shared notification availability state.
//!
//! Some platform versions predate the notification event mechanism entirely.
//! The first call that discovers this marks the mechanism unavailable, and
//! every control sharing the state skips the platform call from then on. The
//! transition is one-directional: nothing re-enables notifications for the
//! remainder of the process.
//!
//! The state is an explicit, injected object rather than a hidden global so
//! tests (and embedders hosting multiple isolated UI roots) each get their
//! own latch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the platform notification event mechanism is believed to exist.
///
/// Starts available. Clones share the underlying flag, so a single
/// [`mark_unavailable`](NotificationAvailability::mark_unavailable) is
/// observed by every control holding a clone.
#[derive(Clone, Debug)]
pub struct NotificationAvailability {
    available: Arc<AtomicBool>,
}

impl NotificationAvailability {
    /// Create a new availability state, initially available.
    pub fn new() -> Self {
        Self {
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether raising notification events is still worth attempting.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Record that the platform notification mechanism does not exist.
    ///
    /// Idempotent; logs a warning on the first transition only. There is no
    /// way to undo this.
    pub fn mark_unavailable(&self) {
        if self.available.swap(false, Ordering::AcqRel) {
            tracing::warn!(
                "platform notification events are unavailable; screen-reader announcements disabled for this process"
            );
        }
    }
}

impl Default for NotificationAvailability {
    fn default() -> Self {
        Self::new()
    }
}
