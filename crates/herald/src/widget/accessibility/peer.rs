//! The automation peer that raises notification events.

use std::sync::Arc;

use herald_core::{
    NotificationAvailability, NotificationKind, NotificationProcessing, NotificationRequest,
    RaiseError,
};

use crate::platform::{NotificationBackend, ProviderHandle, ProviderResolver, platform_backend};

/// The hosting framework's automation bridge.
///
/// Bundles the notification backend with the shared availability latch.
/// One binding serves a whole window (or application); cloning is cheap and
/// every peer created from the same binding shares the latch, so a single
/// mechanism-absent discovery disables notifications for all of them.
#[derive(Clone)]
pub struct AutomationBinding {
    backend: Arc<dyn NotificationBackend>,
    availability: NotificationAvailability,
}

impl AutomationBinding {
    /// Create a binding over an explicit backend and availability state.
    pub fn new(backend: Arc<dyn NotificationBackend>, availability: NotificationAvailability) -> Self {
        Self {
            backend,
            availability,
        }
    }

    /// Create a binding over the current platform's backend with fresh
    /// availability state.
    pub fn platform() -> Self {
        Self::new(platform_backend(), NotificationAvailability::new())
    }

    /// The shared availability latch.
    pub fn availability(&self) -> &NotificationAvailability {
        &self.availability
    }

    /// Create a peer for one control, with the control's provider resolver.
    pub fn create_peer(&self, resolver: Box<dyn ProviderResolver>) -> TextBlockPeer {
        TextBlockPeer {
            backend: self.backend.clone(),
            availability: self.availability.clone(),
            resolver,
            provider: None,
        }
    }
}

/// Per-control automation peer for a notification-capable text control.
///
/// The peer owns the control's provider handle, resolved lazily on the first
/// notification attempt and cached for the control's lifetime. A failed
/// resolution is not remembered: the next attempt resolves again.
pub struct TextBlockPeer {
    backend: Arc<dyn NotificationBackend>,
    availability: NotificationAvailability,
    resolver: Box<dyn ProviderResolver>,
    provider: Option<ProviderHandle>,
}

impl TextBlockPeer {
    /// Raise a notification event announcing `text` under `activity_id`.
    ///
    /// Best effort and fire-and-forget:
    ///
    /// - If the mechanism is already known to be absent, does nothing.
    /// - If the control's provider cannot be resolved yet, skips this call;
    ///   the next call retries resolution.
    /// - If the platform reports the entry point missing, trips the shared
    ///   availability latch so no peer in this binding tries again.
    /// - Any other platform failure is traced and swallowed.
    pub fn raise_notification_event(&mut self, text: &str, activity_id: &str) {
        if !self.availability.is_available() {
            return;
        }

        if self.provider.is_none() {
            self.provider = self.resolver.resolve_provider();
        }
        let Some(provider) = self.provider.as_ref() else {
            tracing::debug!("control has no automation provider yet; notification skipped");
            return;
        };

        let request = NotificationRequest {
            kind: NotificationKind::ActionCompleted,
            processing: NotificationProcessing::All,
            text,
            activity_id,
        };

        tracing::debug!(text, activity_id, "raising notification event");
        match self.backend.raise_notification(provider, request) {
            Ok(()) => {}
            Err(RaiseError::MechanismAbsent) => self.availability.mark_unavailable(),
            Err(err) => tracing::debug!("notification event not delivered: {err}"),
        }
    }

    /// Whether the provider handle has been resolved and cached.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }
}
