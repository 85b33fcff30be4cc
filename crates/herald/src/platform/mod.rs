//! Platform notification backends.
//!
//! The platform's notification call is the one external collaborator Herald
//! does not implement itself: a native entry point taking a provider handle,
//! a kind, a processing policy, and two strings, returning a status code.
//! [`NotificationBackend`] is the seam over that call, so the widget layer is
//! testable and the one version-dependent failure (the entry point not
//! existing at all) is an explicit [`RaiseError::MechanismAbsent`] instead of
//! something recognized by exception type.
//!
//! [`platform_backend`] selects the real backend for the current target:
//! UI Automation on Windows, a mechanism-absent stub everywhere else.

mod provider;

#[cfg(windows)]
mod uia;
#[cfg(not(windows))]
mod unsupported;

pub use provider::{ProviderHandle, ProviderResolver};

use std::sync::Arc;

use herald_core::{NotificationRequest, RaiseError};

/// A backend capable of raising platform notification events.
///
/// Implementations must not block: the call happens synchronously on the UI
/// thread in response to user input. Delivery is best effort; a returned
/// `Ok(())` means the platform accepted the event, not that any assistive
/// technology announced it.
pub trait NotificationBackend {
    /// Raise a notification event for the control behind `provider`.
    fn raise_notification(
        &self,
        provider: &ProviderHandle,
        request: NotificationRequest<'_>,
    ) -> Result<(), RaiseError>;
}

/// The notification backend for the current platform.
pub fn platform_backend() -> Arc<dyn NotificationBackend> {
    #[cfg(windows)]
    return Arc::new(uia::UiaNotificationBackend::new());

    #[cfg(not(windows))]
    Arc::new(unsupported::UnsupportedBackend)
}
