//! Fallback backend for platforms without a notification event entry point.

use herald_core::{NotificationRequest, RaiseError};

use super::{NotificationBackend, ProviderHandle};

/// Backend for platforms where no notification event mechanism exists.
///
/// Reporting [`RaiseError::MechanismAbsent`] makes the availability latch
/// trip on the first attempt, exactly as it does on Windows versions that
/// predate the event.
pub(crate) struct UnsupportedBackend;

impl NotificationBackend for UnsupportedBackend {
    fn raise_notification(
        &self,
        _provider: &ProviderHandle,
        _request: NotificationRequest<'_>,
    ) -> Result<(), RaiseError> {
        Err(RaiseError::MechanismAbsent)
    }
}
