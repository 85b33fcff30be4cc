//! Error types for platform notification calls.

use thiserror::Error;

/// The result of asking the platform to raise a notification event.
///
/// Only [`RaiseError::MechanismAbsent`] carries policy weight: it means the
/// platform does not implement the notification event at all (a version
/// limitation, not a per-call failure), and callers respond by disabling
/// further attempts process-wide. Every other variant describes a single
/// failed call and is absorbed silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaiseError {
    /// The notification event entry point does not exist on this platform.
    #[error("the notification event entry point does not exist on this platform")]
    MechanismAbsent,

    /// The provider handle was not produced by the active backend.
    #[error("automation provider handle does not belong to the active backend")]
    InvalidProvider,

    /// The platform call itself failed.
    #[error("platform notification call failed with status {code:#010x}")]
    CallFailed {
        /// The raw platform status code.
        code: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_failed_displays_status_code() {
        let err = RaiseError::CallFailed { code: -2147024809 };
        assert_eq!(
            err.to_string(),
            "platform notification call failed with status 0x80070057"
        );
    }
}
