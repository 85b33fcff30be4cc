//! UI Automation notification backend for Windows.

use std::ffi::c_void;
use std::sync::OnceLock;

use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
use windows::Win32::UI::Accessibility::IRawElementProviderSimple;
use windows::core::{BSTR, HRESULT, Interface, s, w};

use herald_core::{NotificationKind, NotificationProcessing, NotificationRequest, RaiseError};

use super::{NotificationBackend, ProviderHandle};

// HRESULT UiaRaiseNotificationEvent(IRawElementProviderSimple*,
//     NotificationKind, NotificationProcessing, BSTR displayString,
//     BSTR activityId)
type RaiseNotificationEventFn =
    unsafe extern "system" fn(*mut c_void, i32, i32, *const u16, *const u16) -> HRESULT;

/// Backend that raises UIA notification events.
///
/// Provider handles must wrap the control's `IRawElementProviderSimple`.
pub(crate) struct UiaNotificationBackend;

impl UiaNotificationBackend {
    pub(crate) fn new() -> Self {
        Self
    }
}

/// Resolve `UiaRaiseNotificationEvent` from `UIAutomationCore.dll`.
///
/// The export first shipped in Windows 10 1709, so it is looked up
/// dynamically rather than linked: on older systems the missing export
/// surfaces as [`RaiseError::MechanismAbsent`] instead of a process that
/// fails to load. The lookup result is cached for the process lifetime.
fn notification_entry_point() -> Option<RaiseNotificationEventFn> {
    static ENTRY: OnceLock<Option<RaiseNotificationEventFn>> = OnceLock::new();

    *ENTRY.get_or_init(|| unsafe {
        let module = match LoadLibraryW(w!("UIAutomationCore.dll")) {
            Ok(module) => module,
            Err(err) => {
                tracing::debug!("failed to load UIAutomationCore.dll: {err}");
                return None;
            }
        };

        GetProcAddress(module, s!("UiaRaiseNotificationEvent")).map(|entry| {
            std::mem::transmute::<unsafe extern "system" fn() -> isize, RaiseNotificationEventFn>(
                entry,
            )
        })
    })
}

fn kind_value(kind: NotificationKind) -> i32 {
    match kind {
        NotificationKind::ItemAdded => 0,
        NotificationKind::ItemRemoved => 1,
        NotificationKind::ActionCompleted => 2,
        NotificationKind::ActionAborted => 3,
        NotificationKind::Other => 4,
    }
}

fn processing_value(processing: NotificationProcessing) -> i32 {
    match processing {
        NotificationProcessing::ImportantAll => 0,
        NotificationProcessing::ImportantMostRecent => 1,
        NotificationProcessing::All => 2,
        NotificationProcessing::MostRecent => 3,
        NotificationProcessing::CurrentThenMostRecent => 4,
    }
}

impl NotificationBackend for UiaNotificationBackend {
    fn raise_notification(
        &self,
        provider: &ProviderHandle,
        request: NotificationRequest<'_>,
    ) -> Result<(), RaiseError> {
        let Some(entry) = notification_entry_point() else {
            return Err(RaiseError::MechanismAbsent);
        };

        let provider = provider
            .downcast_ref::<IRawElementProviderSimple>()
            .ok_or(RaiseError::InvalidProvider)?;

        let text = BSTR::from(request.text);
        let activity_id = BSTR::from(request.activity_id);

        let hr = unsafe {
            entry(
                provider.as_raw(),
                kind_value(request.kind),
                processing_value(request.processing),
                text.as_ptr(),
                activity_id.as_ptr(),
            )
        };

        if hr.is_ok() {
            Ok(())
        } else {
            Err(RaiseError::CallFailed { code: hr.0 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_values_match_uia() {
        assert_eq!(kind_value(NotificationKind::ActionCompleted), 2);
        assert_eq!(processing_value(NotificationProcessing::All), 2);
        assert_eq!(
            processing_value(NotificationProcessing::CurrentThenMostRecent),
            4
        );
    }
}
