//! Convenient re-exports for typical Herald usage.

pub use herald_core::{
    NotificationAvailability, NotificationKind, NotificationProcessing, NotificationRequest,
    RaiseError, Signal,
};

pub use crate::platform::{
    NotificationBackend, ProviderHandle, ProviderResolver, platform_backend,
};
pub use crate::widget::accessibility::{Accessible, AccessibleRole, AutomationBinding, TextBlockPeer};
pub use crate::widget::widgets::{NotificationTextBlock, PushButton};
pub use crate::widget::{FocusManager, FocusPolicy, FocusReason, WidgetBase, WidgetId};
pub use crate::window::{STATUS_ACTIVITY_ID, STATUS_TEXT, StatusWindow};
