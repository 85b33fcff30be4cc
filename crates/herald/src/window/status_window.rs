//! The demo status window controller.
//!
//! Owns two buttons, a status text block, and the focus manager, and wires
//! the "raise notification" click to the announcement flow. The hosting
//! framework routes the actual input events; the controller only defines
//! what a click means.

use crate::platform::ProviderResolver;
use crate::widget::accessibility::AutomationBinding;
use crate::widget::widgets::{NotificationTextBlock, PushButton};
use crate::widget::{FocusManager, FocusReason};

/// Status text shown and announced when the raise button is pressed.
pub const STATUS_TEXT: &str = "All systems operating as required.";

/// Activity id attached to status announcements.
pub const STATUS_ACTIVITY_ID: &str = "Status update";

/// A window with a "raise notification" button, a sibling button to move
/// focus to, and a status text block that announces its text.
pub struct StatusWindow {
    binding: AutomationBinding,
    raise_button: PushButton,
    next_button: PushButton,
    status_block: NotificationTextBlock,
    focus: FocusManager,
}

impl StatusWindow {
    /// Create the window's controls over the given automation binding.
    pub fn new(binding: AutomationBinding) -> Self {
        Self {
            binding,
            raise_button: PushButton::new("Raise notification event"),
            next_button: PushButton::new("Next"),
            status_block: NotificationTextBlock::new(""),
            focus: FocusManager::new(),
        }
    }

    /// Realize the status block's automation peer with a provider resolver
    /// from the hosting framework.
    pub fn attach_automation(&mut self, resolver: Box<dyn ProviderResolver>) {
        self.status_block
            .create_automation_peer(&self.binding, resolver);
    }

    /// The button that triggers the announcement.
    pub fn raise_button(&self) -> &PushButton {
        &self.raise_button
    }

    /// The sibling button that receives focus on click.
    pub fn next_button(&self) -> &PushButton {
        &self.next_button
    }

    /// The status text block.
    pub fn status_block(&self) -> &NotificationTextBlock {
        &self.status_block
    }

    /// The window's focus manager.
    pub fn focus(&self) -> &FocusManager {
        &self.focus
    }

    /// Click handler for the raise button.
    ///
    /// Order matters: some screen readers interrupt an in-progress
    /// announcement when focus changes, so focus moves to the sibling
    /// button before the notification is raised. Fire-and-forget; there is
    /// no error path at this layer.
    pub fn notify_button_clicked(&mut self) {
        self.focus.set_focus(self.next_button.id(), FocusReason::Other);

        self.raise_button.set_enabled(false);

        self.status_block.set_text(STATUS_TEXT);

        // Announce the same text the label now shows. A live-region change
        // would usually cover this; the notification event is for cases
        // where it doesn't.
        let text = self.status_block.text().to_owned();
        self.status_block
            .raise_notification_event(&text, STATUS_ACTIVITY_ID);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use herald_core::{NotificationAvailability, NotificationRequest, RaiseError};

    use super::*;
    use crate::platform::{NotificationBackend, ProviderHandle};

    struct AcceptingBackend;

    impl NotificationBackend for AcceptingBackend {
        fn raise_notification(
            &self,
            _provider: &ProviderHandle,
            _request: NotificationRequest<'_>,
        ) -> Result<(), RaiseError> {
            Ok(())
        }
    }

    fn test_window() -> StatusWindow {
        let binding =
            AutomationBinding::new(Arc::new(AcceptingBackend), NotificationAvailability::new());
        StatusWindow::new(binding)
    }

    #[test]
    fn test_click_updates_label_focus_and_button_state() {
        let mut window = test_window();
        window.attach_automation(Box::new(|| Some(ProviderHandle::new(()))));

        window.notify_button_clicked();

        assert_eq!(window.status_block().text(), STATUS_TEXT);
        assert!(!window.raise_button().is_enabled());
        assert!(window.focus().has_focus(window.next_button().id()));
    }

    #[test]
    fn test_click_without_automation_still_updates_ui() {
        let mut window = test_window();

        // No peer attached: the announcement is dropped, the UI still works.
        window.notify_button_clicked();

        assert_eq!(window.status_block().text(), STATUS_TEXT);
        assert!(!window.raise_button().is_enabled());
    }
}
