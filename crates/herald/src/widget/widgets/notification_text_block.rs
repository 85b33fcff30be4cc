//! A text display control that can raise notification events.
//!
//! [`NotificationTextBlock`] is a static text widget with one extra ability:
//! on request, it asks its automation peer to raise a platform notification
//! event so screen readers announce a piece of text. This is useful when a
//! visual status change should be spoken even though focus stays elsewhere
//! and no live-region change event fits the situation.
//!
//! # Example
//!
//! ```ignore
//! use herald::widget::accessibility::AutomationBinding;
//! use herald::widget::widgets::NotificationTextBlock;
//!
//! let binding = AutomationBinding::platform();
//! let mut status = NotificationTextBlock::new("");
//!
//! // The hosting framework realizes the control and supplies the resolver.
//! status.create_automation_peer(&binding, Box::new(resolver));
//!
//! status.set_text("Saved.");
//! status.raise_notification_event("Saved.", "Document status");
//! ```

use accesskit::Live;
use herald_core::Signal;

use crate::platform::ProviderResolver;
use crate::widget::accessibility::{Accessible, AccessibleRole, AutomationBinding, TextBlockPeer};
use crate::widget::{WidgetBase, WidgetId};

/// A static text widget that can raise platform notification events.
pub struct NotificationTextBlock {
    base: WidgetBase,
    text: String,

    /// The automation peer, created once when the platform first queries
    /// this control. Until then, notification requests are dropped.
    peer: Option<TextBlockPeer>,

    /// Emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl NotificationTextBlock {
    /// Create a new text block with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            peer: None,
            text_changed: Signal::new(),
        }
    }

    /// This widget's id.
    pub fn id(&self) -> WidgetId {
        self.base.id()
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text == text {
            return;
        }
        self.text = text.clone();
        self.text_changed.emit(text);
    }

    /// Create this control's automation peer.
    ///
    /// Called by the hosting framework binding once per control lifecycle,
    /// when the platform first queries the control. A repeated call keeps
    /// the existing peer (and its cached provider handle).
    pub fn create_automation_peer(
        &mut self,
        binding: &AutomationBinding,
        resolver: Box<dyn ProviderResolver>,
    ) {
        if self.peer.is_some() {
            tracing::debug!(id = ?self.base.id(), "automation peer already created");
            return;
        }
        self.peer = Some(binding.create_peer(resolver));
    }

    /// Whether the automation peer has been created.
    pub fn has_automation_peer(&self) -> bool {
        self.peer.is_some()
    }

    /// Raise a notification event announcing `text` under `activity_id`.
    ///
    /// Silent no-op if the platform has not queried this control yet (no
    /// peer exists). Otherwise best effort; see
    /// [`TextBlockPeer::raise_notification_event`].
    pub fn raise_notification_event(&mut self, text: &str, activity_id: &str) {
        if let Some(peer) = self.peer.as_mut() {
            peer.raise_notification_event(text, activity_id);
        }
    }
}

impl Accessible for NotificationTextBlock {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Label
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn accessible_live(&self) -> Live {
        Live::Polite
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use herald_core::{NotificationAvailability, NotificationRequest, RaiseError};

    use super::*;
    use crate::platform::{NotificationBackend, ProviderHandle};

    #[derive(Default)]
    struct RecordingBackend {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl NotificationBackend for RecordingBackend {
        fn raise_notification(
            &self,
            _provider: &ProviderHandle,
            request: NotificationRequest<'_>,
        ) -> Result<(), RaiseError> {
            self.calls
                .lock()
                .push((request.text.to_owned(), request.activity_id.to_owned()));
            Ok(())
        }
    }

    fn recording_binding() -> (AutomationBinding, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend::default());
        let binding = AutomationBinding::new(backend.clone(), NotificationAvailability::new());
        (binding, backend)
    }

    #[test]
    fn test_raise_without_peer_is_a_no_op() {
        let mut block = NotificationTextBlock::new("Ready");
        assert!(!block.has_automation_peer());

        // Must not panic, must not do anything.
        block.raise_notification_event("Ready", "Status update");
    }

    #[test]
    fn test_raise_with_peer_forwards_literally() {
        let (binding, backend) = recording_binding();
        let mut block = NotificationTextBlock::new("");
        block.create_automation_peer(&binding, Box::new(|| Some(ProviderHandle::new(()))));
        assert!(block.has_automation_peer());

        block.raise_notification_event("All clear.", "Status update");
        block.raise_notification_event("All clear.", "Status update");

        assert_eq!(
            *backend.calls.lock(),
            vec![
                ("All clear.".to_string(), "Status update".to_string()),
                ("All clear.".to_string(), "Status update".to_string()),
            ]
        );
    }

    #[test]
    fn test_second_peer_creation_keeps_existing_peer() {
        let (binding, backend) = recording_binding();
        let mut block = NotificationTextBlock::new("");

        block.create_automation_peer(&binding, Box::new(|| Some(ProviderHandle::new(()))));
        // The second resolver would never produce a provider; if it replaced
        // the first peer, the raise below would be skipped.
        block.create_automation_peer(&binding, Box::new(|| None));

        block.raise_notification_event("text", "id");
        assert_eq!(backend.calls.lock().len(), 1);
    }

    #[test]
    fn test_set_text_emits_on_change_only() {
        let mut block = NotificationTextBlock::new("a");
        let changes = Rc::new(RefCell::new(Vec::new()));

        let changes_clone = changes.clone();
        block.text_changed.connect(move |text: &String| {
            changes_clone.borrow_mut().push(text.clone());
        });

        block.set_text("b");
        block.set_text("b");
        assert_eq!(*changes.borrow(), vec!["b".to_string()]);
        assert_eq!(block.text(), "b");
    }

    #[test]
    fn test_accessible_reports_polite_live_region() {
        let block = NotificationTextBlock::new("Status");
        assert_eq!(block.accessible_role(), AccessibleRole::Label);
        assert_eq!(block.accessible_live(), Live::Polite);
        assert_eq!(block.accessible_name(), Some("Status".to_string()));
    }
}
