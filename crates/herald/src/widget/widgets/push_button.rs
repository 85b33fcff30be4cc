//! Push button widget.

use accesskit::Action;
use herald_core::Signal;

use crate::widget::accessibility::{Accessible, AccessibleRole};
use crate::widget::{FocusPolicy, WidgetBase, WidgetId};

/// A standard push button.
///
/// # Signals
///
/// - `clicked`: emitted when the button is activated
pub struct PushButton {
    base: WidgetBase,
    text: String,

    /// Emitted when the button is activated.
    pub clicked: Signal<()>,
}

impl PushButton {
    /// Create a new push button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.set_focus_policy(FocusPolicy::StrongFocus);

        Self {
            base,
            text: text.into(),
            clicked: Signal::new(),
        }
    }

    /// This button's widget id.
    pub fn id(&self) -> WidgetId {
        self.base.id()
    }

    /// The button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the button responds to activation.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enable or disable the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
    }

    /// Activate the button, as the host event dispatch does for a mouse
    /// click or a Space/Enter press while focused.
    ///
    /// Disabled buttons ignore activation.
    pub fn click(&self) {
        if self.base.is_enabled() {
            self.clicked.emit(());
        }
    }
}

impl Accessible for PushButton {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn accessible_actions(&self) -> Vec<Action> {
        vec![Action::Click, Action::Focus]
    }

    fn is_accessible_disabled(&self) -> bool {
        !self.base.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_click_emits_clicked() {
        let button = PushButton::new("Go");
        let clicks = Rc::new(Cell::new(0));

        let clicks_clone = clicks.clone();
        button.clicked.connect(move |()| {
            clicks_clone.set(clicks_clone.get() + 1);
        });

        button.click();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_disabled_button_ignores_activation() {
        let mut button = PushButton::new("Go");
        let clicks = Rc::new(Cell::new(0));

        let clicks_clone = clicks.clone();
        button.clicked.connect(move |()| {
            clicks_clone.set(clicks_clone.get() + 1);
        });

        button.set_enabled(false);
        button.click();
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_accessible_node_reflects_state() {
        let mut button = PushButton::new("Raise");
        button.set_enabled(false);

        assert_eq!(button.accessible_role(), AccessibleRole::Button);
        assert_eq!(button.accessible_name(), Some("Raise".to_string()));
        assert!(button.is_accessible_disabled());

        let node = button.build_accessible_node();
        assert_eq!(node.role(), accesskit::Role::Button);
    }
}
