//! Focus management.
//!
//! This module provides [`FocusManager`], which tracks which widget in a
//! window currently has keyboard focus. Each window owns its own focus
//! manager, giving clear ownership of focus state and making focus behavior
//! easy to test.
//!
//! Focus order matters to assistive technology: some screen readers
//! interrupt an in-progress announcement when focus changes, so controllers
//! that both move focus and raise a notification must move focus first.

use herald_core::Signal;

use super::base::WidgetId;

/// Why focus moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusReason {
    /// A mouse click.
    Mouse,
    /// Tab / Shift+Tab navigation.
    Tab,
    /// A programmatic or unspecified focus change.
    Other,
}

/// Tracks keyboard focus for one window.
#[derive(Debug)]
pub struct FocusManager {
    focused_widget: Option<WidgetId>,

    /// Emitted whenever the focused widget changes.
    pub focus_changed: Signal<Option<WidgetId>>,
}

impl FocusManager {
    /// Create a focus manager with nothing focused.
    pub fn new() -> Self {
        Self {
            focused_widget: None,
            focus_changed: Signal::new(),
        }
    }

    /// The currently focused widget, if any.
    #[inline]
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.focused_widget
    }

    /// Whether a specific widget has focus.
    #[inline]
    pub fn has_focus(&self, widget_id: WidgetId) -> bool {
        self.focused_widget == Some(widget_id)
    }

    /// Move focus to a specific widget.
    ///
    /// Emits [`focus_changed`](Self::focus_changed) unless the widget
    /// already has focus.
    pub fn set_focus(&mut self, widget_id: WidgetId, reason: FocusReason) {
        if self.focused_widget == Some(widget_id) {
            return;
        }
        tracing::trace!(?widget_id, ?reason, "focus changed");
        self.focused_widget = Some(widget_id);
        self.focus_changed.emit(Some(widget_id));
    }

    /// Clear focus entirely.
    pub fn clear_focus(&mut self) {
        if self.focused_widget.is_none() {
            return;
        }
        self.focused_widget = None;
        self.focus_changed.emit(None);
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}
