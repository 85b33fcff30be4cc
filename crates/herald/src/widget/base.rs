//! Common widget state.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a widget instance.
///
/// Ids are process-unique and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// How a widget participates in keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusPolicy {
    /// The widget never receives focus.
    #[default]
    NoFocus,
    /// The widget receives focus by clicking.
    ClickFocus,
    /// The widget receives focus via Tab navigation.
    TabFocus,
    /// The widget receives focus by clicking and via Tab.
    StrongFocus,
}

/// State common to every widget: identity, enabled flag, focus policy.
#[derive(Debug)]
pub struct WidgetBase {
    id: WidgetId,
    enabled: bool,
    focus_policy: FocusPolicy,
}

impl WidgetBase {
    /// Create a new widget base with a fresh id.
    ///
    /// Widgets start enabled with [`FocusPolicy::NoFocus`].
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            enabled: true,
            focus_policy: FocusPolicy::default(),
        }
    }

    /// This widget's id.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether the widget responds to user interaction.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the widget.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The widget's focus policy.
    #[inline]
    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Set the widget's focus policy.
    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetBase::new();
        let b = WidgetBase::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_defaults() {
        let base = WidgetBase::new();
        assert!(base.is_enabled());
        assert_eq!(base.focus_policy(), FocusPolicy::NoFocus);
    }
}
