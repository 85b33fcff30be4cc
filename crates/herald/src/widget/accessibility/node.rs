//! The Accessible trait for widget accessibility support.

use accesskit::{Action, Live, Node};

use super::role::AccessibleRole;

/// Trait for widgets that provide accessibility information.
///
/// Widgets implement the methods relevant to their functionality; the
/// defaults describe an inert, nameless widget.
///
/// # Example
///
/// ```ignore
/// impl Accessible for PushButton {
///     fn accessible_role(&self) -> AccessibleRole {
///         AccessibleRole::Button
///     }
///
///     fn accessible_name(&self) -> Option<String> {
///         Some(self.text().to_string())
///     }
/// }
/// ```
pub trait Accessible {
    /// The accessibility role of this widget.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// The accessible name, the primary label screen readers announce.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Live-region politeness for widgets whose text changes should be
    /// announced without a focus or notification trigger.
    fn accessible_live(&self) -> Live {
        Live::Off
    }

    /// Actions assistive technology may invoke on this widget.
    fn accessible_actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Whether the widget is currently disabled.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Build an AccessKit node from this widget's accessibility info.
    ///
    /// Called by the hosting framework when it assembles the window's
    /// accessibility tree. Widgets typically don't need to override this.
    fn build_accessible_node(&self) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }

        if self.accessible_live() != Live::Off {
            node.set_live(self.accessible_live());
        }

        for action in self.accessible_actions() {
            node.add_action(action);
        }

        if self.is_accessible_disabled() {
            node.set_disabled();
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestStatusWidget {
        text: String,
    }

    impl Accessible for TestStatusWidget {
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

    #[test]
    fn test_accessible_trait_defaults() {
        struct MinimalWidget;
        impl Accessible for MinimalWidget {}

        let widget = MinimalWidget;
        assert_eq!(widget.accessible_role(), AccessibleRole::Unknown);
        assert!(widget.accessible_name().is_none());
        assert_eq!(widget.accessible_live(), Live::Off);
        assert!(widget.accessible_actions().is_empty());
        assert!(!widget.is_accessible_disabled());
    }

    #[test]
    fn test_build_accessible_node() {
        let widget = TestStatusWidget {
            text: "Ready".to_string(),
        };

        let node = widget.build_accessible_node();
        assert_eq!(node.role(), accesskit::Role::Label);
    }
}
