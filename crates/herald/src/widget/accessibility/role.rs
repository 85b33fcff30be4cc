//! Accessibility roles for widgets.

use accesskit::Role;

/// The accessibility role of a widget.
///
/// A simplified set of roles for the widgets Herald ships; maps to the more
/// comprehensive AccessKit `Role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic widget with no specific role.
    #[default]
    Unknown,

    /// A window or top-level container.
    Window,

    /// A push button.
    Button,

    /// A static text label.
    Label,
}

impl AccessibleRole {
    /// Convert to the corresponding AccessKit role.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::Window => Role::Window,
            AccessibleRole::Button => Role::Button,
            AccessibleRole::Label => Role::Label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(AccessibleRole::Button.to_accesskit_role(), Role::Button);
        assert_eq!(AccessibleRole::Label.to_accesskit_role(), Role::Label);
        assert_eq!(AccessibleRole::default(), AccessibleRole::Unknown);
    }
}
