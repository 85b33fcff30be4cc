//! Accessibility support for Herald widgets.
//!
//! Widgets describe themselves to assistive technology through the
//! [`Accessible`] trait, which builds [AccessKit](https://accesskit.dev/)
//! nodes. Announcements go the other way: a control asks its
//! [`TextBlockPeer`] to raise a platform notification event, and the peer
//! forwards the request to the [`crate::platform`] backend.
//!
//! # Architecture
//!
//! - [`Accessible`] trait: implemented by widgets to expose role, name, and
//!   live-region semantics
//! - [`AccessibleRole`]: simplified widget roles mapping to AccessKit
//! - [`AutomationBinding`]: the hosting framework's bridge — the backend to
//!   call plus the shared availability latch, cloned into each peer
//! - [`TextBlockPeer`]: per-control peer that lazily resolves and caches the
//!   platform provider handle and raises notification events through it

mod node;
mod peer;
mod role;

pub use node::Accessible;
pub use peer::{AutomationBinding, TextBlockPeer};
pub use role::AccessibleRole;
