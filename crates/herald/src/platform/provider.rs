//! Opaque accessibility provider handles and their resolution.

use std::any::Any;
use std::fmt;

/// An opaque reference to a control's platform accessibility provider.
///
/// The concrete type inside is private to the backend that understands it
/// (on Windows, an `IRawElementProviderSimple`). The handle is owned
/// exclusively by the peer that resolved it and lives for the lifetime of
/// the owning control.
pub struct ProviderHandle {
    inner: Box<dyn Any>,
}

impl ProviderHandle {
    /// Wrap a backend-specific provider object.
    pub fn new<T: Any>(inner: T) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// Borrow the backend-specific provider object, if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderHandle(..)")
    }
}

/// Factory for a control's provider handle, supplied by the hosting
/// framework binding.
///
/// Resolution is allowed to fail (the control may not be realized by the
/// platform yet); the peer simply skips the current notification and asks
/// again on the next one.
pub trait ProviderResolver {
    /// Look up the provider handle for the owning control.
    fn resolve_provider(&self) -> Option<ProviderHandle>;
}

impl<F> ProviderResolver for F
where
    F: Fn() -> Option<ProviderHandle>,
{
    fn resolve_provider(&self) -> Option<ProviderHandle> {
        self()
    }
}
