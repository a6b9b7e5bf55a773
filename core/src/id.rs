//! Unique identifiers for views in a widget tree.

use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

/// A process-unique identifier assigned to every view at construction.
///
/// Identifiers are never reused, which lets deferred actions refer to a
/// view without keeping it alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(NonZeroU64);

impl ViewId {
    /// Returns a fresh identifier.
    ///
    /// # Panics
    ///
    /// Panics if the identifier space is exhausted, which cannot happen
    /// in practice.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(raw).expect("view id counter overflowed"))
    }

    /// Returns the identifier as a plain integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ViewId::next();
        let b = ViewId::next();
        assert_ne!(a, b);
    }
}
