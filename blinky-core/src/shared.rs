//! State shared between execution contexts
//!
//! The device is touched from the host context (commands), the tick context
//! and the touch edge context. [`Shared`] holds it behind a critical
//! section, so every access is one atomic step relative to the others, and
//! a racing second `disable` simply observes the first one's result.

use core::cell::RefCell;

use critical_section::Mutex;

/// Critical-section protected cell, initialized once at startup
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Shared<T> {
    /// Create an empty cell (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store the value, replacing any previous one
    pub fn init(&self, value: T) {
        critical_section::with(|cs| {
            self.inner.borrow_ref_mut(cs).replace(value);
        });
    }

    /// Check whether a value has been stored
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` on the value with interrupts masked
    ///
    /// Returns `None` before `init`. `f` must not call `with` on the same
    /// cell again.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COUNTER: Shared<u32> = Shared::new();

    #[test]
    fn test_uninitialized() {
        let cell: Shared<u8> = Shared::new();
        assert!(!cell.is_initialized());
        assert_eq!(cell.with(|v| *v), None);
    }

    #[test]
    fn test_static_cell() {
        COUNTER.init(1);
        assert!(COUNTER.is_initialized());
        COUNTER.with(|v| *v += 41);
        assert_eq!(COUNTER.with(|v| *v), Some(42));
    }
}
