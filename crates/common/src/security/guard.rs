//! Scoped destruction of sensitive values

use core::ops::{Deref, DerefMut};

/// Explicit destruction of sensitive state
///
/// `wipe` overwrites the secret bytes with zeroes and resets the value to
/// its empty state. Calling it twice is harmless.
pub trait Wipe {
    /// Zero and discard the sensitive contents
    fn wipe(&mut self);
}

impl Wipe for Vec<u8> {
    fn wipe(&mut self) {
        zeroize::Zeroize::zeroize(self);
    }
}

/// Owning guard that wipes its value when dropped
///
/// This is useful for ensuring cleanup happens even in the presence
/// of early returns or panics.
pub struct WipeGuard<T: Wipe> {
    value: T,
}

impl<T: Wipe> WipeGuard<T> {
    /// Take ownership of `value` until the guard goes out of scope
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Wipe> Drop for WipeGuard<T> {
    fn drop(&mut self) {
        self.value.wipe();
    }
}

impl<T: Wipe> Deref for WipeGuard<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: Wipe> DerefMut for WipeGuard<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

/// Run `f` on `value`, then wipe it on every exit path
pub fn with_wipe<T, R, F>(value: T, f: F) -> R
where
    T: Wipe,
    F: FnOnce(&mut T) -> R,
{
    let mut guard = WipeGuard::new(value);
    f(&mut guard)
}
