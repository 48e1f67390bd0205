//! Security primitives and memory safety utilities
//!
//! Sensitive bytes are destroyed explicitly: either by calling
//! [`Wipe::wipe`] or by holding the value in a [`WipeGuard`], which wipes on
//! every exit path.

pub mod guard;
pub mod secret;

pub use guard::{with_wipe, Wipe, WipeGuard};
pub use secret::SecretVec;
