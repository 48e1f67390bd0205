//! Common implementations and shared functionality for the peerkey crates
//!
//! Zeroizing containers for scratch secrets and the scoped wipe guard used
//! around private key lifetimes.

pub mod security;

// Re-export core security types
pub use security::{with_wipe, SecretVec, Wipe, WipeGuard};
