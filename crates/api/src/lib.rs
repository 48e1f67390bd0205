//! Public API types for the peerkey crates
//!
//! This crate holds the error type shared by every peerkey component and the
//! byte-serialization traits implemented by key material.

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};

pub use traits::{Serialize, SerializeSecret};
