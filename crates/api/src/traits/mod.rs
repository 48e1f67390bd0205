//! Traits implemented by peerkey types

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
