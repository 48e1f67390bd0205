//! Internal utilities for the peerkey crates
//!
//! Nothing in here is part of the stable API.

pub mod constant_time;

pub use constant_time::{ct_eq, ct_is_nonzero, ct_less_than};
