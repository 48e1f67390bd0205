//! Constants for supporting primitives

pub mod hash;
pub mod wire;
