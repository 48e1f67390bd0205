//! Constant values for the peerkey crates
//!
//! Curve parameters, digest sizes and wire-format limits. Everything is
//! `const` so downstream crates can size arrays from it.

#![no_std]

pub mod traditional;
pub mod utils;
