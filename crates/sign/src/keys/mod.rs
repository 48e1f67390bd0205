//! Private keys, public keys, signatures and key pairs
//!
//! Keys own their backing store and locate the canonical bytes through a
//! [`KeyView`](crate::material::KeyView). Serialization always copies
//! exactly the canonical window; deserialization infers the curve from the
//! input length and validates before storing a fresh copy.

use core::fmt;

use crate::curve::CurveSlot;
use crate::material::KeyMaterial;

mod pair;
mod private;
mod public;
mod signature;


pub use pair::KeyPair;
pub use private::PrivateKey;
pub use public::PublicKey;
pub use signature::Signature;

/// Write `bytes` as lowercase hex without an intermediate allocation
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// Human-readable form shared by private and public keys
pub(crate) fn render_key(material: &KeyMaterial, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match material.curve() {
        CurveSlot::Empty => f.write_str("Empty key"),
        CurveSlot::Unsupported(_) => f.write_str("Unknown key"),
        CurveSlot::Supported(_) => match material.window() {
            Some(window) => write_hex(f, window),
            None => f.write_str("Corrupted key"),
        },
    }
}
