//! # peerkey
//!
//! Validated elliptic-curve key material and varint wire framing for
//! peer-to-peer protocol stacks.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! peerkey = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: serde support for curves, keys and signatures (hex strings)
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`peerkey-api`]: error type and serialization traits
//! - [`peerkey-internal`]: constant-time byte helpers
//! - [`peerkey-params`]: curve and wire-format constants
//! - [`peerkey-common`]: zeroizing containers and wipe guards
//! - [`peerkey-wire`]: varint-framed wire buffer
//! - [`peerkey-sign`]: key material, validators and ECDSA
//!
//! ## Example
//!
//! ```
//! use peerkey::prelude::*;
//!
//! let ecdsa: Ecdsa = Ecdsa::default();
//! let pair = KeyPair::generate(CurveKind::P256)?;
//! let sig = ecdsa.sign(&pair.private, b"libp2p")?;
//!
//! let mut buf = WireBuffer::new();
//! pair.public.encode_to(&mut buf)?;
//! sig.encode_to(&mut buf)?;
//!
//! buf.rewind();
//! let public = PublicKey::decode_from(&mut buf)?;
//! let sig = Signature::decode_from(&mut buf)?;
//! assert!(ecdsa.verify(&sig, b"libp2p", &public));
//! # Ok::<(), peerkey::api::Error>(())
//! ```

pub use peerkey_api as api;
pub use peerkey_common as common;
pub use peerkey_internal as internal;
pub use peerkey_params as params;
pub use peerkey_sign as sign;
pub use peerkey_wire as wire;

/// Common imports for peerkey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret};
    pub use crate::sign::{CryptoProvider, WireDecode, WireEncode};

    // Key material and signing
    pub use crate::sign::{
        CurveKind, CurveSlot, Ecdsa, KeyPair, PrivateKey, PublicKey, RustCryptoProvider,
        Signature,
    };

    // Wire framing
    pub use crate::wire::WireBuffer;

    // Re-export security types
    pub use crate::common::{with_wipe, SecretVec, Wipe, WipeGuard};
}
