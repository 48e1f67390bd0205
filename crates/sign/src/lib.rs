//! Elliptic-curve key material and ECDSA for peer identities
//!
//! This crate holds private keys, public keys and signatures for NIST
//! P-256, P-384 and P-521 in owned, validated buffers, and signs and
//! verifies through a pluggable [`CryptoProvider`].
//!
//! ```
//! use peerkey_sign::{CurveKind, Ecdsa, PublicKey};
//!
//! let ecdsa: Ecdsa = Ecdsa::default();
//! let pair = ecdsa.generate_key_pair(CurveKind::P256)?;
//! let sig = ecdsa.sign(&pair.private, b"libp2p")?;
//!
//! let wire = pair.public.serialize_new()?;
//! let public = PublicKey::deserialize(&wire)?;
//! assert!(ecdsa.verify(&sig, b"libp2p", &public));
//! # Ok::<(), peerkey_api::Error>(())
//! ```

pub mod curve;
pub mod ecdsa;
pub mod keys;
pub mod material;
pub mod provider;
pub mod validate;
pub mod wire;

#[cfg(feature = "serde")]
mod serde_support;

pub use curve::{CurveKind, CurveSlot};
pub use ecdsa::Ecdsa;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use material::{compute_view, KeyView};
pub use provider::{CryptoProvider, ProviderOutput, RustCryptoProvider};
pub use validate::{validate_point, validate_scalar};
pub use wire::{WireDecode, WireEncode};
