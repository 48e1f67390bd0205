use core::fmt;

use peerkey_api::{Error, Result};
use peerkey_common::Wipe;

use super::{PrivateKey, PublicKey};
use crate::curve::CurveKind;
use crate::ecdsa::Ecdsa;
use crate::provider::RustCryptoProvider;

/// A private key together with its public key
///
/// The unit produced when a node creates a new identity.
#[derive(Debug)]
pub struct KeyPair {
    /// Secret half
    pub private: PrivateKey,
    /// Public half
    pub public: PublicKey,
}

impl KeyPair {
    /// Pair two keys, refusing halves from different curves
    ///
    /// Only the curve tags are compared; use [`KeyPair::from_private`] to
    /// get a public key that is known to match.
    pub fn new(private: PrivateKey, public: PublicKey) -> Result<Self> {
        if private.curve() != public.curve() {
            return Err(Error::CurveMismatch {
                expected: private.curve().label(),
                actual: public.curve().label(),
            });
        }
        Ok(Self { private, public })
    }

    /// Fresh key pair on `curve` from the default provider
    pub fn generate(curve: CurveKind) -> Result<Self> {
        Ecdsa::new(RustCryptoProvider).generate_key_pair(curve)
    }

    /// Derive the public half of `private`
    pub fn from_private(private: PrivateKey) -> Result<Self> {
        let public = Ecdsa::new(RustCryptoProvider).derive_public_key(&private)?;
        Ok(Self { private, public })
    }

    /// Curve of the pair
    pub fn curve_kind(&self) -> Option<CurveKind> {
        self.private.curve_kind()
    }

    /// Independent copy of both halves
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            private: self.private.try_clone()?,
            public: self.public.try_clone()?,
        })
    }

    /// Wipe both halves
    pub fn wipe(&mut self) {
        self.private.wipe();
        self.public.wipe();
    }
}

impl Wipe for KeyPair {
    fn wipe(&mut self) {
        KeyPair::wipe(self);
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({})", self.public)
    }
}
