//! ECDSA signing and verification over P-256, P-384 and P-521
//!
//! Messages are hashed with SHA-256 for every curve. The digest is read as
//! a big-endian integer, which for P-384 and P-521 is shorter than the
//! group order and so enters the signature unmodified.
//!
//! Reference: FIPS 186-4, Section 6; SEC 1 v2, Section 2.3.3 (point
//! encoding).

use peerkey_api::error::validate;
use peerkey_api::Result;
use peerkey_common::SecretVec;
use peerkey_params::traditional::ecdsa::{MAX_POINT_SIZE, MAX_SCALAR_SIZE, MAX_SIGNATURE_SIZE};
use tracing::{debug, trace, warn};

use crate::curve::{CurveKind, CurveSlot};
use crate::keys::{KeyPair, PrivateKey, PublicKey, Signature};
use crate::material::{KeyMaterial, KeyRole};
use crate::provider::{CryptoProvider, RustCryptoProvider};
use crate::validate::validate_scalar;


/// Key generation, derivation, signing and verification over a provider
///
/// `Ecdsa::default()` uses [`RustCryptoProvider`]. The façade holds no
/// mutable state and can be shared freely.
#[derive(Debug, Clone)]
pub struct Ecdsa<P = RustCryptoProvider> {
    provider: P,
}

impl Default for Ecdsa<RustCryptoProvider> {
    fn default() -> Self {
        Self::new(RustCryptoProvider)
    }
}

impl<P: CryptoProvider> Ecdsa<P> {
    /// Façade over a specific provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fresh private key on `curve`
    ///
    /// The provider seeds a DRBG from the operating system for each call.
    /// A refusal is returned as is and never retried.
    ///
    /// # Errors
    ///
    /// `RngFailure` if seeding fails, `IncorrectKey` if the provider hands
    /// back something that is not a valid scalar for `curve`.
    pub fn generate_private_key(&self, curve: CurveKind) -> Result<PrivateKey> {
        let mut scratch = SecretVec::zeroed(MAX_SCALAR_SIZE);
        let out = self
            .provider
            .generate_scalar(curve, scratch.as_mut_slice())
            .inspect_err(|e| warn!(curve = %curve, error = %e, "private key generation failed"))?;

        let material = KeyMaterial::from_provider(
            CurveSlot::Supported(curve),
            scratch.as_slice().to_vec(),
            out.offset,
            out.len,
        )?;
        let key = PrivateKey::from_material(material);

        let scalar = key.scalar("generate_private_key")?;
        validate::key(
            validate_scalar(scalar, curve),
            "generate_private_key",
            "provider produced an out-of-range scalar",
        )?;

        debug!(curve = %curve, offset = out.offset, "private key generated");
        Ok(key)
    }

    /// Public key of `private`
    ///
    /// # Errors
    ///
    /// `IncorrectKey` if the key is empty, unsupported or corrupted, or if
    /// the provider's output does not fit its scratch buffer.
    pub fn derive_public_key(&self, private: &PrivateKey) -> Result<PublicKey> {
        let curve = private.curve().require("derive_public_key")?;
        let scalar = private.scalar("derive_public_key")?;

        let mut scratch = vec![0u8; MAX_POINT_SIZE];
        let out = self.provider.derive_point(curve, scalar, &mut scratch)?;
        let material =
            KeyMaterial::from_provider(CurveSlot::Supported(curve), scratch, out.offset, out.len)?;

        // Reject a provider that wrote the wrong length for the curve
        material.canonical(KeyRole::Public, "derive_public_key")?;

        debug!(curve = %curve, "public key derived");
        Ok(PublicKey::from_material(material))
    }

    /// Generate a private key and derive its public key
    pub fn generate_key_pair(&self, curve: CurveKind) -> Result<KeyPair> {
        let private = self.generate_private_key(curve)?;
        let public = self.derive_public_key(&private)?;
        Ok(KeyPair { private, public })
    }

    /// `private * public`, the ECDH shared point
    ///
    /// Returns `None` on a curve mismatch, on a corrupted or unsupported
    /// operand, or when the provider rejects the product.
    pub fn scalar_multiply(&self, public: &PublicKey, private: &PrivateKey) -> Option<PublicKey> {
        let curve = public.curve_kind()?;
        if private.curve() != public.curve() {
            trace!(
                public = %public.curve().label(),
                private = %private.curve().label(),
                "scalar_multiply curve mismatch"
            );
            return None;
        }

        let scalar = private.scalar("scalar_multiply").ok()?;
        let mut product = public.try_clone().ok()?.serialize_new().ok()?;
        self.provider
            .multiply_point(curve, &mut product, scalar)
            .map_err(|e| warn!(curve = %curve, error = %e, "provider rejected multiplication"))
            .ok()?;

        Some(PublicKey::from_material(KeyMaterial::copy_of(
            CurveSlot::Supported(curve),
            &product,
        )))
    }

    /// Sign the SHA-256 digest of `message`
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` if `message` is empty
    /// - `IncorrectKey` if the key is empty, unsupported or corrupted
    /// - `IncorrectSignature` if the provider refuses or returns a
    ///   signature of the wrong length
    pub fn sign(&self, private: &PrivateKey, message: &[u8]) -> Result<Signature> {
        validate::non_empty("sign", message)?;
        let curve = private.curve().require("sign")?;
        let scalar = private.scalar("sign")?;

        let digest = self.provider.sha256(message);
        let mut out = [0u8; MAX_SIGNATURE_SIZE];
        let written = self.provider.sign_digest(curve, scalar, &digest, &mut out)?;
        validate::signature_length("sign", written, curve.signature_size())?;

        Ok(Signature::from_parts(
            CurveSlot::Supported(curve),
            out[..written].to_vec(),
        ))
    }

    /// Check `signature` over `message` against `public`
    ///
    /// Returns `false` rather than an error when the message is empty, the
    /// curves differ, or the key is unusable; verification is a yes/no
    /// question for the caller.
    pub fn verify(&self, signature: &Signature, message: &[u8], public: &PublicKey) -> bool {
        if message.is_empty() {
            trace!("verify called with an empty message");
            return false;
        }
        let Some(curve) = public.curve_kind() else {
            trace!(curve = ?public.curve(), "verify called with an unusable key");
            return false;
        };
        if signature.curve() != public.curve() {
            trace!(
                signature = %signature.curve().label(),
                key = %curve,
                "verify curve mismatch"
            );
            return false;
        }
        let Ok(point) = public.as_bytes() else {
            trace!("verify called with a corrupted key");
            return false;
        };

        let digest = self.provider.sha256(message);
        self.provider
            .verify_digest(curve, point, &digest, signature.as_bytes())
    }

    /// Parse an uncompressed public point, checking it with this provider
    pub fn deserialize_public(&self, bytes: &[u8]) -> Result<PublicKey> {
        PublicKey::deserialize_with(bytes, &self.provider)
    }
}
