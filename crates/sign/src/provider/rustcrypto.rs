//! Provider backed by the RustCrypto `p256`, `p384` and `p521` crates

use peerkey_api::{Error, Result};
use peerkey_params::traditional::ecdsa::MAX_SCALAR_SIZE;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest as _, Sha256};
use tracing::warn;

use super::{CryptoProvider, Digest, ProviderOutput};
use crate::curve::CurveKind;

/// Default provider: RustCrypto curve arithmetic and a ChaCha20 DRBG
/// freshly seeded from the OS for every generated key
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

/// Left-pad a digest to the curve's field width
///
/// The integer value is unchanged, so this matches the ECDSA rule for
/// digests shorter than the group order while meeting the backends'
/// minimum prehash length.
fn pad_digest(curve: CurveKind, digest: &Digest) -> Vec<u8> {
    let width = curve.scalar_size().max(digest.len());
    let mut padded = vec![0u8; width];
    padded[width - digest.len()..].copy_from_slice(digest);
    padded
}

fn seeded_drbg() -> Result<ChaCha20Rng> {
    ChaCha20Rng::from_rng(OsRng).map_err(|e| {
        warn!(error = %e, "entropy source refused to seed the DRBG");
        Error::rng("generate_private_key", e.to_string())
    })
}

/// Per-curve operations over one RustCrypto curve crate
macro_rules! nist_backend {
    ($module:ident, $krate:ident) => {
        mod $module {
            use $krate::ecdsa::{Signature, SigningKey, VerifyingKey};
            use $krate::elliptic_curve::sec1::ToEncodedPoint;
            use $krate::{PublicKey, SecretKey};
            use peerkey_api::{Error, Result};
            use rand_chacha::ChaCha20Rng;
            use signature::hazmat::{PrehashSigner, PrehashVerifier};
            use zeroize::Zeroize;

            pub(super) fn generate(rng: &mut ChaCha20Rng, out: &mut [u8]) -> usize {
                let secret = SecretKey::random(rng);
                let mut bytes = secret.to_bytes();
                let len = bytes.len();
                out[..len].copy_from_slice(&bytes);
                bytes.as_mut_slice().zeroize();
                len
            }

            pub(super) fn derive(scalar: &[u8], out: &mut [u8]) -> Result<usize> {
                let secret = SecretKey::from_slice(scalar)
                    .map_err(|_| Error::key("derive_public_key", "scalar rejected by provider"))?;
                let encoded = secret.public_key().to_encoded_point(false);
                let bytes = encoded.as_bytes();
                out[..bytes.len()].copy_from_slice(bytes);
                Ok(bytes.len())
            }

            pub(super) fn multiply(point: &mut [u8], scalar: &[u8]) -> Result<()> {
                let public = PublicKey::from_sec1_bytes(point)
                    .map_err(|_| Error::key("multiply_point", "point is not on the curve"))?;
                let secret = SecretKey::from_slice(scalar)
                    .map_err(|_| Error::key("multiply_point", "scalar rejected by provider"))?;

                let product = (public.to_projective() * *secret.to_nonzero_scalar()).to_affine();
                let product = PublicKey::from_affine(product)
                    .map_err(|_| Error::key("multiply_point", "product is the identity"))?;

                let encoded = product.to_encoded_point(false);
                if encoded.as_bytes().len() != point.len() {
                    return Err(Error::key("multiply_point", "unexpected point encoding"));
                }
                point.copy_from_slice(encoded.as_bytes());
                Ok(())
            }

            pub(super) fn sign(scalar: &[u8], prehash: &[u8], out: &mut [u8]) -> Result<usize> {
                let signing_key = SigningKey::from_slice(scalar)
                    .map_err(|_| Error::key("sign", "scalar rejected by provider"))?;
                let signature: Signature = signing_key
                    .sign_prehash(prehash)
                    .map_err(|e| Error::signature("sign", e.to_string()))?;

                let bytes = signature.to_bytes();
                if out.len() < bytes.len() {
                    return Err(Error::signature("sign", "signature buffer too small"));
                }
                out[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }

            pub(super) fn verify(point: &[u8], prehash: &[u8], signature: &[u8]) -> bool {
                let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(point) else {
                    return false;
                };
                let Ok(signature) = Signature::from_slice(signature) else {
                    return false;
                };
                verifying_key.verify_prehash(prehash, &signature).is_ok()
            }
        }
    };
}

nist_backend!(nist_p256, p256);
nist_backend!(nist_p384, p384);
nist_backend!(nist_p521, p521);

impl CryptoProvider for RustCryptoProvider {
    fn generate_scalar(&self, curve: CurveKind, scratch: &mut [u8]) -> Result<ProviderOutput> {
        let width = curve.scalar_size();
        if scratch.len() < MAX_SCALAR_SIZE {
            return Err(Error::key("generate_private_key", "scratch buffer too small"));
        }

        // Right-align in the scratch so every curve's scalar ends at the same byte
        let offset = scratch.len() - width;
        let out = &mut scratch[offset..];

        let mut rng = seeded_drbg()?;
        let len = match curve {
            CurveKind::P256 => nist_p256::generate(&mut rng, out),
            CurveKind::P384 => nist_p384::generate(&mut rng, out),
            CurveKind::P521 => nist_p521::generate(&mut rng, out),
        };

        Ok(ProviderOutput { offset, len })
    }

    fn derive_point(
        &self,
        curve: CurveKind,
        scalar: &[u8],
        scratch: &mut [u8],
    ) -> Result<ProviderOutput> {
        if scratch.len() < curve.point_size() {
            return Err(Error::key("derive_public_key", "scratch buffer too small"));
        }

        let len = match curve {
            CurveKind::P256 => nist_p256::derive(scalar, scratch),
            CurveKind::P384 => nist_p384::derive(scalar, scratch),
            CurveKind::P521 => nist_p521::derive(scalar, scratch),
        }?;

        Ok(ProviderOutput { offset: 0, len })
    }

    fn multiply_point(&self, curve: CurveKind, point: &mut [u8], scalar: &[u8]) -> Result<()> {
        match curve {
            CurveKind::P256 => nist_p256::multiply(point, scalar),
            CurveKind::P384 => nist_p384::multiply(point, scalar),
            CurveKind::P521 => nist_p521::multiply(point, scalar),
        }
    }

    fn sha256(&self, message: &[u8]) -> Digest {
        Sha256::digest(message).into()
    }

    fn sign_digest(
        &self,
        curve: CurveKind,
        scalar: &[u8],
        digest: &Digest,
        out: &mut [u8],
    ) -> Result<usize> {
        let prehash = pad_digest(curve, digest);
        let result = match curve {
            CurveKind::P256 => nist_p256::sign(scalar, &prehash, out),
            CurveKind::P384 => nist_p384::sign(scalar, &prehash, out),
            CurveKind::P521 => nist_p521::sign(scalar, &prehash, out),
        };
        if let Err(ref e) = result {
            warn!(curve = %curve, error = %e, "provider refused to sign");
        }
        result
    }

    fn verify_digest(
        &self,
        curve: CurveKind,
        point: &[u8],
        digest: &Digest,
        signature: &[u8],
    ) -> bool {
        let prehash = pad_digest(curve, digest);
        match curve {
            CurveKind::P256 => nist_p256::verify(point, &prehash, signature),
            CurveKind::P384 => nist_p384::verify(point, &prehash, signature),
            CurveKind::P521 => nist_p521::verify(point, &prehash, signature),
        }
    }
}
