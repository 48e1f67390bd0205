//! Boundary to the elliptic-curve arithmetic provider
//!
//! Key material never does curve arithmetic itself. Generation, derivation,
//! point multiplication, hashing and raw ECDSA are delegated to a
//! [`CryptoProvider`]; this crate only checks shapes and lengths around the
//! calls and interprets what comes back.

use peerkey_api::Result;
use peerkey_params::utils::hash::SHA256_OUTPUT_SIZE;

use crate::curve::CurveKind;

mod rustcrypto;

pub use rustcrypto::RustCryptoProvider;

/// A SHA-256 digest
pub type Digest = [u8; SHA256_OUTPUT_SIZE];

/// Where a provider placed its output inside a caller-supplied scratch buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderOutput {
    /// Offset of the first output byte
    pub offset: usize,
    /// Number of output bytes
    pub len: usize,
}

/// Elliptic-curve operations required by the key material model
///
/// Implementations are stateless from the caller's point of view and must
/// run their scalar and point arithmetic in constant time.
pub trait CryptoProvider {
    /// Generate a private scalar for `curve` into `scratch`
    ///
    /// The generator must be seeded from the operating system's entropy
    /// source. `scratch` is at least `MAX_SCALAR_SIZE` bytes; the provider
    /// reports where inside it the scalar landed.
    fn generate_scalar(&self, curve: CurveKind, scratch: &mut [u8]) -> Result<ProviderOutput>;

    /// Compute the uncompressed public point of `scalar` into `scratch`
    ///
    /// `scratch` is at least `MAX_POINT_SIZE` bytes.
    fn derive_point(
        &self,
        curve: CurveKind,
        scalar: &[u8],
        scratch: &mut [u8],
    ) -> Result<ProviderOutput>;

    /// Replace the uncompressed `point` with `scalar * point`
    ///
    /// Fails without touching `point` if it is not a valid point of
    /// `curve` or the product is the identity.
    fn multiply_point(&self, curve: CurveKind, point: &mut [u8], scalar: &[u8]) -> Result<()>;

    /// SHA-256 of `message`
    fn sha256(&self, message: &[u8]) -> Digest;

    /// Raw fixed-width ECDSA signature over `digest`, written into `out`
    ///
    /// Returns the number of bytes written.
    fn sign_digest(
        &self,
        curve: CurveKind,
        scalar: &[u8],
        digest: &Digest,
        out: &mut [u8],
    ) -> Result<usize>;

    /// Raw ECDSA verification of `signature` over `digest`
    fn verify_digest(
        &self,
        curve: CurveKind,
        point: &[u8],
        digest: &Digest,
        signature: &[u8],
    ) -> bool;
}
