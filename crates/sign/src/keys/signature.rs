use core::fmt;

use peerkey_api::{Error, Result, Serialize};
use peerkey_internal::ct_eq;

use super::write_hex;
use crate::curve::{CurveKind, CurveSlot};

/// Fixed-width raw ECDSA signature (`r || s`)
///
/// Signatures have no view; the whole buffer is the signature. Its curve
/// is inferred from the length alone, and `(r, s)` are only checked by the
/// verifier.
#[derive(Clone, Default)]
pub struct Signature {
    curve: CurveSlot,
    bytes: Vec<u8>,
}

impl Signature {
    pub(crate) fn from_parts(curve: CurveSlot, bytes: Vec<u8>) -> Self {
        Self { curve, bytes }
    }

    /// An empty signature with no curve
    pub fn empty() -> Self {
        Self::default()
    }

    /// Curve tag of this signature
    pub fn curve(&self) -> CurveSlot {
        self.curve
    }

    /// The supported curve, if any
    pub fn curve_kind(&self) -> Option<CurveKind> {
        self.curve.kind()
    }

    /// True for an empty signature
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Raw signature bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn canonical(&self, context: &'static str) -> Result<&[u8]> {
        let curve = match self.curve {
            CurveSlot::Supported(curve) => curve,
            CurveSlot::Empty => return Err(Error::signature(context, "signature is empty")),
            CurveSlot::Unsupported(id) => {
                return Err(Error::signature(
                    context,
                    format!("unsupported curve id {}", id),
                ))
            }
        };
        if self.bytes.len() != curve.signature_size() {
            return Err(Error::signature(
                context,
                format!(
                    "{} signature is {} bytes, expected {}",
                    curve,
                    self.bytes.len(),
                    curve.signature_size()
                ),
            ));
        }
        Ok(&self.bytes)
    }

    /// Copy the signature into `out`, returning its length
    ///
    /// # Errors
    ///
    /// `IncorrectSignature` if the curve is empty or unsupported, the
    /// length is not canonical, or `out` is too short.
    pub fn serialize(&self, out: &mut [u8]) -> Result<usize> {
        let bytes = self.canonical("serialize_signature")?;
        if out.len() < bytes.len() {
            return Err(Error::signature(
                "serialize_signature",
                format!("output holds {} bytes, need {}", out.len(), bytes.len()),
            ));
        }
        out[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Allocating form of [`Signature::serialize`]
    pub fn serialize_new(&self) -> Result<Vec<u8>> {
        Ok(self.canonical("serialize_signature")?.to_vec())
    }

    /// Parse a fixed-width signature of 64, 96 or 132 bytes
    ///
    /// # Errors
    ///
    /// `IncorrectSignature` for any other length.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let curve = CurveKind::from_signature_len(bytes.len()).ok_or_else(|| {
            Error::signature(
                "deserialize_signature",
                format!("no curve has {}-byte signatures", bytes.len()),
            )
        })?;
        Ok(Self::from_parts(CurveSlot::Supported(curve), bytes.to_vec()))
    }

    /// Signature as lowercase hex
    pub fn to_hex(&self) -> Result<String> {
        Ok(hex::encode(self.canonical("signature_to_hex")?))
    }

    /// Parse the hex form produced by [`Signature::to_hex`]
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes =
            hex::decode(s).map_err(|e| Error::signature("signature_from_hex", e.to_string()))?;
        Self::deserialize(&bytes)
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && ct_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:?}, ", self.curve)?;
        write_hex(f, &self.bytes)?;
        f.write_str(")")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.curve {
            CurveSlot::Empty => f.write_str("Empty signature"),
            CurveSlot::Unsupported(_) => f.write_str("Unknown signature"),
            CurveSlot::Supported(_) => write_hex(f, &self.bytes),
        }
    }
}

impl Serialize for Signature {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::deserialize(bytes)
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        self.serialize_new()
    }
}
