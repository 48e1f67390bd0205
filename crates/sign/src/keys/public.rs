use core::fmt;

use peerkey_api::error::validate;
use peerkey_api::{Error, Result, Serialize};
use peerkey_common::Wipe;
use peerkey_params::traditional::ecdsa::UNCOMPRESSED_POINT_TAG;
use tracing::trace;

use super::{render_key, write_hex};
use crate::curve::{CurveKind, CurveSlot};
use crate::material::{KeyMaterial, KeyRole, KeyView};
use crate::provider::{CryptoProvider, RustCryptoProvider};
use crate::validate::validate_point;

/// Uncompressed SEC1 public point (`0x04 || X || Y`)
#[derive(Default)]
pub struct PublicKey {
    material: KeyMaterial,
}

impl PublicKey {
    pub(crate) fn from_material(material: KeyMaterial) -> Self {
        Self { material }
    }

    /// An empty key with no curve
    pub fn empty() -> Self {
        Self::default()
    }

    /// Curve tag of this key
    pub fn curve(&self) -> CurveSlot {
        self.material.curve()
    }

    /// The supported curve, if any
    pub fn curve_kind(&self) -> Option<CurveKind> {
        self.material.curve().kind()
    }

    /// Where the point sits inside the backing store
    pub fn view(&self) -> KeyView {
        self.material.view()
    }

    /// True for an empty key
    pub fn is_empty(&self) -> bool {
        self.material.curve().is_empty()
    }

    /// Canonical point bytes, checked against the curve
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.material.canonical(KeyRole::Public, "public_key")
    }

    /// Independent copy with its own backing store
    ///
    /// # Errors
    ///
    /// `IncorrectKey` if this key's view is out of bounds.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self::from_material(self.material.try_clone()?))
    }

    /// Zero and release the point, leaving an empty key
    pub fn wipe(&mut self) {
        self.material.wipe();
    }

    /// Copy the canonical point into `out`, returning its length
    ///
    /// # Errors
    ///
    /// `IncorrectKey` if the curve is empty or unsupported, the view is
    /// corrupted, or `out` is shorter than the canonical length.
    pub fn serialize(&self, out: &mut [u8]) -> Result<usize> {
        let point = self.material.canonical(KeyRole::Public, "serialize_public")?;
        if out.len() < point.len() {
            return Err(Error::key(
                "serialize_public",
                format!("output holds {} bytes, need {}", out.len(), point.len()),
            ));
        }
        out[..point.len()].copy_from_slice(point);
        Ok(point.len())
    }

    /// Allocating form of [`PublicKey::serialize`]
    pub fn serialize_new(&self) -> Result<Vec<u8>> {
        Ok(self
            .material
            .canonical(KeyRole::Public, "serialize_public")?
            .to_vec())
    }

    /// Parse an uncompressed point using the default provider
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        Self::deserialize_with(bytes, &RustCryptoProvider)
    }

    /// Parse an uncompressed point, checking membership with `provider`
    ///
    /// The curve is inferred from the length (65, 97 or 133 bytes).
    ///
    /// # Errors
    ///
    /// `IncorrectKey` if the tag is not `0x04`, the length matches no
    /// curve, or the point is not on the curve.
    pub fn deserialize_with<P: CryptoProvider + ?Sized>(
        bytes: &[u8],
        provider: &P,
    ) -> Result<Self> {
        validate::key(
            bytes.first() == Some(&UNCOMPRESSED_POINT_TAG),
            "deserialize_public",
            "expected uncompressed point tag 0x04",
        )?;
        let curve = CurveKind::from_public_key_len(bytes.len()).ok_or_else(|| {
            Error::key(
                "deserialize_public",
                format!("no curve has {}-byte points", bytes.len()),
            )
        })?;
        validate::key(
            validate_point(bytes, curve, provider),
            "deserialize_public",
            "point is not on the curve",
        )?;

        trace!(curve = %curve, key = %hex::encode(bytes), "public key loaded");
        Ok(Self::from_material(KeyMaterial::copy_of(
            CurveSlot::Supported(curve),
            bytes,
        )))
    }

    /// Canonical point as lowercase hex
    pub fn to_hex(&self) -> Result<String> {
        Ok(hex::encode(
            self.material.canonical(KeyRole::Public, "public_to_hex")?,
        ))
    }

    /// Parse the hex form produced by [`PublicKey::to_hex`]
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::deserialize(&hex::decode(s)?)
    }
}

impl Wipe for PublicKey {
    fn wipe(&mut self) {
        PublicKey::wipe(self);
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.material.ct_equals(&other.material)
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({:?}, ", self.material.curve())?;
        match self.material.window() {
            Some(window) => write_hex(f, window)?,
            None => f.write_str("<corrupted>")?,
        }
        f.write_str(")")
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_key(&self.material, f)
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::deserialize(bytes)
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        self.serialize_new()
    }
}
