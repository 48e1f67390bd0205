use core::fmt;

use peerkey_api::error::validate;
use peerkey_api::{Error, Result, SerializeSecret};
use peerkey_common::{with_wipe, Wipe, WipeGuard};
use tracing::debug;
use zeroize::Zeroizing;

use super::render_key;
use crate::curve::{CurveKind, CurveSlot};
use crate::material::{KeyMaterial, KeyRole, KeyView};
use crate::validate::validate_scalar;

/// ECDSA private scalar
///
/// Equality is constant time over the canonical bytes. `Debug` never
/// prints them; `Display` renders them as hex and should only reach
/// trusted sinks.
///
/// Call [`PrivateKey::wipe`] when the key's lifetime ends, or run the work
/// inside [`PrivateKey::scoped`] to have it wiped on every exit path.
/// Dropping an unwiped key wipes it as well.
#[derive(Default)]
pub struct PrivateKey {
    material: KeyMaterial,
}

impl PrivateKey {
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

    /// Where the scalar sits inside the backing store
    pub fn view(&self) -> KeyView {
        self.material.view()
    }

    /// True for an empty or wiped key
    pub fn is_empty(&self) -> bool {
        self.material.curve().is_empty()
    }

    /// Canonical scalar bytes, checked against the curve
    pub(crate) fn scalar(&self, context: &'static str) -> Result<&[u8]> {
        self.material.canonical(KeyRole::Private, context)
    }

    /// Independent copy with its own backing store
    ///
    /// # Errors
    ///
    /// `IncorrectKey` if this key's view is out of bounds.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self::from_material(self.material.try_clone()?))
    }

    /// Zero and release the scalar, leaving an empty key
    pub fn wipe(&mut self) {
        self.material.wipe();
    }

    /// Run `f` with this key, wiping it afterwards however `f` exits
    ///
    /// ```
    /// use peerkey_sign::{CurveKind, Ecdsa, PrivateKey};
    ///
    /// let ecdsa: Ecdsa = Ecdsa::default();
    /// let key = ecdsa.generate_private_key(CurveKind::P256)?;
    /// let sig = key.scoped(|key| ecdsa.sign(key, b"hello"))?;
    /// assert_eq!(sig.as_bytes().len(), 64);
    /// # Ok::<(), peerkey_api::Error>(())
    /// ```
    pub fn scoped<R, F>(self, f: F) -> R
    where
        F: FnOnce(&mut PrivateKey) -> R,
    {
        with_wipe(self, f)
    }

    /// Move the key into a guard that wipes it when dropped
    pub fn into_guard(self) -> WipeGuard<Self> {
        WipeGuard::new(self)
    }

    /// Copy the canonical scalar into `out`, returning its length
    ///
    /// # Errors
    ///
    /// `IncorrectKey` if the curve is empty or unsupported, the view is
    /// corrupted, or `out` is shorter than the canonical length.
    pub fn serialize(&self, out: &mut [u8]) -> Result<usize> {
        let scalar = self.scalar("serialize_private")?;
        if out.len() < scalar.len() {
            return Err(Error::key(
                "serialize_private",
                format!("output holds {} bytes, need {}", out.len(), scalar.len()),
            ));
        }
        out[..scalar.len()].copy_from_slice(scalar);
        Ok(scalar.len())
    }

    /// Allocating form of [`PrivateKey::serialize`]
    pub fn serialize_new(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(self.scalar("serialize_private")?.to_vec()))
    }

    /// Parse a raw big-endian scalar
    ///
    /// The curve is inferred from the length (32, 48 or 66 bytes) and the
    /// value must lie in `[1, n)`.
    ///
    /// # Errors
    ///
    /// `IncorrectKey` for any other length or an out-of-range scalar.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let curve = CurveKind::from_private_key_len(bytes.len()).ok_or_else(|| {
            Error::key(
                "deserialize_private",
                format!("no curve has {}-byte scalars", bytes.len()),
            )
        })?;
        validate::key(
            validate_scalar(bytes, curve),
            "deserialize_private",
            "scalar is zero or not below the group order",
        )?;

        debug!(curve = %curve, "private key loaded");
        Ok(Self::from_material(KeyMaterial::copy_of(
            CurveSlot::Supported(curve),
            bytes,
        )))
    }

    /// Canonical scalar as lowercase hex
    pub fn to_hex(&self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(hex::encode(self.scalar("private_to_hex")?)))
    }

    /// Parse the hex form produced by [`PrivateKey::to_hex`]
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(s)?);
        Self::deserialize(&bytes)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.material.wipe();
    }
}

impl Wipe for PrivateKey {
    fn wipe(&mut self) {
        PrivateKey::wipe(self);
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.material.ct_equals(&other.material)
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.material.curve())
            .field("view", &self.material.view())
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_key(&self.material, f)
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::deserialize(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Result<Zeroizing<Vec<u8>>> {
        self.serialize_new()
    }
}
