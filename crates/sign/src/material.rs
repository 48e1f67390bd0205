//! Owned key buffers and the views that locate key bytes inside them
//!
//! A provider may leave a key's canonical bytes anywhere inside the scratch
//! buffer it filled. Rather than remember an address, every key keeps the
//! whole buffer as its backing store together with a [`KeyView`]: an
//! offset and length relative to that store. The view survives moves and
//! clones unchanged and is bounds-checked before every access.

use core::ops::Range;

use peerkey_api::error::validate;
use peerkey_api::{Error, Result};
use peerkey_internal::ct_eq;
use zeroize::Zeroize;

use crate::curve::CurveSlot;

/// Location of a key's live bytes inside its backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyView {
    offset: usize,
    len: usize,
}

impl KeyView {
    /// The view of an empty key
    pub const EMPTY: KeyView = KeyView { offset: 0, len: 0 };

    /// View starting at `offset` spanning `len` bytes, unchecked
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Offset of the first live byte
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of live bytes
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length view
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte range inside a store of `backing_len` bytes, if it fits
    pub fn range_in(&self, backing_len: usize) -> Option<Range<usize>> {
        let end = self.offset.checked_add(self.len)?;
        (end <= backing_len).then_some(self.offset..end)
    }
}

/// Translate a provider-reported `(offset, len)` into a checked view
///
/// # Errors
///
/// `IncorrectKey` if `offset + len` overflows or runs past `backing`.
pub fn compute_view(backing: &[u8], offset: usize, len: usize) -> Result<KeyView> {
    let view = KeyView::new(offset, len);
    match view.range_in(backing.len()) {
        Some(_) => Ok(view),
        None => Err(Error::key(
            "compute_view",
            format!(
                "view {}+{} exceeds backing store of {} bytes",
                offset,
                len,
                backing.len()
            ),
        )),
    }
}

/// Which canonical length a key's view must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyRole {
    Private,
    Public,
}

/// Backing store, view and curve tag shared by private and public keys
#[derive(Default)]
pub(crate) struct KeyMaterial {
    curve: CurveSlot,
    backing: Vec<u8>,
    view: KeyView,
}

impl KeyMaterial {
    /// Assemble material without checking the view
    ///
    /// Accessors re-check the view, so a bad one shows up as a corrupted
    /// key rather than an out-of-bounds read.
    pub(crate) fn from_parts(curve: CurveSlot, backing: Vec<u8>, view: KeyView) -> Self {
        Self {
            curve,
            backing,
            view,
        }
    }

    /// Take over a provider scratch buffer, locating the key inside it
    pub(crate) fn from_provider(
        curve: CurveSlot,
        backing: Vec<u8>,
        offset: usize,
        len: usize,
    ) -> Result<Self> {
        let view = compute_view(&backing, offset, len)?;
        Ok(Self::from_parts(curve, backing, view))
    }

    /// Fresh copy of `bytes` with the view spanning all of it
    pub(crate) fn copy_of(curve: CurveSlot, bytes: &[u8]) -> Self {
        Self::from_parts(curve, bytes.to_vec(), KeyView::new(0, bytes.len()))
    }

    pub(crate) fn curve(&self) -> CurveSlot {
        self.curve
    }

    pub(crate) fn view(&self) -> KeyView {
        self.view
    }

    /// The live bytes, or `None` when the view is out of bounds
    pub(crate) fn window(&self) -> Option<&[u8]> {
        self.view.range_in(self.backing.len()).map(|r| &self.backing[r])
    }

    /// The canonical-length window for a supported curve
    ///
    /// Fails on an empty or unsupported curve, a corrupted view, or a view
    /// whose length is not the curve's canonical length for `role`.
    pub(crate) fn canonical(&self, role: KeyRole, context: &'static str) -> Result<&[u8]> {
        let curve = self.curve.require(context)?;
        let window = self
            .window()
            .ok_or_else(|| Error::key(context, "key view is out of bounds"))?;

        let expected = match role {
            KeyRole::Private => curve.scalar_size(),
            KeyRole::Public => curve.point_size(),
        };
        validate::key_length(context, window.len(), expected)?;
        Ok(window)
    }

    /// Independent copy with its own backing store
    ///
    /// A corrupted source is refused rather than copied.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        let backing = self.backing.clone();
        let view = compute_view(&backing, self.view.offset, self.view.len)?;
        Ok(Self::from_parts(self.curve, backing, view))
    }

    /// Zero the backing store, truncate it, and reset curve and view
    pub(crate) fn wipe(&mut self) {
        self.backing.zeroize();
        self.view = KeyView::EMPTY;
        self.curve = CurveSlot::Empty;
    }

    /// Constant-time equality of curve and live bytes
    ///
    /// A corrupted view on either side compares unequal.
    pub(crate) fn ct_equals(&self, other: &Self) -> bool {
        if self.curve != other.curve || self.view.len != other.view.len {
            return false;
        }
        match (self.window(), other.window()) {
            (Some(a), Some(b)) => ct_eq(a, b),
            _ => false,
        }
    }
}
