//! Supported curves and their identifier mappings

use core::fmt;
use core::str::FromStr;

use peerkey_api::{Error, Result};
use peerkey_params::traditional::ecdsa::{CurveParams, NIST_P256, NIST_P384, NIST_P521};

/// One of the three supported NIST prime curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveKind {
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1)
    P521,
}

impl CurveKind {
    /// Every supported curve, smallest first
    pub const ALL: [CurveKind; 3] = [CurveKind::P256, CurveKind::P384, CurveKind::P521];

    /// Constant parameters of this curve
    pub const fn params(self) -> &'static CurveParams {
        match self {
            CurveKind::P256 => &NIST_P256,
            CurveKind::P384 => &NIST_P384,
            CurveKind::P521 => &NIST_P521,
        }
    }

    /// Short NIST name, e.g. `"P-256"`
    pub const fn name(self) -> &'static str {
        self.params().name
    }

    /// Dotted object identifier of the named curve
    pub const fn oid(self) -> &'static str {
        self.params().oid
    }

    /// Canonical private scalar length
    pub const fn scalar_size(self) -> usize {
        self.params().scalar_size
    }

    /// Canonical uncompressed public point length
    pub const fn point_size(self) -> usize {
        self.params().point_size
    }

    /// Canonical fixed-width signature length
    pub const fn signature_size(self) -> usize {
        self.params().signature_size
    }

    /// Group order, big-endian, `scalar_size()` bytes
    pub const fn order(self) -> &'static [u8] {
        self.params().order
    }

    /// Infer the curve from a raw private scalar length
    pub fn from_private_key_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.scalar_size() == len)
    }

    /// Infer the curve from an uncompressed public point length
    pub fn from_public_key_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.point_size() == len)
    }

    /// Infer the curve from a fixed-width signature length
    pub fn from_signature_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.signature_size() == len)
    }

    /// Stable one-byte identifier used in protocol headers
    pub const fn to_wire_id(self) -> u8 {
        match self {
            CurveKind::P256 => 1,
            CurveKind::P384 => 2,
            CurveKind::P521 => 3,
        }
    }

    /// Inverse of [`CurveKind::to_wire_id`]
    pub const fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(CurveKind::P256),
            2 => Some(CurveKind::P384),
            3 => Some(CurveKind::P521),
            _ => None,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    /// Accepts the NIST name (`P-256`), its compact form (`p256`) or the
    /// SEC name (`secp256r1`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| {
                let params = c.params();
                s.eq_ignore_ascii_case(params.name)
                    || s.eq_ignore_ascii_case(params.sec_name)
                    || s.eq_ignore_ascii_case(&params.name.replace('-', ""))
            })
            .ok_or_else(|| Error::key("curve name", format!("unsupported curve {:?}", s)))
    }
}

/// Curve tag carried by every key and signature
///
/// `Empty` marks a default-constructed or wiped object. `Unsupported`
/// keeps the raw wire id of a curve this build cannot handle so it can be
/// reported rather than silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveSlot {
    /// No curve assigned
    #[default]
    Empty,
    /// A supported curve
    Supported(CurveKind),
    /// A curve identifier outside the supported set
    Unsupported(u8),
}

impl CurveSlot {
    /// Map a wire id, keeping unknown ids as `Unsupported`
    pub fn from_wire_id(id: u8) -> Self {
        match CurveKind::from_wire_id(id) {
            Some(curve) => CurveSlot::Supported(curve),
            None => CurveSlot::Unsupported(id),
        }
    }

    /// The supported curve, if any
    pub fn kind(self) -> Option<CurveKind> {
        match self {
            CurveSlot::Supported(curve) => Some(curve),
            _ => None,
        }
    }

    /// The supported curve, or `IncorrectKey` naming `context`
    pub fn require(self, context: &'static str) -> Result<CurveKind> {
        match self {
            CurveSlot::Supported(curve) => Ok(curve),
            CurveSlot::Empty => Err(Error::key(context, "key is empty")),
            CurveSlot::Unsupported(id) => {
                Err(Error::key(context, format!("unsupported curve id {}", id)))
            }
        }
    }

    /// True for `Empty`
    pub fn is_empty(self) -> bool {
        matches!(self, CurveSlot::Empty)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            CurveSlot::Empty => "empty",
            CurveSlot::Supported(curve) => curve.name(),
            CurveSlot::Unsupported(_) => "unsupported",
        }
    }
}

impl From<CurveKind> for CurveSlot {
    fn from(curve: CurveKind) -> Self {
        CurveSlot::Supported(curve)
    }
}
