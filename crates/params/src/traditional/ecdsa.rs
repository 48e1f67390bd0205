//! Constants for ECDSA over the NIST prime curves

/// Parameters of one supported curve
///
/// Sizes are the canonical wire lengths: big-endian scalar, SEC1
/// uncompressed point (`0x04 || X || Y`) and fixed-width `r || s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Short NIST name
    pub name: &'static str,
    /// SEC name
    pub sec_name: &'static str,
    /// Object identifier of the named curve
    pub oid: &'static str,
    /// Field size in bits
    pub field_bits: usize,
    /// Group order `n`, big-endian, exactly `scalar_size` bytes
    pub order: &'static [u8],
    /// Private scalar length in bytes
    pub scalar_size: usize,
    /// Uncompressed public point length in bytes
    pub point_size: usize,
    /// Fixed-width signature length in bytes
    pub signature_size: usize,
}

/// Tag byte of an uncompressed SEC1 point
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Size of a P-256 scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;
/// Size of an uncompressed P-256 point in bytes
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P256_SCALAR_SIZE;
/// Size of a fixed-width P-256 signature in bytes
pub const P256_SIGNATURE_SIZE: usize = 2 * P256_SCALAR_SIZE;

/// Size of a P-384 scalar in bytes
pub const P384_SCALAR_SIZE: usize = 48;
/// Size of an uncompressed P-384 point in bytes
pub const P384_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P384_SCALAR_SIZE;
/// Size of a fixed-width P-384 signature in bytes
pub const P384_SIGNATURE_SIZE: usize = 2 * P384_SCALAR_SIZE;

/// Size of a P-521 scalar in bytes
pub const P521_SCALAR_SIZE: usize = 66;
/// Size of an uncompressed P-521 point in bytes
pub const P521_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P521_SCALAR_SIZE;
/// Size of a fixed-width P-521 signature in bytes
pub const P521_SIGNATURE_SIZE: usize = 2 * P521_SCALAR_SIZE;

/// Largest scalar over all supported curves
pub const MAX_SCALAR_SIZE: usize = P521_SCALAR_SIZE;
/// Largest uncompressed point over all supported curves
pub const MAX_POINT_SIZE: usize = P521_POINT_UNCOMPRESSED_SIZE;
/// Largest signature over all supported curves
pub const MAX_SIGNATURE_SIZE: usize = P521_SIGNATURE_SIZE;

/// P-256 curve order n in big-endian format
const P256_ORDER: [u8; P256_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63, 0x25, 0x51,
];

/// P-384 curve order n in big-endian format
const P384_ORDER: [u8; P384_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC7, 0x63, 0x4D, 0x81, 0xF4, 0x37, 0x2D, 0xDF,
    0x58, 0x1A, 0x0D, 0xB2, 0x48, 0xB0, 0xA7, 0x7A, 0xEC, 0xEC, 0x19, 0x6A, 0xCC, 0xC5, 0x29, 0x73,
];

/// P-521 curve order n in big-endian format
const P521_ORDER: [u8; P521_SCALAR_SIZE] = [
    0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFA, 0x51, 0x86, 0x87, 0x83, 0xBF, 0x2F, 0x96, 0x6B, 0x7F, 0xCC, 0x01, 0x48, 0xF7, 0x09,
    0xA5, 0xD0, 0x3B, 0xB5, 0xC9, 0xB8, 0x89, 0x9C, 0x47, 0xAE, 0xBB, 0x6F, 0xB7, 0x1E, 0x91, 0x38,
    0x64, 0x09,
];

/// NIST P-256 (secp256r1)
pub const NIST_P256: CurveParams = CurveParams {
    name: "P-256",
    sec_name: "secp256r1",
    oid: "1.2.840.10045.3.1.7",
    field_bits: 256,
    order: &P256_ORDER,
    scalar_size: P256_SCALAR_SIZE,
    point_size: P256_POINT_UNCOMPRESSED_SIZE,
    signature_size: P256_SIGNATURE_SIZE,
};

/// NIST P-384 (secp384r1)
pub const NIST_P384: CurveParams = CurveParams {
    name: "P-384",
    sec_name: "secp384r1",
    oid: "1.3.132.0.34",
    field_bits: 384,
    order: &P384_ORDER,
    scalar_size: P384_SCALAR_SIZE,
    point_size: P384_POINT_UNCOMPRESSED_SIZE,
    signature_size: P384_SIGNATURE_SIZE,
};

/// NIST P-521 (secp521r1)
pub const NIST_P521: CurveParams = CurveParams {
    name: "P-521",
    sec_name: "secp521r1",
    oid: "1.3.132.0.35",
    field_bits: 521,
    order: &P521_ORDER,
    scalar_size: P521_SCALAR_SIZE,
    point_size: P521_POINT_UNCOMPRESSED_SIZE,
    signature_size: P521_SIGNATURE_SIZE,
};
