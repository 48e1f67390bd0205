//! Constant-time validation of raw scalars and points
//!
//! Both checks reject a wrong length up front. Length is public, so that
//! branch leaks nothing about the secret content.

use peerkey_internal::{ct_is_nonzero, ct_less_than};
use peerkey_params::traditional::ecdsa::{MAX_SCALAR_SIZE, UNCOMPRESSED_POINT_TAG};
use subtle::Choice;

use crate::curve::CurveKind;
use crate::provider::CryptoProvider;

/// True iff `bytes` is a scalar in `[1, n)` for `curve`
///
/// `bytes` is read as a big-endian integer of exactly the order's length.
/// The zero check folds every byte before deciding and the range check
/// walks every byte with bitwise state only, so the running time does not
/// depend on the value.
pub fn validate_scalar(bytes: &[u8], curve: CurveKind) -> bool {
    let order = curve.order();
    if bytes.len() != order.len() {
        return false;
    }

    let valid: Choice = ct_is_nonzero(bytes) & ct_less_than(bytes, order);
    valid.into()
}

/// True iff `bytes` is an uncompressed point on `curve`
///
/// Membership is probed by asking the provider to multiply the point by 1,
/// which only succeeds for points of the group.
pub fn validate_point<P: CryptoProvider + ?Sized>(
    bytes: &[u8],
    curve: CurveKind,
    provider: &P,
) -> bool {
    if bytes.len() != curve.point_size() || bytes[0] != UNCOMPRESSED_POINT_TAG {
        return false;
    }

    let mut one = [0u8; MAX_SCALAR_SIZE];
    one[MAX_SCALAR_SIZE - 1] = 1;
    let one = &one[MAX_SCALAR_SIZE - curve.scalar_size()..];

    let mut probe = bytes.to_vec();
    provider.multiply_point(curve, &mut probe, one).is_ok()
}
