//! Constant-time helpers, wipe guards and curve constants

use peerkey_common::{with_wipe, SecretVec, Wipe, WipeGuard};
use peerkey_internal::{ct_eq, ct_is_nonzero, ct_less_than};
use peerkey_params::traditional::ecdsa::{
    MAX_POINT_SIZE, MAX_SCALAR_SIZE, MAX_SIGNATURE_SIZE, NIST_P256, NIST_P384, NIST_P521,
};
use peerkey_sign::{CurveKind, PrivateKey};
use peerkey_tests::ecdsa;

/// Private scalar from RFC 6979 Appendix A.2.5 (P-256)
const RFC6979_P256_KEY: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";

#[test]
fn test_curve_constants_agree() {
    assert_eq!(CurveKind::P256.params(), &NIST_P256);
    assert_eq!(CurveKind::P384.params(), &NIST_P384);
    assert_eq!(CurveKind::P521.params(), &NIST_P521);

    let max = |f: fn(CurveKind) -> usize| CurveKind::ALL.into_iter().map(f).max().unwrap();
    assert_eq!(max(CurveKind::scalar_size), MAX_SCALAR_SIZE);
    assert_eq!(max(CurveKind::point_size), MAX_POINT_SIZE);
    assert_eq!(max(CurveKind::signature_size), MAX_SIGNATURE_SIZE);
}

#[test]
fn test_ct_helpers_on_orders() {
    for curve in CurveKind::ALL {
        let order = curve.order();
        assert!(bool::from(ct_is_nonzero(order)));
        assert!(!bool::from(ct_less_than(order, order)));
        assert!(ct_eq(order, order));
        assert!(!ct_eq(order, &order[1..]));
    }
}

#[test]
fn test_known_key_from_hex() {
    let key = PrivateKey::from_hex(RFC6979_P256_KEY).unwrap();
    assert_eq!(key.curve_kind(), Some(CurveKind::P256));

    let public = ecdsa().derive_public_key(&key).unwrap();
    // Ux from the same appendix
    assert_eq!(
        hex::encode(&public.as_bytes().unwrap()[1..33]),
        "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"
    );
}

#[test]
fn test_guarded_key_is_wiped() {
    let mut guard = WipeGuard::new(PrivateKey::from_hex(RFC6979_P256_KEY).unwrap());
    assert!(ecdsa().sign(&guard, b"guarded").is_ok());
    guard.wipe();
    assert!(guard.is_empty());
    assert_eq!(guard.to_string(), "Empty key");
}

#[test]
fn test_with_wipe_returns_result() {
    let key = PrivateKey::from_hex(RFC6979_P256_KEY).unwrap();
    let hex = with_wipe(key, |key| key.to_hex().unwrap().to_string());
    assert_eq!(hex, RFC6979_P256_KEY);
}

#[test]
fn test_secret_vec_scratch() {
    let mut scratch = SecretVec::zeroed(MAX_SCALAR_SIZE);
    scratch.as_mut_slice()[MAX_SCALAR_SIZE - 1] = 1;
    assert!(bool::from(ct_is_nonzero(scratch.as_slice())));

    let mut bytes = scratch.as_slice().to_vec();
    bytes.wipe();
    assert!(bytes.is_empty());
}
