//! Key material and ECDSA across all supported curves

use peerkey_api::Error;
use peerkey_sign::{validate_scalar, CurveKind, KeyPair, PrivateKey, PublicKey, Signature};
use peerkey_tests::{ecdsa, init_test_logging, key_pairs, messages};
use proptest::prelude::*;

#[test]
fn test_private_key_round_trip() {
    init_test_logging();
    for curve in CurveKind::ALL {
        let key = ecdsa().generate_private_key(curve).unwrap();
        let bytes = key.serialize_new().unwrap();
        assert_eq!(bytes.len(), curve.scalar_size());

        let loaded = PrivateKey::deserialize(&bytes).unwrap();
        assert_eq!(loaded.curve_kind(), Some(curve));
        assert_eq!(loaded, key);
    }
}

#[test]
fn test_public_key_round_trip() {
    init_test_logging();
    for pair in key_pairs() {
        let bytes = pair.public.serialize_new().unwrap();
        assert_eq!(bytes[0], 0x04);
        assert_eq!(PublicKey::deserialize(&bytes).unwrap(), pair.public);
        assert_eq!(PublicKey::from_hex(&pair.public.to_hex().unwrap()).unwrap(), pair.public);
    }
}

#[test]
fn test_sign_verify_round_trip() {
    init_test_logging();
    let ecdsa = ecdsa();
    for pair in key_pairs() {
        let curve = pair.curve_kind().unwrap();
        for msg in messages(3, 5) {
            let sig = ecdsa.sign(&pair.private, &msg).unwrap();
            assert_eq!(sig.serialize_new().unwrap().len(), curve.signature_size());
            assert!(ecdsa.verify(&sig, &msg, &pair.public), "{}", curve);

            let reloaded = Signature::deserialize(sig.as_bytes()).unwrap();
            assert!(ecdsa.verify(&reloaded, &msg, &pair.public), "{}", curve);
        }
    }
}

#[test]
fn test_derived_public_key_matches_pair() {
    let ecdsa = ecdsa();
    for pair in key_pairs() {
        let derived = ecdsa.derive_public_key(&pair.private).unwrap();
        assert_eq!(derived, pair.public);
    }
}

#[test]
fn test_verify_never_raises() {
    init_test_logging();
    let ecdsa = ecdsa();
    let pairs = key_pairs();
    let sig = ecdsa.sign(&pairs[0].private, b"payload").unwrap();

    // Empty message
    assert!(!ecdsa.verify(&sig, b"", &pairs[0].public));
    // Signature and key on different curves
    assert!(!ecdsa.verify(&sig, b"payload", &pairs[1].public));
    assert!(!ecdsa.verify(&sig, b"payload", &pairs[2].public));
}

#[test]
fn test_scalar_validation_rejects_zero_and_order() {
    for curve in CurveKind::ALL {
        assert!(!validate_scalar(&vec![0u8; curve.scalar_size()], curve));
        assert!(!validate_scalar(curve.order(), curve));
        assert!(!validate_scalar(&vec![0xFFu8; curve.scalar_size()], curve));
        assert!(PrivateKey::deserialize(curve.order()).is_err());
    }
}

#[test]
fn test_libp2p_p256_example() {
    init_test_logging();
    let ecdsa = ecdsa();
    let pair = KeyPair::generate(CurveKind::P256).unwrap();

    let private = pair.private.serialize_new().unwrap();
    let public = pair.public.serialize_new().unwrap();
    assert_eq!(private.len(), 32);
    assert_eq!(public.len(), 65);

    let sig = ecdsa.sign(&pair.private, b"libp2p").unwrap();
    assert!(ecdsa.verify(&sig, b"libp2p", &pair.public));

    let truncated = PublicKey::deserialize(&public[..64]).unwrap_err();
    assert!(matches!(truncated, Error::IncorrectKey { .. }));
}

#[test]
fn test_signature_from_other_curve_length_rejected() {
    assert!(matches!(
        Signature::deserialize(&[1u8; 65]),
        Err(Error::IncorrectSignature { .. })
    ));
}

#[test]
fn test_scoped_key_is_wiped_after_signing() {
    let ecdsa = ecdsa();
    let pair = KeyPair::generate(CurveKind::P384).unwrap();
    let KeyPair { private, public } = pair;

    let sig = private.scoped(|key| ecdsa.sign(key, b"scoped")).unwrap();
    assert!(ecdsa.verify(&sig, b"scoped", &public));
}

#[test]
fn test_ecdh_agreement_over_all_curves() {
    let ecdsa = ecdsa();
    for curve in CurveKind::ALL {
        let a = KeyPair::generate(curve).unwrap();
        let b = KeyPair::generate(curve).unwrap();
        let shared_a = ecdsa.scalar_multiply(&b.public, &a.private).unwrap();
        let shared_b = ecdsa.scalar_multiply(&a.public, &b.private).unwrap();
        assert_eq!(shared_a, shared_b);
        assert_eq!(shared_a.serialize_new().unwrap().len(), curve.point_size());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bit_flip_breaks_signature(curve_index in 0usize..3,
                                      bit in any::<prop::sample::Index>(),
                                      msg in prop::collection::vec(any::<u8>(), 1..128)) {
        let ecdsa = ecdsa();
        let curve = CurveKind::ALL[curve_index];
        let pair = ecdsa.generate_key_pair(curve).unwrap();
        let sig = ecdsa.sign(&pair.private, &msg).unwrap();

        let mut bytes = sig.serialize_new().unwrap();
        let bit = bit.index(bytes.len() * 8);
        bytes[bit / 8] ^= 1 << (bit % 8);

        let flipped = Signature::deserialize(&bytes).unwrap();
        prop_assert!(!ecdsa.verify(&flipped, &msg, &pair.public));
    }

    #[test]
    fn prop_message_change_breaks_signature(msg in prop::collection::vec(any::<u8>(), 1..64),
                                            index in any::<prop::sample::Index>()) {
        let ecdsa = ecdsa();
        let pair = ecdsa.generate_key_pair(CurveKind::P256).unwrap();
        let sig = ecdsa.sign(&pair.private, &msg).unwrap();

        let mut tampered = msg.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= 0x01;
        prop_assert!(!ecdsa.verify(&sig, &tampered, &pair.public));
    }
}
