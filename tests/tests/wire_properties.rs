//! Wire buffer framing and keys on the wire

use bytes::Bytes;
use peerkey_api::Error;
use peerkey_sign::{CurveKind, PrivateKey, PublicKey, Signature, WireDecode, WireEncode};
use peerkey_tests::{ecdsa, init_test_logging, key_pairs};
use peerkey_wire::{varint_len, WireBuffer};
use proptest::prelude::*;

#[test]
fn test_varint_examples() {
    for value in [0u64, 1, 127, 128, (1 << 62) - 1] {
        let mut buf = WireBuffer::new();
        let written = buf.write_varint(value);
        buf.rewind();

        assert_eq!(buf.peek_varint().unwrap(), (value, written));
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.read_varint().unwrap(), (value, written));
        assert_eq!(buf.position(), written);
    }
}

#[test]
fn test_length_prefixed_examples() {
    let kilobyte = vec![0xC3u8; 1000];
    for payload in [Vec::new(), vec![0x01], kilobyte] {
        let mut buf = WireBuffer::new();
        buf.write_length_prefixed(&payload);
        buf.rewind();
        let (read, _) = buf.read_length_prefixed().unwrap();
        assert_eq!(read, payload.as_slice());
    }
}

#[test]
fn test_prefix_without_payload_leaves_cursor() {
    let mut buf = WireBuffer::new();
    buf.write_varint(32);
    buf.rewind();
    assert!(matches!(
        buf.read_length_prefixed(),
        Err(Error::BufferUnderrun { .. })
    ));
    assert_eq!(buf.position(), 0);
}

#[test]
fn test_received_frame_of_keys() {
    init_test_logging();
    let ecdsa = ecdsa();
    let mut outgoing = WireBuffer::new();
    let mut expected = Vec::new();

    for pair in key_pairs() {
        let msg = format!("hello from {}", pair.curve_kind().unwrap());
        let sig = ecdsa.sign(&pair.private, msg.as_bytes()).unwrap();
        pair.public.encode_to(&mut outgoing).unwrap();
        sig.encode_to(&mut outgoing).unwrap();
        outgoing.write_length_prefixed(msg.as_bytes());
        expected.push(pair.public);
    }

    // The receiver sees a shared handle, so the buffer copies it
    let frame: Bytes = outgoing.into_bytes();
    let mut incoming = WireBuffer::create_from(frame.clone(), 0).unwrap();

    for public in &expected {
        let key = PublicKey::decode_from(&mut incoming).unwrap();
        let sig = Signature::decode_from(&mut incoming).unwrap();
        let (msg, _) = incoming.read_length_prefixed().unwrap();
        assert_eq!(&key, public);
        assert!(ecdsa.verify(&sig, msg, &key));
    }
    assert!(incoming.is_empty());
    assert_eq!(incoming.len(), frame.len());
}

#[test]
fn test_private_key_field() {
    let key = ecdsa().generate_private_key(CurveKind::P521).unwrap();
    let mut buf = key.to_wire().unwrap();
    assert_eq!(buf.len(), 2 + 66);
    buf.rewind();
    assert_eq!(PrivateKey::decode_from(&mut buf).unwrap(), key);
}

#[test]
fn test_truncated_public_key_field() {
    let pair = ecdsa().generate_key_pair(CurveKind::P256).unwrap();
    let bytes = pair.public.serialize_new().unwrap();

    let mut buf = WireBuffer::new();
    buf.write_length_prefixed(&bytes[..64]);
    buf.rewind();
    assert!(PublicKey::decode_from(&mut buf).unwrap_err().is_incorrect_key());
    assert_eq!(buf.position(), 0);
}

proptest! {
    #[test]
    fn prop_varint_round_trip(value in 0u64..(1u64 << 63)) {
        let mut buf = WireBuffer::new();
        let written = buf.write_varint(value);
        prop_assert_eq!(written, varint_len(value));

        buf.rewind();
        prop_assert_eq!(buf.read_varint().unwrap(), (value, written));
        prop_assert!(buf.is_empty());
    }

    #[test]
    fn prop_varint_masks_top_bit(value in any::<u64>()) {
        let mut buf = WireBuffer::new();
        buf.write_varint(value);
        buf.rewind();
        prop_assert_eq!(buf.read_varint().unwrap().0, value & ((1u64 << 63) - 1));
    }

    #[test]
    fn prop_fields_read_back_in_order(
        fields in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..300), 0..8)
    ) {
        let mut buf = WireBuffer::new();
        for field in &fields {
            buf.write_length_prefixed(field);
        }

        buf.rewind();
        for field in &fields {
            let (read, consumed) = buf.read_length_prefixed().unwrap();
            prop_assert_eq!(read, field.as_slice());
            prop_assert_eq!(consumed, varint_len(field.len() as u64) + field.len());
        }
        prop_assert!(buf.is_empty());
    }

    #[test]
    fn prop_truncated_field_never_moves_cursor(
        payload in prop::collection::vec(any::<u8>(), 1..300),
        cut in any::<prop::sample::Index>()
    ) {
        let mut full = WireBuffer::new();
        full.write_length_prefixed(&payload);
        let bytes = full.into_bytes();

        // Drop at least one payload byte
        let keep = cut.index(bytes.len() - 1);
        let mut buf = WireBuffer::from_slice(&bytes[..keep]);
        prop_assert!(buf.read_length_prefixed().is_err());
        prop_assert_eq!(buf.position(), 0);
    }

    #[test]
    fn prop_peek_matches_read(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut buf = WireBuffer::from_slice(&data);
        let peeked = buf.peek_varint();
        let read = buf.read_varint();
        match (peeked, read) {
            (Ok(peeked), Ok(read)) => {
                prop_assert_eq!(peeked, read);
                prop_assert_eq!(buf.position(), read.1);
            }
            (Err(peeked), Err(read)) => {
                prop_assert_eq!(peeked.with_context("read_varint"), read);
                prop_assert_eq!(buf.position(), 0);
            }
            (peeked, read) => {
                prop_assert!(false, "peek {:?} disagrees with read {:?}", peeked, read)
            }
        }
    }
}
