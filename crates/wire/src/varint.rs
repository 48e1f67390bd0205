//! Little-endian base-128 varint codec
//!
//! Each byte carries 7 data bits, least significant group first, with the
//! high bit set on every byte except the last. Only 63-bit values are part
//! of the protocol domain: the encoder masks off bit 63 and the decoder
//! rejects anything wider.

use bytes::BufMut;
use peerkey_api::{Error, Result};
use peerkey_params::utils::wire::{
    VARINT_CONTINUATION, VARINT_DATA_BITS, VARINT_DATA_MASK, VARINT_MAX_LEN, VARINT_VALUE_MASK,
};

/// Number of bytes `encode_varint` produces for `value`
pub fn varint_len(value: u64) -> usize {
    let value = value & VARINT_VALUE_MASK;
    let bits = u64::BITS - value.leading_zeros();
    // Zero still takes one byte
    bits.max(1).div_ceil(VARINT_DATA_BITS) as usize
}

/// Append the varint encoding of `value` to `dst`, returning its length
///
/// Bit 63 of `value` is ignored.
pub fn encode_varint(value: u64, dst: &mut impl BufMut) -> usize {
    let mut value = value & VARINT_VALUE_MASK;
    let mut written = 0;

    loop {
        let group = (value as u8) & VARINT_DATA_MASK;
        value >>= VARINT_DATA_BITS;
        written += 1;
        if value == 0 {
            dst.put_u8(group);
            return written;
        }
        dst.put_u8(group | VARINT_CONTINUATION);
    }
}

/// Decode a varint from the front of `src`
///
/// Returns the value and the number of bytes it occupied. Nine bytes hold
/// exactly 63 data bits, so a continuation flag on the ninth byte is the
/// only way to exceed the value domain. Encodings must be minimal: a
/// multi-byte varint may not end in a zero group.
///
/// # Errors
///
/// - [`Error::BufferUnderrun`] when `src` ends before the final byte
/// - [`Error::InvalidVarint`] when the encoding runs past nine bytes or
///   is not minimal
pub fn decode_varint(src: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for (index, &byte) in src.iter().enumerate() {
        value |= u64::from(byte & VARINT_DATA_MASK) << shift;

        if byte & VARINT_CONTINUATION == 0 {
            // A trailing zero group means a shorter encoding exists
            if byte == 0 && index > 0 {
                return Err(Error::InvalidVarint {
                    context: "decode_varint",
                });
            }
            return Ok((value, index + 1));
        }
        if index + 1 == VARINT_MAX_LEN {
            return Err(Error::InvalidVarint {
                context: "decode_varint",
            });
        }
        shift += VARINT_DATA_BITS;
    }

    Err(Error::BufferUnderrun {
        context: "decode_varint",
        needed: src.len() + 1,
        remaining: src.len(),
    })
}
