//! Keys and signatures as length-prefixed wire fields

use peerkey_api::{Result, ResultExt};
use peerkey_wire::WireBuffer;

use crate::keys::{PrivateKey, PublicKey, Signature};

/// Types that frame themselves into a [`WireBuffer`]
pub trait WireEncode {
    /// Append `self` as a length-prefixed field, returning bytes written
    fn encode_to(&self, buf: &mut WireBuffer) -> Result<usize>;

    /// Encode into a fresh buffer
    fn to_wire(&self) -> Result<WireBuffer> {
        let mut buf = WireBuffer::new();
        self.encode_to(&mut buf)?;
        Ok(buf)
    }
}

/// Types that parse themselves out of a [`WireBuffer`]
///
/// The cursor only advances when the field was read and validated.
pub trait WireDecode: Sized {
    /// Read one length-prefixed field at the cursor
    fn decode_from(buf: &mut WireBuffer) -> Result<Self>;
}

/// Peek a field, parse it, and consume it only if parsing succeeds
fn decode_field<T>(
    buf: &mut WireBuffer,
    context: &'static str,
    parse: impl FnOnce(&[u8]) -> Result<T>,
) -> Result<T> {
    let (value, consumed) = {
        let (field, consumed) = buf.peek_length_prefixed().with_context(context)?;
        (parse(field)?, consumed)
    };
    buf.seek(buf.position() + consumed)?;
    Ok(value)
}

impl WireEncode for PublicKey {
    fn encode_to(&self, buf: &mut WireBuffer) -> Result<usize> {
        Ok(buf.write_length_prefixed(self.as_bytes()?))
    }
}

impl WireDecode for PublicKey {
    fn decode_from(buf: &mut WireBuffer) -> Result<Self> {
        decode_field(buf, "decode_public_key", PublicKey::deserialize)
    }
}

impl WireEncode for Signature {
    fn encode_to(&self, buf: &mut WireBuffer) -> Result<usize> {
        Ok(buf.write_length_prefixed(&self.serialize_new()?))
    }
}

impl WireDecode for Signature {
    fn decode_from(buf: &mut WireBuffer) -> Result<Self> {
        decode_field(buf, "decode_signature", Signature::deserialize)
    }
}

impl WireEncode for PrivateKey {
    fn encode_to(&self, buf: &mut WireBuffer) -> Result<usize> {
        Ok(buf.write_length_prefixed(&self.serialize_new()?))
    }
}

impl WireDecode for PrivateKey {
    fn decode_from(buf: &mut WireBuffer) -> Result<Self> {
        decode_field(buf, "decode_private_key", PrivateKey::deserialize)
    }
}
