//! Cursor-tracked wire buffer

use bytes::{Bytes, BytesMut};
use peerkey_api::error::validate;
use peerkey_api::{Error, Result, ResultExt};
use tracing::trace;

use crate::varint::{decode_varint, encode_varint, varint_len};


/// Growable byte buffer with a single read/write cursor
///
/// Writes always append at the end of the buffer and leave the cursor at
/// the new end. Reads and peeks start at the cursor; `rewind` or `seek`
/// moves it back to read what was written. A peek never moves the cursor
/// and a read only moves it on success.
///
/// A buffer has one owner. Share it across threads behind external
/// locking, or hand each worker its own buffer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WireBuffer {
    data: BytesMut,
    cursor: usize,
}

impl WireBuffer {
    /// Empty buffer with the cursor at 0
    pub fn create_empty() -> Self {
        Self {
            data: BytesMut::new(),
            cursor: 0,
        }
    }

    /// Alias of [`WireBuffer::create_empty`]
    pub fn new() -> Self {
        Self::create_empty()
    }

    /// Empty buffer with room for `capacity` bytes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Wrap existing bytes with the cursor at `start`
    ///
    /// The storage is taken over without copying when `bytes` is the only
    /// handle to it, and copied otherwise. Either way later writes to the
    /// buffer are never visible through other handles.
    ///
    /// # Errors
    ///
    /// [`Error::BufferUnderrun`] if `start` lies past the end of `bytes`.
    pub fn create_from(bytes: impl Into<Bytes>, start: usize) -> Result<Self> {
        let bytes = bytes.into();
        validate::remaining("create_from", start, bytes.len())?;

        let data = match bytes.try_into_mut() {
            Ok(unique) => unique,
            Err(shared) => {
                trace!(len = shared.len(), "wire buffer copying shared input");
                BytesMut::from(&shared[..])
            }
        };

        Ok(Self {
            data,
            cursor: start,
        })
    }

    /// Copy `bytes` into a new buffer with the cursor at 0
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            data: BytesMut::from(bytes),
            cursor: 0,
        }
    }

    /// Total number of bytes held, regardless of the cursor
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Bytes between the cursor and the end
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// True when nothing is left to read after the cursor
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Current cursor offset
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `pos`
    ///
    /// # Errors
    ///
    /// [`Error::BufferUnderrun`] if `pos` lies past the end.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        validate::remaining("seek", pos, self.data.len())?;
        self.cursor = pos;
        Ok(())
    }

    /// Move the cursor back to the start
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Every byte held, regardless of the cursor
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Unread bytes from the cursor to the end
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.data[self.cursor..]
    }

    /// Consume the buffer, returning everything written to it
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    /// Append the varint encoding of `value`
    ///
    /// Bit 63 is masked off. Returns the encoded length.
    ///
    /// # Panics
    ///
    /// Panics if the encoder output disagrees with [`varint_len`]; that is
    /// a broken internal contract, not an input error.
    pub fn write_varint(&mut self, value: u64) -> usize {
        let written = encode_varint(value, &mut self.data);
        assert_eq!(
            written,
            varint_len(value),
            "varint encoder wrote an unexpected length"
        );
        self.cursor = self.data.len();
        written
    }

    /// Append `varint(len(bytes))` followed by `bytes`
    ///
    /// Returns the total number of bytes written.
    pub fn write_length_prefixed(&mut self, bytes: &[u8]) -> usize {
        let prefix = self.write_varint(bytes.len() as u64);
        prefix + self.write_raw(bytes)
    }

    /// Append `bytes` with no length prefix
    pub fn write_raw(&mut self, bytes: &[u8]) -> usize {
        self.data.extend_from_slice(bytes);
        self.cursor = self.data.len();
        bytes.len()
    }

    /// Decode the varint at the cursor without moving it
    ///
    /// Returns the value and its encoded length.
    ///
    /// # Errors
    ///
    /// - [`Error::BufferUnderrun`] when nothing or only part of a varint
    ///   remains
    /// - [`Error::InvalidVarint`] when the encoding is overlong or not
    ///   minimal
    pub fn peek_varint(&self) -> Result<(u64, usize)> {
        decode_varint(self.remaining_bytes()).with_context("peek_varint")
    }

    /// Read the length-prefixed field at the cursor without moving it
    ///
    /// Returns the payload and the total bytes the field occupies
    /// (prefix included).
    ///
    /// # Errors
    ///
    /// Fails like [`WireBuffer::peek_varint`] on a bad prefix, and with
    /// [`Error::BufferUnderrun`] when fewer payload bytes remain than the
    /// prefix announces.
    pub fn peek_length_prefixed(&self) -> Result<(&[u8], usize)> {
        let (len, prefix) = self.peek_varint().with_context("peek_length_prefixed")?;
        let available = self.remaining() - prefix;

        let len = match usize::try_from(len) {
            Ok(len) if len <= available => len,
            _ => {
                trace!(announced = len, available, "length-prefixed field truncated");
                return Err(Error::BufferUnderrun {
                    context: "peek_length_prefixed",
                    needed: usize::try_from(len).unwrap_or(usize::MAX),
                    remaining: available,
                });
            }
        };

        let start = self.cursor + prefix;
        Ok((&self.data[start..start + len], prefix + len))
    }

    /// Copy `into.len()` bytes from the cursor without moving it
    ///
    /// # Errors
    ///
    /// [`Error::BufferUnderrun`] if fewer than `into.len()` bytes remain.
    pub fn peek_raw(&self, into: &mut [u8]) -> Result<usize> {
        validate::remaining("peek_raw", into.len(), self.remaining())?;
        into.copy_from_slice(&self.data[self.cursor..self.cursor + into.len()]);
        Ok(into.len())
    }

    /// [`WireBuffer::peek_varint`], then advance past the varint
    pub fn read_varint(&mut self) -> Result<(u64, usize)> {
        let (value, consumed) = self.peek_varint().with_context("read_varint")?;
        self.cursor += consumed;
        Ok((value, consumed))
    }

    /// [`WireBuffer::peek_length_prefixed`], then advance past the field
    pub fn read_length_prefixed(&mut self) -> Result<(&[u8], usize)> {
        let (prefix, len) = {
            let (payload, consumed) = self
                .peek_length_prefixed()
                .with_context("read_length_prefixed")?;
            (consumed - payload.len(), payload.len())
        };

        let start = self.cursor + prefix;
        self.cursor = start + len;
        Ok((&self.data[start..start + len], prefix + len))
    }

    /// [`WireBuffer::peek_raw`], then advance past the copied bytes
    pub fn read_raw(&mut self, into: &mut [u8]) -> Result<usize> {
        let consumed = self.peek_raw(into).with_context("read_raw")?;
        self.cursor += consumed;
        Ok(consumed)
    }
}

impl core::fmt::Debug for WireBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WireBuffer")
            .field("len", &self.data.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl From<&[u8]> for WireBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for WireBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
