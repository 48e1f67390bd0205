//! Wire framing for peer-to-peer protocol values
//!
//! [`WireBuffer`] is an owned byte buffer with a single cursor. Writes append
//! varints, length-prefixed fields and raw bytes; reads and peeks consume them
//! back in order. Peeks never move the cursor, and neither does a failed read.
//!
//! ```
//! use peerkey_wire::WireBuffer;
//!
//! let mut buf = WireBuffer::new();
//! buf.write_varint(300);
//! buf.write_length_prefixed(b"hello");
//!
//! buf.rewind();
//! assert_eq!(buf.read_varint().unwrap(), (300, 2));
//! let (payload, consumed) = buf.read_length_prefixed().unwrap();
//! assert_eq!(&payload[..], b"hello");
//! assert_eq!(consumed, 6);
//! assert!(buf.is_empty());
//! ```

pub mod buffer;
pub mod varint;

pub use buffer::WireBuffer;
pub use varint::{decode_varint, encode_varint, varint_len};
