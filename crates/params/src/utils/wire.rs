//! Constants for the varint wire format

/// Data bits carried by each varint byte
pub const VARINT_DATA_BITS: u32 = 7;

/// Continuation flag, set on every byte but the last
pub const VARINT_CONTINUATION: u8 = 0x80;

/// Mask selecting the data bits of a varint byte
pub const VARINT_DATA_MASK: u8 = 0x7F;

/// Significant bits accepted by the writer; the 64th bit is masked off
pub const VARINT_VALUE_BITS: u32 = 63;

/// Mask applied to a value before encoding
pub const VARINT_VALUE_MASK: u64 = (1u64 << VARINT_VALUE_BITS) - 1;

/// Longest encoding of a 63-bit value (ceil(63 / 7))
pub const VARINT_MAX_LEN: usize = 9;
