//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the lengths
/// are compared with a branch; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// 1 if `x < y`, else 0, computed without comparison operators
#[inline(always)]
fn byte_lt(x: u8, y: u8) -> u8 {
    (((x as u16).wrapping_sub(y as u16) >> 8) & 1) as u8
}

/// Returns a set `Choice` when any byte of `bytes` is non-zero
///
/// Every byte is folded into an accumulator before the single decision.
pub fn ct_is_nonzero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, &b| acc | b);
    // (0 - acc) has its high byte set iff acc != 0
    let nonzero = (((acc as u16).wrapping_neg()) >> 8) & 1;
    Choice::from(nonzero as u8)
}

/// Constant-time big-endian `a < b` for equal-length byte strings
///
/// Walks every byte keeping a less/greater/equal-so-far state in two flag
/// bytes; once either flag is set later bytes cannot change it.
///
/// # Panics
///
/// Panics if the lengths differ. Lengths are public so the check is not a
/// timing leak.
pub fn ct_less_than(a: &[u8], b: &[u8]) -> Choice {
    assert_eq!(a.len(), b.len(), "ct_less_than requires equal lengths");

    let mut lt = 0u8;
    let mut gt = 0u8;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let undecided = !(lt | gt) & 1;
        lt |= byte_lt(x, y) & undecided;
        gt |= byte_lt(y, x) & undecided;
    }

    Choice::from(lt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
    }

    #[test]
    fn test_ct_is_nonzero() {
        assert!(!bool::from(ct_is_nonzero(&[0u8; 32])));
        assert!(bool::from(ct_is_nonzero(&[0, 0, 0, 1])));
        assert!(bool::from(ct_is_nonzero(&[0x80, 0, 0, 0])));
        assert!(!bool::from(ct_is_nonzero(&[])));
    }

    #[test]
    fn test_ct_less_than_edges() {
        assert!(bool::from(ct_less_than(&[0x00, 0xFF], &[0x01, 0x00])));
        assert!(!bool::from(ct_less_than(&[0x01, 0x00], &[0x00, 0xFF])));
        // Equal is not less
        assert!(!bool::from(ct_less_than(&[0x12, 0x34], &[0x12, 0x34])));
        // The first differing byte decides, later bytes are ignored
        assert!(bool::from(ct_less_than(&[0x10, 0xFF, 0xFF], &[0x11, 0x00, 0x00])));
    }

    #[test]
    #[should_panic(expected = "equal lengths")]
    fn test_ct_less_than_length_mismatch() {
        let _ = ct_less_than(&[1, 2], &[1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_ct_less_than_matches_ordering(a in prop::array::uniform8(any::<u8>()),
                                              b in prop::array::uniform8(any::<u8>())) {
            prop_assert_eq!(bool::from(ct_less_than(&a, &b)), a < b);
        }

        #[test]
        fn prop_ct_is_nonzero_matches_any(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(bool::from(ct_is_nonzero(&bytes)), bytes.iter().any(|&b| b != 0));
        }
    }
}
