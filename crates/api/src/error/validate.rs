//! Validation utilities returning peerkey errors

use super::types::{Error, Result};

/// Validate an exact key length
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::key(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}

/// Validate an exact signature length
#[inline(always)]
pub fn signature_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::signature(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}

/// Validate that at least `needed` bytes remain
#[inline(always)]
pub fn remaining(context: &'static str, needed: usize, remaining: usize) -> Result<()> {
    if remaining < needed {
        return Err(Error::BufferUnderrun {
            context,
            needed,
            remaining,
        });
    }
    Ok(())
}

/// Validate a key condition
#[inline(always)]
pub fn key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::key(context, reason));
    }
    Ok(())
}

/// Validate that a message is not empty
#[inline(always)]
pub fn non_empty(context: &'static str, message: &[u8]) -> Result<()> {
    if message.is_empty() {
        return Err(Error::EmptyMessage { context });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_length() {
        assert!(key_length("test", 32, 32).is_ok());
        assert!(matches!(
            key_length("test", 31, 32),
            Err(Error::IncorrectKey { .. })
        ));
    }

    #[test]
    fn test_remaining() {
        assert!(remaining("test", 4, 4).is_ok());
        assert_eq!(
            remaining("test", 5, 4),
            Err(Error::BufferUnderrun {
                context: "test",
                needed: 5,
                remaining: 4,
            })
        );
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("sign", b"x").is_ok());
        assert_eq!(
            non_empty("sign", b""),
            Err(Error::EmptyMessage { context: "sign" })
        );
    }
}
