//! Error handling traits

use super::types::Result;

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Replace the context of the error, if any
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
