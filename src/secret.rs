//! Zeroized credential storage.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string that is zeroized when dropped.
///
/// Used for the configured default and guest passwords so they don't linger
/// in memory after the owning configuration is torn down.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string (for passing to authentication code).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print actual content
        f.debug_struct("SecureString")
            .field("len", &self.0.len())
            .finish()
    }
}
