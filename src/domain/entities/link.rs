//! Link entity representing a stored short link record.

/// A shortened URL record.
///
/// `code` is the record's key and never changes once assigned. `clicks` only
/// grows, and only while the link is active. Deactivation is terminal: there
/// is no way back to `is_active = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub url: String,
    pub clicks: u64,
    pub is_active: bool,
}

impl Link {
    /// Creates a fresh, active link with no clicks.
    pub fn new(code: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
            clicks: 0,
            is_active: true,
        }
    }

    /// Marks the link as inactive (soft delete).
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
