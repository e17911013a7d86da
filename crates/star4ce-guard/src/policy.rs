//! Protection policy supplied per protected-page mount.

/// Controls whether a present credential must be confirmed remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectionPolicy {
    /// When `true` (the default), a stored token is only trusted after the
    /// authority confirms it. When `false`, presence alone admits the
    /// visitor (weak mode — trusts local storage only).
    pub verify: bool,
}

impl ProtectionPolicy {
    /// Policy requiring remote confirmation.
    pub fn verified() -> Self {
        Self { verify: true }
    }

    /// Weak-mode policy trusting the stored credential as-is.
    pub fn weak() -> Self {
        Self { verify: false }
    }
}

impl Default for ProtectionPolicy {
    fn default() -> Self {
        Self::verified()
    }
}
