//! One-way commitment of the authentication token.

use zeroize::Zeroize;

use crate::domain::ConfigError;

/// bcrypt cost used for the authentication token.
pub const TOKEN_COST: u32 = 14;

/// Replaces a plaintext token with its salted bcrypt hash.
#[derive(Debug, Clone, Copy)]
pub struct TokenCommitter {
    cost: u32,
}

impl Default for TokenCommitter {
    fn default() -> Self {
        Self::new(TOKEN_COST)
    }
}

impl TokenCommitter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash `token` in place.
    ///
    /// The plaintext buffer is wiped before the hash takes its place. On
    /// error the token is left untouched. Tokens longer than the 72 bytes
    /// bcrypt covers are rejected rather than truncated.
    pub fn commit(&self, token: &mut String) -> Result<(), ConfigError> {
        let hashed = bcrypt::non_truncating_hash(token.as_bytes(), self.cost)?;
        token.zeroize();
        *token = hashed;
        Ok(())
    }
}
