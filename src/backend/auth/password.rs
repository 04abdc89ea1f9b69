/**
 * Password Hashing
 *
 * bcrypt with a random per-call salt and a fixed cost chosen at startup.
 */

use bcrypt::BcryptError;

use crate::backend::server::config::ConfigError;

/// Smallest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// One-way password hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Cost used when `BCRYPT_COST` is not set
    pub const DEFAULT_COST: u32 = 10;

    /// Create a hasher with the given bcrypt cost
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidCost` if the cost is outside `4..=31`.
    pub fn new(cost: u32) -> Result<Self, ConfigError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(ConfigError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password for storage
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; an unparsable hash is an error.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(password, hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}
