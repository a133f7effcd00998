//! Errors module for the Counter program
//!
//! Custom error definitions used by the Counter program. A missing counter
//! is reported by Anchor itself (`AccountNotInitialized`) when the account is
//! deserialized, so it has no variant here.

use anchor_lang::prelude::*;

/// Custom error codes for the Counter program
#[error_code]
pub enum CounterError {
    /// The caller is not authorized to perform this operation
    ///
    /// This error occurs when:
    /// - The signer is not the counter owner and no session token was given
    /// - The session token is missing, revoked, expired or scoped to another program
    /// - The session token was issued by someone other than the counter owner
    #[msg("Unauthorized operation")]
    Unauthorized,

    /// The owner already has a counter
    #[msg("Counter already exists")]
    AlreadyExists,

    /// Counter increment would overflow u64
    #[msg("Counter overflow")]
    CounterOverflow,
}
