//! # Error Module
//!
//! Custom error types for the session keys program.

use anchor_lang::prelude::*;

/// Custom error codes for the session keys program
#[error_code]
pub enum SessionError {
    /// Requested expiry is further out than the program allows
    #[msg("Validity too long: valid_until exceeds the maximum session lifetime")]
    ValidityTooLong,

    /// Requested expiry is not in the future
    #[msg("Invalid validity: valid_until must be later than the current time")]
    InvalidValidity,

    /// Sessions can only be scoped to executable accounts
    #[msg("Invalid target program: the target account is not executable")]
    InvalidTargetProgram,

    /// The account is not a session token at its canonical address
    #[msg("Invalid token: account is not a session token issued by this program")]
    InvalidToken,

    #[msg("Wrong session signer: the signer is not the token's session signer")]
    WrongSessionSigner,

    #[msg("Wrong target program: the token is scoped to a different program")]
    WrongTargetProgram,

    #[msg("Session expired: the token is past its valid_until timestamp")]
    SessionExpired,

    /// Only the authority may close a token before it expires
    #[msg("Session still active: only the authority can revoke an unexpired token")]
    SessionStillActive,
}
