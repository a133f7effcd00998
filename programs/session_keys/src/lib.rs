//! # Session Keys Program
//!
//! Issues session tokens: short-lived capability records that let a freshly
//! generated delegate key ("session signer") act on behalf of an authority,
//! but only against a single target program.
//!
//! ## Features
//! - Session creation with bounded validity and optional fee top-up
//! - Revocation by the authority, or permissionless cleanup once expired
//! - Token validation, both as a library call (`SessionToken::validate`) and
//!   as an instruction for cross-program callers
//!
//! ## Security
//! - Token addresses are derived from (target program, session signer, authority)
//! - The session signer must co-sign creation, proving it holds the delegate key
//! - Tokens never outlive `MAX_SESSION_VALIDITY`

// Suppress warnings from Anchor's internal behavior
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod errors;
pub mod events;

pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

declare_id!("KeyspM2ssCJbqUhQ4k7sveSiY4WjnYsrXkC8oDbwde5");

#[program]
pub mod session_keys {
    use super::*;

    /// Create a session token for `session_signer` acting on behalf of `authority`
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `top_up` - When `Some(true)`, fund the session signer with `TOP_UP_LAMPORTS`
    /// * `valid_until` - Expiry as a unix timestamp, defaults to one hour from now
    ///
    /// # Events
    /// * `SessionCreated` - Emitted when the token is written
    ///
    /// # Errors
    /// * `InvalidValidity` - If `valid_until` is not in the future
    /// * `ValidityTooLong` - If `valid_until` exceeds `MAX_SESSION_VALIDITY`
    /// * `InvalidTargetProgram` - If the target account is not executable
    pub fn create_session(
        ctx: Context<CreateSession>,
        top_up: Option<bool>,
        valid_until: Option<i64>,
    ) -> Result<()> {
        instructions::create_session(ctx, top_up, valid_until)
    }

    /// Revoke a session token and return its rent to the authority
    ///
    /// The authority can revoke at any time. Anyone else can only close a
    /// token that has already expired.
    ///
    /// # Errors
    /// * `SessionStillActive` - If a non-authority tries to close a live token
    pub fn revoke_session(ctx: Context<RevokeSession>) -> Result<()> {
        instructions::revoke_session(ctx)
    }

    /// Check that the signing session signer may act against `target_program`
    ///
    /// # Errors
    /// * `InvalidToken` - If the token is not at its canonical address
    /// * `WrongSessionSigner` - If the signer is not the token's session signer
    /// * `WrongTargetProgram` - If the token is scoped to a different program
    /// * `SessionExpired` - If the token is past `valid_until`
    pub fn validate_session(ctx: Context<ValidateSession>, target_program: Pubkey) -> Result<()> {
        instructions::validate_session(ctx, target_program)
    }
}
