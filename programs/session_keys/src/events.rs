//! # Events Module
//!
//! Structured events emitted by the session keys program so off-chain
//! indexers can follow the lifecycle of every token.

use anchor_lang::prelude::*;

/// Event emitted when a session token is created
#[event]
pub struct SessionCreated {
    /// The session token account
    pub session_token: Pubkey,
    /// The authority delegating its signing rights
    pub authority: Pubkey,
    /// The delegate key
    pub session_signer: Pubkey,
    /// The program the token is scoped to
    pub target_program: Pubkey,
    /// Expiry timestamp
    pub valid_until: i64,
    /// Lamports transferred to the session signer (0 when no top-up)
    pub top_up_lamports: u64,
    /// Timestamp when created
    pub timestamp: i64,
}

/// Event emitted when a session token is closed
#[event]
pub struct SessionRevoked {
    pub session_token: Pubkey,
    pub authority: Pubkey,
    /// The account that signed the revocation
    pub revoked_by: Pubkey,
    /// Whether the token had already expired when it was closed
    pub expired: bool,
    pub timestamp: i64,
}

/// Event emitted by `validate_session`
#[event]
pub struct SessionValidated {
    pub session_token: Pubkey,
    pub authority: Pubkey,
    pub session_signer: Pubkey,
    pub target_program: Pubkey,
    pub timestamp: i64,
}
