//! # Instructions Module
//!
//! Instruction handlers and account validation contexts for the session
//! keys program.

use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::SessionError;

pub mod create_session;
pub mod revoke_session;
pub mod validate_session;

pub use create_session::*;
pub use revoke_session::*;
pub use validate_session::*;

/// Account validation context for creating a session token
#[derive(Accounts)]
pub struct CreateSession<'info> {
    /// The session token to be created
    #[account(
        init,
        payer = authority,
        space = 8 + SessionToken::INIT_SPACE,
        seeds = [
            SESSION_TOKEN_SEED,
            target_program.key().as_ref(),
            session_signer.key().as_ref(),
            authority.key().as_ref()
        ],
        bump
    )]
    pub session_token: Account<'info, SessionToken>,

    /// The delegate key; signs to prove the creator holds it
    /// Mutable so it can receive the optional top-up
    #[account(mut)]
    pub session_signer: Signer<'info>,

    /// The authority delegating its rights (pays rent and top-up)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The program the session is scoped to
    /// CHECK: Only its key is stored; must be executable
    #[account(
        constraint = target_program.executable @ SessionError::InvalidTargetProgram
    )]
    pub target_program: UncheckedAccount<'info>,

    /// System program for account creation and the top-up transfer
    pub system_program: Program<'info, System>,
}

/// Account validation context for revoking a session token
#[derive(Accounts)]
pub struct RevokeSession<'info> {
    /// The token to close; rent goes back to its authority
    #[account(
        mut,
        close = authority,
        has_one = authority @ SessionError::InvalidToken,
        seeds = [
            SESSION_TOKEN_SEED,
            session_token.target_program.as_ref(),
            session_token.session_signer.as_ref(),
            session_token.authority.as_ref()
        ],
        bump = session_token.bump
    )]
    pub session_token: Account<'info, SessionToken>,

    /// The authority recorded in the token (receives the rent refund)
    /// CHECK: Pinned to the token by `has_one`
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    /// Whoever submits the revocation; must be the authority unless the token expired
    pub revoker: Signer<'info>,
}

/// Account validation context for validating a session token
#[derive(Accounts)]
pub struct ValidateSession<'info> {
    /// The token being presented
    pub session_token: Account<'info, SessionToken>,

    /// The session signer presenting it
    pub session_signer: Signer<'info>,
}
