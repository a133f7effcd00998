//! Validate session instruction for the session keys program

use anchor_lang::prelude::*;
use crate::instructions::ValidateSession;
use crate::events::SessionValidated;

/// Validate a session token against the signing session signer and `target_program`
///
/// Programs linking this crate usually call `SessionToken::validate` directly;
/// this instruction exposes the same check over CPI.
pub fn validate_session(ctx: Context<ValidateSession>, target_program: Pubkey) -> Result<()> {
    let session_token = &ctx.accounts.session_token;
    let session_signer = ctx.accounts.session_signer.key();
    let clock = Clock::get()?;

    session_token.validate(&session_token.key(), &session_signer, &target_program, &clock)?;

    emit!(SessionValidated {
        session_token: session_token.key(),
        authority: session_token.authority,
        session_signer,
        target_program,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Session {} valid for authority {} on program {}",
        session_signer,
        session_token.authority,
        target_program
    );

    Ok(())
}
