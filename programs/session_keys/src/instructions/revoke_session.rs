//! Revoke session instruction for the session keys program

use anchor_lang::prelude::*;
use crate::instructions::RevokeSession;
use crate::events::SessionRevoked;
use crate::errors::SessionError;

/// Revoke a session token
///
/// The token is closed by the `close = authority` constraint once this
/// handler returns, so a revoked token can never be loaded again.
///
/// # Security Considerations
/// - The authority may revoke at any time
/// - Anyone can close an expired token (permissionless cleanup); rent still
///   goes to the authority
pub fn revoke_session(ctx: Context<RevokeSession>) -> Result<()> {
    let session_token = &ctx.accounts.session_token;
    let revoker = ctx.accounts.revoker.key();
    let clock = Clock::get()?;

    let expired = session_token.is_expired(&clock);
    require!(
        revoker == session_token.authority || expired,
        SessionError::SessionStillActive
    );

    emit!(SessionRevoked {
        session_token: session_token.key(),
        authority: session_token.authority,
        revoked_by: revoker,
        expired,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Session {} revoked by {}, rent returned to {}",
        session_token.session_signer,
        revoker,
        session_token.authority
    );

    Ok(())
}
