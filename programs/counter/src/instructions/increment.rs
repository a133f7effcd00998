//! Increment instruction for the Counter program

use anchor_lang::prelude::*;
use session_keys::SessionToken;
use crate::state::{CounterAccount, COUNTER_SEED};
use crate::events::CounterIncremented;
use crate::errors::CounterError;

/// Increment the counter after authorizing the signer
///
/// Without a session token the signer must be the counter owner. With one,
/// the token must:
/// 1. Be a live session token issued by the `session_keys` program
/// 2. Name the signer as its session signer and this program as its target
/// 3. Have been issued by the counter owner
///
/// Every rejection is reported as `Unauthorized` and the count is unchanged.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `CounterIncremented` - Emitted when counter is successfully incremented
pub fn increment(ctx: Context<Increment>) -> Result<()> {
    let clock = Clock::get()?;
    let signer = ctx.accounts.signer.key();
    let owner = ctx.accounts.counter.authority;

    let session_token = match &ctx.accounts.session_token {
        Some(session_token) => {
            authorize_session(session_token, &signer, &owner, &clock)?;
            Some(session_token.key())
        }
        None => {
            require_keys_eq!(signer, owner, CounterError::Unauthorized);
            None
        }
    };

    let counter = &mut ctx.accounts.counter;
    let old_value = counter.count;
    let new_value = counter.increment(&clock)?;

    emit!(CounterIncremented {
        counter: counter.key(),
        owner,
        signer,
        session_token,
        old_value,
        new_value,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter incremented from {} to {} by {} for owner {}",
        old_value,
        new_value,
        signer,
        owner
    );

    Ok(())
}

/// Check that `session_token` lets `signer` act for `owner` on this program
fn authorize_session(
    session_token: &AccountInfo,
    signer: &Pubkey,
    owner: &Pubkey,
    clock: &Clock,
) -> Result<()> {
    let token = SessionToken::load(session_token).map_err(|err| {
        msg!("Session token {} rejected: {}", session_token.key, err);
        error!(CounterError::Unauthorized)
    })?;

    token
        .validate(session_token.key, signer, &crate::ID, clock)
        .map_err(|err| {
            msg!("Session token {} rejected: {}", session_token.key, err);
            error!(CounterError::Unauthorized)
        })?;

    // The token must come from the owner of this particular counter
    require_keys_eq!(token.authority, *owner, CounterError::Unauthorized);
    Ok(())
}

#[derive(Accounts)]
pub struct Increment<'info> {
    #[account(
        mut,
        seeds = [COUNTER_SEED, counter.authority.as_ref()],
        bump = counter.bump
    )]
    pub counter: Account<'info, CounterAccount>,

    /// Session token authorizing `signer` on behalf of the counter owner
    /// CHECK: Ownership, discriminator and binding are checked in `authorize_session`
    pub session_token: Option<UncheckedAccount<'info>>,

    /// The owner, or the session signer named in `session_token`
    pub signer: Signer<'info>,
}
