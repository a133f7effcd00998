//! Create session instruction for the session keys program

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::instructions::CreateSession;
use crate::events::SessionCreated;
use crate::state::{DEFAULT_SESSION_VALIDITY, TOP_UP_LAMPORTS};
use crate::errors::SessionError;

/// Create a session token
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `top_up` - Whether to fund the session signer with `TOP_UP_LAMPORTS`
/// * `valid_until` - Expiry timestamp, `None` for the default lifetime
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn create_session(
    ctx: Context<CreateSession>,
    top_up: Option<bool>,
    valid_until: Option<i64>,
) -> Result<()> {
    let clock = Clock::get()?;
    let valid_until = match valid_until {
        Some(valid_until) => valid_until,
        None => clock
            .unix_timestamp
            .checked_add(DEFAULT_SESSION_VALIDITY)
            .ok_or(SessionError::InvalidValidity)?,
    };

    let authority = ctx.accounts.authority.key();
    let session_signer = ctx.accounts.session_signer.key();
    let target_program = ctx.accounts.target_program.key();

    let session_token = &mut ctx.accounts.session_token;
    session_token.initialize(
        authority,
        session_signer,
        target_program,
        valid_until,
        ctx.bumps.session_token,
        &clock,
    )?;

    let top_up_lamports = if top_up.unwrap_or(false) {
        let cpi_accounts = system_program::Transfer {
            from: ctx.accounts.authority.to_account_info(),
            to: ctx.accounts.session_signer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
        system_program::transfer(cpi_ctx, TOP_UP_LAMPORTS)?;
        TOP_UP_LAMPORTS
    } else {
        0
    };

    emit!(SessionCreated {
        session_token: ctx.accounts.session_token.key(),
        authority,
        session_signer,
        target_program,
        valid_until,
        top_up_lamports,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Session {} created for authority {} on program {}, valid until {}",
        session_signer,
        authority,
        target_program,
        valid_until
    );

    Ok(())
}
