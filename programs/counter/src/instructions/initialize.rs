//! Initialize instruction for the Counter program

use anchor_lang::prelude::*;
use crate::state::{CounterAccount, COUNTER_SEED};
use crate::events::CounterInitialized;

/// Initialize a new counter for the signing owner
///
/// The counter lives at `counter_address(owner)`. The account constraint is
/// `init_if_needed` so that a second call reaches the handler and fails with
/// `AlreadyExists` instead of a system program error.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `CounterInitialized` - Emitted when counter is successfully initialized
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let clock = Clock::get()?;

    counter.initialize(ctx.accounts.owner.key(), ctx.bumps.counter, &clock)?;

    emit!(CounterInitialized {
        counter: counter.key(),
        owner: counter.authority,
        initial_value: counter.count,
        timestamp: clock.unix_timestamp,
    });

    msg!("Counter initialized with value 0 for owner {}", counter.authority);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + CounterAccount::INIT_SPACE,
        seeds = [COUNTER_SEED, owner.key().as_ref()],
        bump
    )]
    pub counter: Account<'info, CounterAccount>,

    /// The owner of the new counter (pays for the account)
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
