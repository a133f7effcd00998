//! # State Module
//!
//! This module contains the counter account and its address derivation.

use anchor_lang::prelude::*;

/// Seed prefix of every counter address
pub const COUNTER_SEED: &[u8] = b"counter";

/// The per-owner counter account
#[account]
#[derive(InitSpace)]
pub struct CounterAccount {
    /// The owner that can increment this counter or delegate that right
    pub authority: Pubkey,
    /// The current count value
    pub count: u64,
    /// Bump of the counter address
    pub bump: u8,
    /// Timestamp when the counter was created
    pub created_at: i64,
    /// Timestamp when the counter was last updated
    pub updated_at: i64,
}

/// Derive the counter address of `owner`
pub fn counter_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[COUNTER_SEED, owner.as_ref()], &crate::ID)
}

impl CounterAccount {
    /// A zeroed account has no owner yet
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Initialize a new counter with default values.
    ///
    /// Refuses to touch an account that already has an owner, so an existing
    /// count is never reset.
    pub fn initialize(&mut self, authority: Pubkey, bump: u8, clock: &Clock) -> Result<()> {
        require!(!self.is_initialized(), crate::CounterError::AlreadyExists);

        self.authority = authority;
        self.count = 0;
        self.bump = bump;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Increment the counter value, returning the new value
    pub fn increment(&mut self, clock: &Clock) -> Result<u64> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(crate::CounterError::CounterOverflow)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.count)
    }
}
