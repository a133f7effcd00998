//! # Counter Program
//!
//! Keeps one counter per owner. The owner can increment it directly, or hand
//! a session token from the `session_keys` program to a delegate key that
//! then increments on the owner's behalf.

#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod errors;
pub mod events;

// Re-export for easier access
pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

declare_id!("GFjNtpDgXbbKSH7WSpsZND57D2eSgZR7GhaLM7ANmMCW");

/// Main program module containing all instruction handlers
#[program]
pub mod counter {
    use super::*;

    /// Initialize the caller's counter at its derived address
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Errors
    /// * `AlreadyExists` - If the owner already has a counter
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Increment the counter value by 1
    ///
    /// The signer must be the counter's owner, or a session signer presenting
    /// a valid session token issued by the owner for this program.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Errors
    /// * `Unauthorized` - If neither the owner nor a valid session signed
    /// * `CounterOverflow` - If the count is already at `u64::MAX`
    pub fn increment(ctx: Context<Increment>) -> Result<()> {
        instructions::increment(ctx)
    }
}
