//! Events module for the Counter program
//!
//! Events emitted by the Counter program so external systems can track
//! counter activity.

use anchor_lang::prelude::*;

/// Event emitted when a counter is initialized
///
/// # Fields
/// * `counter` - The public key of the newly created counter account
/// * `owner` - The public key of the counter owner
/// * `initial_value` - The initial value of the counter (always 0)
/// * `timestamp` - Unix timestamp when the counter was initialized
#[event]
pub struct CounterInitialized {
    pub counter: Pubkey,
    pub owner: Pubkey,
    pub initial_value: u64,
    pub timestamp: i64,
}

/// Event emitted when a counter is successfully incremented
#[event]
pub struct CounterIncremented {
    /// The counter account that was incremented
    pub counter: Pubkey,
    /// The owner of the counter
    pub owner: Pubkey,
    /// The key that signed the increment (owner or session signer)
    pub signer: Pubkey,
    /// The session token used, if any
    pub session_token: Option<Pubkey>,
    /// The value before incrementing
    pub old_value: u64,
    /// The value after incrementing
    pub new_value: u64,
    /// Timestamp when the increment occurred
    pub timestamp: i64,
}
