//! # State Module
//!
//! Account structures and validation logic for session tokens.

use anchor_lang::prelude::*;
use crate::errors::SessionError;

/// Seed prefix of every session token address
pub const SESSION_TOKEN_SEED: &[u8] = b"session_token";

/// Lifetime of a session when the creator does not pick one (1 hour)
pub const DEFAULT_SESSION_VALIDITY: i64 = 60 * 60;

/// Longest lifetime a session may be created with (7 days)
pub const MAX_SESSION_VALIDITY: i64 = 7 * 24 * 60 * 60;

/// Lamports moved to the session signer on `top_up` (0.01 SOL)
pub const TOP_UP_LAMPORTS: u64 = 10_000_000;

/// A delegated signing capability scoped to one target program
#[account]
#[derive(InitSpace)]
pub struct SessionToken {
    /// The identity on whose behalf the session signer acts
    pub authority: Pubkey,
    /// The delegate key allowed to sign
    pub session_signer: Pubkey,
    /// The only program this token is valid for
    pub target_program: Pubkey,
    /// Unix timestamp after which the token is no longer accepted
    pub valid_until: i64,
    /// Timestamp when the token was created
    pub created_at: i64,
    /// Bump of the token address
    pub bump: u8,
}

/// Lifecycle position of a token that still exists on chain.
///
/// A revoked token has been closed, so it never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Expired,
}

/// Derive the address of the session token for a (target, signer, authority) triple
pub fn session_token_address(
    target_program: &Pubkey,
    session_signer: &Pubkey,
    authority: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SESSION_TOKEN_SEED,
            target_program.as_ref(),
            session_signer.as_ref(),
            authority.as_ref(),
        ],
        &crate::ID,
    )
}

impl SessionToken {
    /// Initialize a freshly allocated token
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        session_signer: Pubkey,
        target_program: Pubkey,
        valid_until: i64,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        require!(valid_until > clock.unix_timestamp, SessionError::InvalidValidity);
        let max_valid_until = clock
            .unix_timestamp
            .checked_add(MAX_SESSION_VALIDITY)
            .ok_or(SessionError::ValidityTooLong)?;
        require!(valid_until <= max_valid_until, SessionError::ValidityTooLong);

        self.authority = authority;
        self.session_signer = session_signer;
        self.target_program = target_program;
        self.valid_until = valid_until;
        self.created_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    pub fn status(&self, clock: &Clock) -> SessionStatus {
        if clock.unix_timestamp < self.valid_until {
            SessionStatus::Active
        } else {
            SessionStatus::Expired
        }
    }

    pub fn is_expired(&self, clock: &Clock) -> bool {
        self.status(clock) == SessionStatus::Expired
    }

    /// Load a session token from an arbitrary account.
    ///
    /// Fails with `InvalidToken` unless the account is owned by this program
    /// and carries the `SessionToken` discriminator. Closed (revoked) tokens
    /// are owned by the system program again and are rejected here.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require_keys_eq!(*info.owner, crate::ID, SessionError::InvalidToken);
        let data = info.try_borrow_data()?;
        SessionToken::try_deserialize(&mut &data[..]).map_err(|_| error!(SessionError::InvalidToken))
    }

    /// Check that `signer` may act for `self.authority` against `target_program`.
    ///
    /// `token_address` is the key the token was loaded from; it must be the
    /// canonical address for the token's own (target, signer, authority).
    pub fn validate(
        &self,
        token_address: &Pubkey,
        signer: &Pubkey,
        target_program: &Pubkey,
        clock: &Clock,
    ) -> Result<()> {
        let expected = Pubkey::create_program_address(
            &[
                SESSION_TOKEN_SEED,
                self.target_program.as_ref(),
                self.session_signer.as_ref(),
                self.authority.as_ref(),
                &[self.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(SessionError::InvalidToken))?;
        require_keys_eq!(expected, *token_address, SessionError::InvalidToken);

        require_keys_eq!(self.session_signer, *signer, SessionError::WrongSessionSigner);
        require_keys_eq!(self.target_program, *target_program, SessionError::WrongTargetProgram);
        require!(!self.is_expired(clock), SessionError::SessionExpired);
        Ok(())
    }
}
