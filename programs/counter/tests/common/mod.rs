//! Shared LiteSVM setup for the counter integration tests.
//!
//! Prerequisites: `anchor build`, so that both program binaries exist under
//! `target/deploy/`.

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use counter::CounterAccount;
use litesvm::{types::TransactionResult, LiteSVM};
use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

pub const COUNTER_SO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/counter.so");
pub const SESSION_KEYS_SO: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/session_keys.so");

pub const START_TIMESTAMP: i64 = 1_700_000_000;
pub const AIRDROP_LAMPORTS: u64 = 1_000_000_000;

pub fn setup() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program_from_file(counter::ID, COUNTER_SO)
        .expect("counter.so missing, run `anchor build` first");
    svm.add_program_from_file(session_keys::ID, SESSION_KEYS_SO)
        .expect("session_keys.so missing, run `anchor build` first");
    set_time(&mut svm, START_TIMESTAMP);
    svm
}

pub fn set_time(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar::<Clock>(&clock);
}

/// A fresh keypair with `AIRDROP_LAMPORTS`
pub fn funded_user(svm: &mut LiteSVM) -> Keypair {
    let user = Keypair::new();
    svm.airdrop(&user.pubkey(), AIRDROP_LAMPORTS).unwrap();
    user
}

pub fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair, extra_signers: &[&Keypair]) -> TransactionResult {
    let mut signers = vec![payer];
    signers.extend_from_slice(extra_signers);
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), signers.as_slice(), svm.latest_blockhash());
    svm.send_transaction(tx)
}

/// The custom program error code of a failed transaction, if any
pub fn custom_error(result: TransactionResult) -> Option<u32> {
    match result {
        Err(failed) => match failed.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
            _ => None,
        },
        Ok(_) => None,
    }
}

pub fn create_counter(svm: &mut LiteSVM, owner: &Keypair) -> Pubkey {
    let (counter_pda, _) = counter::counter_address(&owner.pubkey());
    send(svm, initialize_ix(owner), owner, &[]).expect("initialize failed");
    counter_pda
}

pub fn initialize_ix(owner: &Keypair) -> Instruction {
    let (counter_pda, _) = counter::counter_address(&owner.pubkey());
    Instruction {
        program_id: counter::ID,
        accounts: counter::accounts::Initialize {
            counter: counter_pda,
            owner: owner.pubkey(),
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: counter::instruction::Initialize {}.data(),
    }
}

pub fn increment_ix(counter_pda: Pubkey, signer: &Pubkey, session_token: Option<Pubkey>) -> Instruction {
    Instruction {
        program_id: counter::ID,
        accounts: counter::accounts::Increment {
            counter: counter_pda,
            session_token,
            signer: *signer,
        }
        .to_account_metas(None),
        data: counter::instruction::Increment {}.data(),
    }
}

/// Create a session for `authority` scoped to `target_program`, topped up so
/// the session signer can pay its own fees
pub fn create_session(
    svm: &mut LiteSVM,
    authority: &Keypair,
    target_program: Pubkey,
    valid_until: Option<i64>,
) -> (Keypair, Pubkey) {
    let session_signer = Keypair::new();
    let (session_token, _) =
        session_keys::session_token_address(&target_program, &session_signer.pubkey(), &authority.pubkey());

    let ix = Instruction {
        program_id: session_keys::ID,
        accounts: session_keys::accounts::CreateSession {
            session_token,
            session_signer: session_signer.pubkey(),
            authority: authority.pubkey(),
            target_program,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: session_keys::instruction::CreateSession {
            top_up: Some(true),
            valid_until,
        }
        .data(),
    };
    send(svm, ix, authority, &[&session_signer]).expect("create_session failed");
    (session_signer, session_token)
}

pub fn revoke_session_ix(session_token: Pubkey, authority: Pubkey, revoker: Pubkey) -> Instruction {
    Instruction {
        program_id: session_keys::ID,
        accounts: session_keys::accounts::RevokeSession {
            session_token,
            authority,
            revoker,
        }
        .to_account_metas(None),
        data: session_keys::instruction::RevokeSession {}.data(),
    }
}

pub fn fetch_counter(svm: &LiteSVM, counter_pda: &Pubkey) -> CounterAccount {
    let account = svm.get_account(counter_pda).expect("counter account missing");
    CounterAccount::try_deserialize(&mut account.data.as_slice()).expect("not a counter account")
}
