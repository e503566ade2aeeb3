use ledgerfetch_core::{errors::CoreResult, TransactionSender};
use log::*;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::Signature,
};

/// Sends a transaction with a single instruction invoking `program_id`.
pub async fn invoke<S: TransactionSender + ?Sized>(
    sender: &S,
    program_id: Pubkey,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
) -> CoreResult<Signature> {
    debug!(
        "invoking {} with {} accounts and {} bytes of data",
        program_id,
        accounts.len(),
        data.len()
    );
    let instruction = Instruction {
        program_id,
        accounts,
        data,
    };
    sender.send_instruction(instruction).await
}
