use async_trait::async_trait;
use ledgerfetch_core::{errors::CoreResult, TransactionSender};
use log::*;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::rpc_provider_config::RpcProviderConfig;

/// Signs with the payer and waits for the transaction to be confirmed.
pub struct RpcTransactionSender {
    rpc_client: RpcClient,
    payer: Keypair,
}

impl RpcTransactionSender {
    pub fn new(config: &RpcProviderConfig, payer: Keypair) -> Self {
        let rpc_client = RpcClient::new_with_timeout_and_commitment(
            config.url().to_string(),
            config.request_timeout(),
            CommitmentConfig {
                commitment: config.commitment().unwrap_or_default(),
            },
        );
        Self { rpc_client, payer }
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }
}

#[async_trait]
impl TransactionSender for RpcTransactionSender {
    async fn send_instruction(
        &self,
        instruction: Instruction,
    ) -> CoreResult<Signature> {
        let recent_blockhash = self.rpc_client.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &[&self.payer],
            recent_blockhash,
        );
        debug!("sending transaction with blockhash {}", recent_blockhash);
        let signature =
            self.rpc_client.send_and_confirm_transaction(&tx).await?;
        Ok(signature)
    }
}
