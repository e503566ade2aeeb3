use async_trait::async_trait;
use serde_json::Value;
use solana_sdk::{instruction::Instruction, signature::Signature};

use crate::{errors::CoreResult, RpcEnvelope};

/// Raw JSON-RPC access to a ledger node.
/// A remote that answers with an error object is not a transport failure,
/// it is returned inside the [RpcEnvelope].
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn raw_call(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> CoreResult<RpcEnvelope>;
}

/// Signs and submits transactions on behalf of a payer.
#[async_trait]
pub trait TransactionSender: Send + Sync {
    async fn send_instruction(
        &self,
        instruction: Instruction,
    ) -> CoreResult<Signature>;
}
