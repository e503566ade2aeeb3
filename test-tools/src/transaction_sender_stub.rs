use std::sync::Mutex;

use async_trait::async_trait;
use ledgerfetch_core::{
    errors::{CoreError, CoreResult},
    TransactionSender,
};
use solana_sdk::{instruction::Instruction, signature::Signature};

#[derive(Default)]
pub struct TransactionSenderStub {
    pub fail_with: Option<String>,
    sent: Mutex<Vec<Instruction>>,
}

impl TransactionSenderStub {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Instruction> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSender for TransactionSenderStub {
    async fn send_instruction(
        &self,
        instruction: Instruction,
    ) -> CoreResult<Signature> {
        if let Some(msg) = &self.fail_with {
            return Err(CoreError::TransportFailed(msg.clone()));
        }
        self.sent.lock().unwrap().push(instruction);
        Ok(Signature::new_unique())
    }
}
