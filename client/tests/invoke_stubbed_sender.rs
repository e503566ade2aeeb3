use ledgerfetch_client::invoke;
use ledgerfetch_core::errors::CoreError;
use ledgerfetch_test_tools::transaction_sender_stub::TransactionSenderStub;
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

#[tokio::test]
async fn test_invoke_sends_single_instruction() {
    let sender = TransactionSenderStub::default();
    let program_id = Pubkey::new_unique();
    let signer = Pubkey::new_unique();
    let readonly = Pubkey::new_unique();
    let accounts = vec![
        AccountMeta::new(signer, true),
        AccountMeta::new_readonly(readonly, false),
    ];

    invoke(&sender, program_id, accounts.clone(), vec![9, 8, 7])
        .await
        .unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].program_id, program_id);
    assert_eq!(sent[0].accounts, accounts);
    assert_eq!(sent[0].data, vec![9, 8, 7]);
}

#[tokio::test]
async fn test_invoke_without_accounts_or_data() {
    let sender = TransactionSenderStub::default();
    let program_id = Pubkey::new_unique();

    invoke(&sender, program_id, vec![], vec![]).await.unwrap();

    let sent = sender.sent();
    assert!(sent[0].accounts.is_empty());
    assert!(sent[0].data.is_empty());
}

#[tokio::test]
async fn test_invoke_propagates_send_failure() {
    let sender = TransactionSenderStub::failing("blockhash not found");

    let err = invoke(&sender, Pubkey::new_unique(), vec![], vec![])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CoreError::TransportFailed(ref msg) if msg == "blockhash not found"
    ));
    assert!(sender.sent().is_empty());
}
