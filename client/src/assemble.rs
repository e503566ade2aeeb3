use ledgerfetch_core::{ContextKeyedAccount, DecodedAccount, KeyedAccount};
use solana_sdk::pubkey::Pubkey;

use crate::{
    decoders::DecodedChunk,
    errors::{FetchError, FetchResult},
};

/// Pairs the accounts decoded per chunk with the keys they were requested
/// for. The result has one slot per key, `None` where no account exists.
pub fn assemble(
    pubkeys: &[Pubkey],
    per_chunk: Vec<Vec<Option<DecodedAccount>>>,
) -> FetchResult<Vec<Option<KeyedAccount>>> {
    Ok(zip_with_pubkeys(pubkeys, per_chunk)?
        .into_iter()
        .map(|slot| {
            slot.map(|(pubkey, account)| KeyedAccount { pubkey, account })
        })
        .collect())
}

/// Like [assemble] but each found account also gets the context of the
/// response it arrived in.
pub fn assemble_with_context(
    pubkeys: &[Pubkey],
    chunks: Vec<DecodedChunk>,
) -> FetchResult<Vec<Option<ContextKeyedAccount>>> {
    let per_chunk = chunks
        .into_iter()
        .map(|DecodedChunk { context, accounts }| {
            accounts
                .into_iter()
                .map(|slot| slot.map(|account| (account, context.clone())))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    Ok(zip_with_pubkeys(pubkeys, per_chunk)?
        .into_iter()
        .map(|slot| {
            slot.map(|(pubkey, (account, context))| ContextKeyedAccount {
                pubkey,
                account,
                context,
            })
        })
        .collect())
}

fn zip_with_pubkeys<A>(
    pubkeys: &[Pubkey],
    per_chunk: Vec<Vec<Option<A>>>,
) -> FetchResult<Vec<Option<(Pubkey, A)>>> {
    let slots = per_chunk.into_iter().flatten().collect::<Vec<_>>();
    // Chunks are planned from `pubkeys`, a mismatch means a node returned
    // fewer or more slots than keys were requested
    if slots.len() != pubkeys.len() {
        return Err(FetchError::InconsistentFetch {
            expected: pubkeys.len(),
            actual: slots.len(),
        });
    }
    Ok(pubkeys
        .iter()
        .zip(slots)
        .map(|(pubkey, slot)| slot.map(|account| (*pubkey, account)))
        .collect())
}

#[cfg(test)]
mod tests {
    use solana_rpc_client_api::response::RpcResponseContext;

    use super::*;

    fn account(lamports: u64) -> DecodedAccount {
        DecodedAccount {
            owner: Pubkey::new_unique(),
            lamports,
            executable: false,
            data: vec![lamports as u8],
        }
    }

    fn pubkeys(count: usize) -> Vec<Pubkey> {
        (0..count).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn test_assemble_keeps_gap_at_position() {
        let keys = pubkeys(5);
        let accounts = (0..5).map(account).collect::<Vec<_>>();
        let per_chunk = vec![
            vec![Some(accounts[0].clone()), Some(accounts[1].clone())],
            vec![None, Some(accounts[3].clone())],
            vec![Some(accounts[4].clone())],
        ];

        let slots = assemble(&keys, per_chunk).unwrap();

        assert_eq!(slots.len(), 5);
        assert!(slots[2].is_none());
        for idx in [0, 1, 3, 4] {
            assert_eq!(
                slots[idx],
                Some(KeyedAccount {
                    pubkey: keys[idx],
                    account: accounts[idx].clone(),
                })
            );
        }
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(&[], vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_assemble_length_mismatch() {
        let keys = pubkeys(3);
        let per_chunk = vec![vec![Some(account(1)), None]];

        let err = assemble(&keys, per_chunk).unwrap_err();

        assert!(matches!(
            err,
            FetchError::InconsistentFetch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_assemble_with_context_uses_chunk_context() {
        let keys = pubkeys(3);
        let context = |slot| RpcResponseContext {
            slot,
            api_version: None,
        };
        let chunks = vec![
            DecodedChunk {
                context: context(10),
                accounts: vec![Some(account(1)), None],
            },
            DecodedChunk {
                context: context(11),
                accounts: vec![Some(account(2))],
            },
        ];

        let slots = assemble_with_context(&keys, chunks).unwrap();

        assert_eq!(slots[0].as_ref().unwrap().context.slot, 10);
        assert_eq!(slots[0].as_ref().unwrap().pubkey, keys[0]);
        assert!(slots[1].is_none());
        assert_eq!(slots[2].as_ref().unwrap().context.slot, 11);
        assert_eq!(slots[2].as_ref().unwrap().pubkey, keys[2]);
    }
}
