use ledgerfetch_core::{RpcEnvelope, RpcTransport};
use log::*;
use serde_json::{json, Value};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::errors::{FetchError, FetchResult};

pub const GET_MULTIPLE_ACCOUNTS: &str = "getMultipleAccounts";

/// A commitment given for the request wins over the configured default.
/// If neither is set the node's own default applies.
pub fn resolve_commitment(
    requested: Option<CommitmentLevel>,
    default: Option<CommitmentLevel>,
) -> Option<CommitmentLevel> {
    requested.or(default)
}

/// Positional params of a `getMultipleAccounts` request:
/// `[[<base58 key>, ...], { "commitment": <level> }]`, the config object
/// only present when a commitment is set.
pub fn request_params(
    chunk: &[Pubkey],
    commitment: Option<CommitmentLevel>,
) -> Vec<Value> {
    let pubkeys = chunk.iter().map(Pubkey::to_string).collect::<Vec<_>>();
    let mut params = vec![json!(pubkeys)];
    if let Some(commitment) = commitment {
        params.push(json!({ "commitment": commitment }));
    }
    params
}

pub(crate) fn join_pubkeys(pubkeys: &[Pubkey]) -> String {
    pubkeys
        .iter()
        .map(Pubkey::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Issues one `getMultipleAccounts` request for the chunk.
/// An error object returned by the node is turned into
/// [FetchError::RemoteError] naming every key of the chunk.
pub async fn dispatch_chunk<T: RpcTransport + ?Sized>(
    transport: &T,
    chunk: &[Pubkey],
    commitment: Option<CommitmentLevel>,
) -> FetchResult<RpcEnvelope> {
    trace!("requesting {} accounts", chunk.len());
    let mut envelope = transport
        .raw_call(GET_MULTIPLE_ACCOUNTS, request_params(chunk, commitment))
        .await?;
    match envelope.error.take() {
        Some(err) => {
            let pubkeys = join_pubkeys(chunk);
            warn!(
                "{} failed for {}: {}",
                GET_MULTIPLE_ACCOUNTS, pubkeys, err.message
            );
            Err(FetchError::RemoteError {
                pubkeys,
                code: err.code,
                message: err.message,
            })
        }
        None => Ok(envelope),
    }
}
