use futures_util::future::try_join_all;
use ledgerfetch_core::{
    errors::CoreResult, ContextKeyedAccount, KeyedAccount, RpcTransport,
};
use ledgerfetch_providers::{
    http_rpc_transport::HttpRpcTransport,
    rpc_provider_config::RpcProviderConfig,
};
use log::*;
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::{
    assemble::{assemble, assemble_with_context},
    chunks::{plan_chunks, REQUEST_LIMIT},
    decoders::{decode_response, DecodedChunk},
    dispatch::{dispatch_chunk, resolve_commitment},
    errors::{FetchError, FetchResult},
};

#[derive(Debug, Default, Clone)]
pub struct FetcherConfig {
    /// Used for requests that don't specify a commitment
    pub commitment: Option<CommitmentLevel>,
}

impl From<&RpcProviderConfig> for FetcherConfig {
    fn from(config: &RpcProviderConfig) -> Self {
        Self {
            commitment: config.commitment(),
        }
    }
}

/// Fetches any number of accounts by splitting them into requests the node
/// accepts and running those requests concurrently.
/// Either all requests succeed or the fetch fails as a whole.
pub struct AccountsFetcher<T: RpcTransport> {
    transport: T,
    config: FetcherConfig,
}

impl AccountsFetcher<HttpRpcTransport> {
    pub fn new(config: RpcProviderConfig) -> CoreResult<Self> {
        let transport = HttpRpcTransport::new(&config)?;
        Ok(Self::with_transport(transport, FetcherConfig::from(&config)))
    }

    pub fn devnet() -> CoreResult<Self> {
        Self::new(RpcProviderConfig::devnet())
    }
}

impl<T: RpcTransport> AccountsFetcher<T> {
    pub fn with_transport(transport: T, config: FetcherConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Returns one slot per pubkey in the same order, `None` for accounts
    /// that don't exist.
    pub async fn get_multiple_accounts(
        &self,
        pubkeys: &[Pubkey],
        commitment: Option<CommitmentLevel>,
    ) -> FetchResult<Vec<Option<KeyedAccount>>> {
        let chunks = self.fetch_chunks(pubkeys, commitment).await?;
        assemble(
            pubkeys,
            chunks.into_iter().map(|chunk| chunk.accounts).collect(),
        )
    }

    /// Same as [Self::get_multiple_accounts], additionally returning the
    /// response context each account was fetched at.
    pub async fn get_multiple_accounts_and_context(
        &self,
        pubkeys: &[Pubkey],
        commitment: Option<CommitmentLevel>,
    ) -> FetchResult<Vec<Option<ContextKeyedAccount>>> {
        let chunks = self.fetch_chunks(pubkeys, commitment).await?;
        assemble_with_context(pubkeys, chunks)
    }

    async fn fetch_chunks(
        &self,
        pubkeys: &[Pubkey],
        commitment: Option<CommitmentLevel>,
    ) -> FetchResult<Vec<DecodedChunk>> {
        let commitment = resolve_commitment(commitment, self.config.commitment);
        let chunks = plan_chunks(pubkeys, REQUEST_LIMIT);
        debug!(
            "fetching {} accounts in {} requests (commitment: {:?})",
            pubkeys.len(),
            chunks.len(),
            commitment
        );
        // All requests start together, the first failure aborts the fetch
        try_join_all(chunks.into_iter().map(|chunk| async move {
            let envelope =
                dispatch_chunk(&self.transport, chunk, commitment).await?;
            let decoded = decode_response(envelope)?;
            // Slots are paired with keys by position, so every response has
            // to match its own request exactly
            if decoded.accounts.len() != chunk.len() {
                warn!(
                    "requested {} accounts but got {} slots back",
                    chunk.len(),
                    decoded.accounts.len()
                );
                return Err(FetchError::InconsistentFetch {
                    expected: chunk.len(),
                    actual: decoded.accounts.len(),
                });
            }
            Ok(decoded)
        }))
        .await
    }
}
