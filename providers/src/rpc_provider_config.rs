use std::time::Duration;

use solana_sdk::commitment_config::CommitmentLevel;

use crate::cluster::RpcCluster;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct RpcProviderConfig {
    cluster: RpcCluster,
    commitment: Option<CommitmentLevel>,
    request_timeout: Duration,
}

impl Default for RpcProviderConfig {
    fn default() -> Self {
        Self::new(RpcCluster::default(), None)
    }
}

impl RpcProviderConfig {
    pub fn new(
        cluster: RpcCluster,
        commitment: Option<CommitmentLevel>,
    ) -> Self {
        Self {
            cluster,
            commitment,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn devnet() -> Self {
        Self::new(RpcCluster::Devnet, None)
    }

    pub fn mainnet() -> Self {
        Self::new(RpcCluster::Mainnet, Some(CommitmentLevel::Confirmed))
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn cluster(&self) -> &RpcCluster {
        &self.cluster
    }

    pub fn url(&self) -> &str {
        self.cluster.url()
    }

    /// The commitment used when a request does not specify one.
    /// When this is `None` no commitment is sent and the node applies its own.
    pub fn commitment(&self) -> Option<CommitmentLevel> {
        self.commitment
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
