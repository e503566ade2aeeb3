use std::{convert::Infallible, str::FromStr};

pub const MAINNET: &str = "https://api.mainnet-beta.solana.com";
pub const TESTNET: &str = "https://api.testnet.solana.com";
pub const DEVNET: &str = "https://api.devnet.solana.com";
pub const DEVELOPMENT: &str = "http://localhost:8899";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RpcCluster {
    Mainnet,
    Testnet,
    #[default]
    Devnet,
    Development,
    Custom(String),
}

impl RpcCluster {
    pub fn url(&self) -> &str {
        match self {
            RpcCluster::Mainnet => MAINNET,
            RpcCluster::Testnet => TESTNET,
            RpcCluster::Devnet => DEVNET,
            RpcCluster::Development => DEVELOPMENT,
            RpcCluster::Custom(url) => url,
        }
    }
}

/// Accepts the cluster monikers used by the solana CLI, anything else is
/// treated as a custom RPC url.
impl FromStr for RpcCluster {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cluster = match s {
            "mainnet" | "mainnet-beta" | "m" => RpcCluster::Mainnet,
            "testnet" | "t" => RpcCluster::Testnet,
            "devnet" | "d" => RpcCluster::Devnet,
            "localhost" | "development" | "l" => RpcCluster::Development,
            url => RpcCluster::Custom(url.to_string()),
        };
        Ok(cluster)
    }
}
