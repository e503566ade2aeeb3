pub mod cluster;
pub mod http_rpc_transport;
mod params;
pub mod rpc_provider_config;
pub mod rpc_transaction_sender;

pub use cluster::RpcCluster;
