pub mod accounts_fetcher;
pub mod assemble;
pub mod chunks;
pub mod decoders;
pub mod dispatch;
pub mod errors;
pub mod invoke;

pub use accounts_fetcher::{AccountsFetcher, FetcherConfig};
pub use chunks::MAX_ACCOUNTS_PER_REQUEST;
pub use invoke::invoke;
pub use ledgerfetch_core::{
    ContextKeyedAccount, DecodedAccount, KeyedAccount, RpcTransport,
    TransactionSender,
};
pub use ledgerfetch_providers::{
    rpc_provider_config::RpcProviderConfig, RpcCluster,
};
