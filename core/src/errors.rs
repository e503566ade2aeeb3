use thiserror::Error;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("RpcClientError: {0}")]
    RpcClientError(#[from] solana_rpc_client_api::client_error::Error),
    #[error("JsonRpcClientError: {0}")]
    JsonRpcClientError(#[from] jsonrpsee::core::client::Error),
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Transport failed: {0}")]
    TransportFailed(String),
}
