use async_trait::async_trait;
use jsonrpsee::{
    core::{client::ClientT, ClientError},
    http_client::{HttpClient, HttpClientBuilder},
    types::ErrorObjectOwned,
};
use ledgerfetch_core::{
    errors::CoreResult, RpcEnvelope, RpcErrorObject, RpcTransport,
};
use log::*;
use serde_json::Value;

use crate::{params::PositionalParams, rpc_provider_config::RpcProviderConfig};

/// [RpcTransport] talking JSON-RPC over HTTP to the configured cluster.
pub struct HttpRpcTransport {
    client: HttpClient,
}

impl HttpRpcTransport {
    pub fn new(config: &RpcProviderConfig) -> CoreResult<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(config.request_timeout())
            .build(config.url())?;
        Ok(Self { client })
    }

    pub fn devnet() -> CoreResult<Self> {
        Self::new(&RpcProviderConfig::devnet())
    }
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn raw_call(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> CoreResult<RpcEnvelope> {
        trace!("{} {:?}", method, params);
        match self
            .client
            .request::<Value, PositionalParams>(
                method,
                PositionalParams(params),
            )
            .await
        {
            Ok(Value::Null) => Ok(RpcEnvelope::default()),
            Ok(result) => Ok(RpcEnvelope::with_result(result)),
            // The node answered with an error object, hand it to the caller
            Err(ClientError::Call(err)) => {
                Ok(RpcEnvelope::with_error(rpc_error_object(&err)))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Data that isn't valid JSON is dropped, code and message always survive.
fn rpc_error_object(err: &ErrorObjectOwned) -> RpcErrorObject {
    RpcErrorObject {
        code: err.code() as i64,
        message: err.message().to_string(),
        data: err
            .data()
            .and_then(|raw| serde_json::from_str(raw.get()).ok()),
    }
}
