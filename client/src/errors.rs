use thiserror::Error;

pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("TransportError: {0}")]
    TransportError(#[from] ledgerfetch_core::errors::CoreError),
    #[error("failed to get info about accounts {pubkeys}: {message}")]
    RemoteError {
        /// Comma separated base58 keys of the failed request
        pubkeys: String,
        code: i64,
        message: String,
    },
    #[error("DecodeError: {0}")]
    DecodeError(#[from] DecodeError),
    #[error("InconsistentFetch: expected {expected} accounts, got {actual}")]
    InconsistentFetch { expected: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unsupported account data encoding '{0}', expected base64")]
    UnsupportedEncoding(String),
    #[error("invalid base64 account data: {0}")]
    InvalidData(#[from] base64::DecodeError),
    #[error("invalid account owner '{0}'")]
    InvalidOwner(String),
    #[error("response is missing its result")]
    MissingResult,
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
