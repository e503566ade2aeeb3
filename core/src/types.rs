use serde::{Deserialize, Serialize};
use serde_json::Value;
use solana_rpc_client_api::response::RpcResponseContext;
use solana_sdk::{account::Account, pubkey::Pubkey};

// -----------------
// RpcEnvelope
// -----------------
/// Top level shape of a JSON-RPC response, either `result` or `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcEnvelope {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcEnvelope {
    pub fn with_result(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn with_error(error: RpcErrorObject) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// -----------------
// RawAccountEntry
// -----------------
/// A non-null account slot of a `getMultipleAccounts` response.
/// Fields the node sends beyond these (rentEpoch, space) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccountEntry {
    /// Encoded data and its encoding tag, ie. `["AQID", "base64"]`
    pub data: (String, String),
    pub owner: String,
    pub executable: bool,
    pub lamports: u64,
}

// -----------------
// DecodedAccount
// -----------------
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedAccount {
    pub owner: Pubkey,
    pub lamports: u64,
    pub executable: bool,
    pub data: Vec<u8>,
}

impl From<DecodedAccount> for Account {
    fn from(account: DecodedAccount) -> Self {
        Account {
            lamports: account.lamports,
            data: account.data,
            owner: account.owner,
            executable: account.executable,
            rent_epoch: 0,
        }
    }
}

// -----------------
// KeyedAccount
// -----------------
/// An account found on chain paired with the key it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedAccount {
    pub pubkey: Pubkey,
    pub account: DecodedAccount,
}

/// Same as [KeyedAccount] but also carries the context of the response
/// that the account was part of.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextKeyedAccount {
    pub pubkey: Pubkey,
    pub account: DecodedAccount,
    pub context: RpcResponseContext,
}
