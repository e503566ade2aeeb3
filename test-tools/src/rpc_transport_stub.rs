use std::{
    collections::{HashMap, HashSet},
    str::FromStr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use base64::{prelude::BASE64_STANDARD, Engine};
use ledgerfetch_core::{
    errors::{CoreError, CoreResult},
    RpcEnvelope, RpcErrorObject, RpcTransport,
};
use serde_json::{json, Value};
use solana_sdk::{account::Account, clock::Slot, pubkey::Pubkey};

/// Serves `getMultipleAccounts` from an in-memory account map.
/// Requests touching keys registered in `remote_errors` or `unreachable`
/// fail the whole request the way a node or the network would.
#[derive(Default)]
pub struct RpcTransportStub {
    pub accounts: HashMap<Pubkey, Account>,
    /// Requests containing one of these keys get an error object back
    pub remote_errors: HashMap<Pubkey, String>,
    /// Requests containing one of these keys fail at the transport level
    pub unreachable: HashSet<Pubkey>,
    /// Overrides the data encoding tag reported for an account
    pub encodings: HashMap<Pubkey, String>,
    /// Respond without a result
    pub omit_result: bool,
    /// Drop the last account slot of every response
    pub truncate_responses: bool,
    /// Responses to requests containing one of these keys miss their last slot
    pub truncated_for: HashSet<Pubkey>,
    /// Responses to requests containing one of these keys get an extra slot
    pub padded_for: HashSet<Pubkey>,
    pub slot: Slot,
    requests: Mutex<Vec<Vec<Value>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl RpcTransportStub {
    pub fn add(&mut self, pubkey: Pubkey, account: Account) {
        self.accounts.insert(pubkey, account);
    }

    pub fn fail_remote(&mut self, pubkey: Pubkey, msg: &str) {
        self.remote_errors.insert(pubkey, msg.to_string());
    }

    pub fn fail_transport(&mut self, pubkey: Pubkey) {
        self.unreachable.insert(pubkey);
    }

    pub fn set_encoding(&mut self, pubkey: Pubkey, encoding: &str) {
        self.encodings.insert(pubkey, encoding.to_string());
    }

    pub fn truncate_response_for(&mut self, pubkey: Pubkey) {
        self.truncated_for.insert(pubkey);
    }

    pub fn pad_response_for(&mut self, pubkey: Pubkey) {
        self.padded_for.insert(pubkey);
    }

    /// Params of every request received so far
    pub fn requests(&self) -> Vec<Vec<Value>> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of keys requested per call, in the order calls arrived
    pub fn request_sizes(&self) -> Vec<usize> {
        self.requests()
            .iter()
            .map(|params| params[0].as_array().map_or(0, Vec::len))
            .collect()
    }

    /// Highest number of calls that were in progress at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn respond(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> CoreResult<RpcEnvelope> {
        self.requests.lock().unwrap().push(params.clone());

        if method != "getMultipleAccounts" {
            return Ok(error_envelope(-32601, "Method not found"));
        }
        let pubkeys = match parse_pubkeys(params.first()) {
            Some(pubkeys) => pubkeys,
            None => return Ok(error_envelope(-32602, "Invalid params")),
        };
        if let Some(pubkey) =
            pubkeys.iter().find(|pubkey| self.unreachable.contains(*pubkey))
        {
            return Err(CoreError::TransportFailed(format!(
                "connection reset while fetching {}",
                pubkey
            )));
        }
        if let Some(msg) =
            pubkeys.iter().find_map(|pubkey| self.remote_errors.get(pubkey))
        {
            return Ok(error_envelope(-32005, msg));
        }
        if self.omit_result {
            return Ok(RpcEnvelope::default());
        }

        let mut value = pubkeys
            .iter()
            .map(|pubkey| match self.accounts.get(pubkey) {
                Some(account) => self.account_json(pubkey, account),
                None => Value::Null,
            })
            .collect::<Vec<_>>();
        let touches =
            |keys: &HashSet<Pubkey>| pubkeys.iter().any(|k| keys.contains(k));
        if self.truncate_responses || touches(&self.truncated_for) {
            value.pop();
        }
        if touches(&self.padded_for) {
            value.push(Value::Null);
        }
        Ok(RpcEnvelope::with_result(json!({
            "context": { "slot": self.slot, "apiVersion": "1.18.22" },
            "value": value,
        })))
    }

    fn account_json(&self, pubkey: &Pubkey, account: &Account) -> Value {
        let encoding = self
            .encodings
            .get(pubkey)
            .map(String::as_str)
            .unwrap_or("base64");
        json!({
            "data": [BASE64_STANDARD.encode(&account.data), encoding],
            "owner": account.owner.to_string(),
            "executable": account.executable,
            "lamports": account.lamports,
            "rentEpoch": account.rent_epoch,
            "space": account.data.len(),
        })
    }
}

fn parse_pubkeys(param: Option<&Value>) -> Option<Vec<Pubkey>> {
    param?
        .as_array()?
        .iter()
        .map(|key| Pubkey::from_str(key.as_str()?).ok())
        .collect()
}

fn error_envelope(code: i64, msg: &str) -> RpcEnvelope {
    RpcEnvelope::with_error(RpcErrorObject {
        code,
        message: msg.to_string(),
        data: None,
    })
}

#[async_trait]
impl RpcTransport for RpcTransportStub {
    async fn raw_call(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> CoreResult<RpcEnvelope> {
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        // Give the other requests of the batch a chance to start
        tokio::task::yield_now().await;
        let response = self.respond(method, params);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}
