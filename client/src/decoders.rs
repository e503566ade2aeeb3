use std::str::FromStr;

use base64::{prelude::BASE64_STANDARD, Engine};
use ledgerfetch_core::{DecodedAccount, RawAccountEntry, RpcEnvelope};
use solana_rpc_client_api::response::{
    Response as RpcResponse, RpcResponseContext,
};
use solana_sdk::pubkey::Pubkey;

use crate::errors::DecodeError;

const BASE64_ENCODING: &str = "base64";

/// The decoded accounts of one `getMultipleAccounts` response, in request
/// order, together with the context the node reported.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedChunk {
    pub context: RpcResponseContext,
    pub accounts: Vec<Option<DecodedAccount>>,
}

pub fn decode_response(
    envelope: RpcEnvelope,
) -> Result<DecodedChunk, DecodeError> {
    let result = envelope.result.ok_or(DecodeError::MissingResult)?;
    let response: RpcResponse<Vec<Option<RawAccountEntry>>> =
        serde_json::from_value(result)?;
    let accounts = response
        .value
        .into_iter()
        .map(decode_account_entry)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DecodedChunk {
        context: response.context,
        accounts,
    })
}

/// A `null` slot means the account does not exist.
pub fn decode_account_entry(
    entry: Option<RawAccountEntry>,
) -> Result<Option<DecodedAccount>, DecodeError> {
    let Some(RawAccountEntry {
        data: (encoded, encoding),
        owner,
        executable,
        lamports,
    }) = entry
    else {
        return Ok(None);
    };
    if encoding != BASE64_ENCODING {
        return Err(DecodeError::UnsupportedEncoding(encoding));
    }
    let data = BASE64_STANDARD.decode(encoded)?;
    let owner = Pubkey::from_str(&owner)
        .map_err(|_| DecodeError::InvalidOwner(owner))?;
    Ok(Some(DecodedAccount {
        owner,
        lamports,
        executable,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(data: &str, encoding: &str, owner: &Pubkey) -> RawAccountEntry {
        RawAccountEntry {
            data: (data.to_string(), encoding.to_string()),
            owner: owner.to_string(),
            executable: false,
            lamports: 42,
        }
    }

    #[test]
    fn test_decode_null_entry() {
        assert_eq!(decode_account_entry(None).unwrap(), None);
    }

    #[test]
    fn test_decode_base64_data() {
        let bytes = vec![0, 1, 2, 3, 254, 255, 10, 20, 30];
        let owner = Pubkey::new_unique();
        let encoded = BASE64_STANDARD.encode(&bytes);

        let account =
            decode_account_entry(Some(entry(&encoded, "base64", &owner)))
                .unwrap()
                .unwrap();

        assert_eq!(
            account,
            DecodedAccount {
                owner,
                lamports: 42,
                executable: false,
                data: bytes,
            }
        );
    }

    #[test]
    fn test_decode_base58_tag_fails() {
        let owner = Pubkey::new_unique();
        let err = decode_account_entry(Some(entry("2VfUX", "base58", &owner)))
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedEncoding(ref tag) if tag == "base58"
        ));
    }

    #[test]
    fn test_decode_invalid_base64_fails() {
        let owner = Pubkey::new_unique();
        let err = decode_account_entry(Some(entry("!!!", "base64", &owner)))
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidData(_)));
    }

    #[test]
    fn test_decode_invalid_owner_fails() {
        let mut raw = entry("", "base64", &Pubkey::default());
        raw.owner = "not-a-pubkey".to_string();
        let err = decode_account_entry(Some(raw)).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidOwner(ref owner) if owner == "not-a-pubkey"
        ));
    }

    #[test]
    fn test_decode_response_keeps_null_slots() {
        let owner = Pubkey::new_unique();
        let envelope = RpcEnvelope::with_result(json!({
            "context": { "slot": 7 },
            "value": [
                null,
                {
                    "data": ["AQID", "base64"],
                    "owner": owner.to_string(),
                    "executable": true,
                    "lamports": 5,
                    "rentEpoch": 18446744073709551615u64,
                    "space": 3
                }
            ]
        }));

        let chunk = decode_response(envelope).unwrap();

        assert_eq!(chunk.context.slot, 7);
        assert_eq!(
            chunk.accounts,
            vec![
                None,
                Some(DecodedAccount {
                    owner,
                    lamports: 5,
                    executable: true,
                    data: vec![1, 2, 3],
                })
            ]
        );
    }

    #[test]
    fn test_decode_response_without_result_fails() {
        let err = decode_response(RpcEnvelope::default()).unwrap_err();
        assert!(matches!(err, DecodeError::MissingResult));
    }

    #[test]
    fn test_decode_response_with_unexpected_shape_fails() {
        let envelope = RpcEnvelope::with_result(json!({
            "context": { "slot": 7 },
            "value": [{
                "data": "AQID",
                "owner": "11111111111111111111111111111111"
            }]
        }));
        let err = decode_response(envelope).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedResponse(_)));
    }
}
