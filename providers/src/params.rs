use jsonrpsee::core::{traits::ToRpcParams, JsonRawValue};
use serde_json::Value;

// -----------------
// PositionalParams
// -----------------
pub struct PositionalParams(pub Vec<Value>);

impl ToRpcParams for PositionalParams {
    fn to_rpc_params(
        self,
    ) -> Result<Option<Box<JsonRawValue>>, serde_json::Error> {
        let raw_value =
            JsonRawValue::from_string(serde_json::to_string(&self.0)?)?;
        Ok(Some(raw_value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_params_serialize_as_array() {
        let params = PositionalParams(vec![
            json!(["11111111111111111111111111111111"]),
            json!({ "commitment": "finalized" }),
        ]);
        let raw = params.to_rpc_params().unwrap().unwrap();
        assert_eq!(
            raw.get(),
            r#"[["11111111111111111111111111111111"],{"commitment":"finalized"}]"#
        );
    }
}
