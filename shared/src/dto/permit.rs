use serde::{Deserialize, Serialize};

/// Chain the query permit is bound to.
pub const PERMIT_CHAIN_ID: &str = "secret-4";

/// Amino message type of a SNIP-20/SNIP-721 query permit.
pub const QUERY_PERMIT_MSG_TYPE: &str = "query_permit";

/// Name the permit is registered under.
pub const PERMIT_NAME: &str = "Query Permit";

/// Fee denomination on Secret Network.
pub const FEE_DENOM: &str = "uscrt";

/// Token amount in a fee
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Amino fee
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// Parameters of a query permit message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermitParams {
    pub permit_name: String,
    pub allowed_tokens: Vec<String>,
    pub permissions: Vec<String>,
}

/// Amino message (`{"type": ..., "value": ...}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AminoMsg {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub value: PermitParams,
}

/// Amino sign document.
///
/// Field order is the serialization order and must not change: the wallet
/// signs the JSON encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StdSignDoc {
    pub chain_id: String,
    pub account_number: String,
    pub sequence: String,
    pub fee: StdFee,
    pub msgs: Vec<AminoMsg>,
    pub memo: String,
}

impl StdSignDoc {
    /// The fixed query permit document.
    ///
    /// A permit is never broadcast, so the signing protocol requires account
    /// number and sequence `"0"`, a zero `uscrt` fee with gas `"1"` and an
    /// empty memo. None of these may vary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared::dto::permit::StdSignDoc;
    ///
    /// let doc = StdSignDoc::query_permit();
    /// assert_eq!(doc.fee.gas, "1");
    /// assert_eq!(doc.memo, "");
    /// assert_eq!(doc, StdSignDoc::query_permit());
    /// ```
    pub fn query_permit() -> Self {
        Self {
            chain_id: PERMIT_CHAIN_ID.to_string(),
            account_number: "0".to_string(),
            sequence: "0".to_string(),
            fee: StdFee {
                amount: vec![Coin {
                    denom: FEE_DENOM.to_string(),
                    amount: "0".to_string(),
                }],
                gas: "1".to_string(),
            },
            msgs: vec![AminoMsg {
                msg_type: QUERY_PERMIT_MSG_TYPE.to_string(),
                value: PermitParams {
                    permit_name: PERMIT_NAME.to_string(),
                    allowed_tokens: vec!["jj".to_string()],
                    permissions: vec!["balance".to_string()],
                },
            }],
            memo: String::new(),
        }
    }

    /// Parameters of the first permit message, if any
    pub fn permit_params(&self) -> Option<&PermitParams> {
        self.msgs
            .iter()
            .find(|msg| msg.msg_type == QUERY_PERMIT_MSG_TYPE)
            .map(|msg| &msg.value)
    }
}

/// Options passed to the wallet's `signAmino`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignOptions {
    pub prefer_no_set_fee: bool,
    pub prefer_no_set_memo: bool,
}

impl SignOptions {
    /// Keep the zero fee and empty memo baked into the document.
    pub const fn keep_document() -> Self {
        Self {
            prefer_no_set_fee: true,
            prefer_no_set_memo: true,
        }
    }
}

/// Public key attached to an amino signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// Amino signature (base64 signature plus public key)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StdSignature {
    pub pub_key: PubKey,
    pub signature: String,
}

/// Result of `signAmino`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AminoSignResponse {
    pub signed: StdSignDoc,
    pub signature: StdSignature,
}

/// Parameters block of a query permit as sent to a contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryPermitParams {
    pub permit_name: String,
    pub allowed_tokens: Vec<String>,
    pub chain_id: String,
    pub permissions: Vec<String>,
}

/// A signed query permit, ready to be attached to a `with_permit` query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryPermit {
    pub params: QueryPermitParams,
    pub signature: StdSignature,
}

impl QueryPermit {
    /// Assemble a permit from the document the wallet actually signed.
    ///
    /// Returns `None` when the signed document carries no permit message.
    pub fn from_response(response: &AminoSignResponse) -> Option<Self> {
        let params = response.signed.permit_params()?;
        Some(Self {
            params: QueryPermitParams {
                permit_name: params.permit_name.clone(),
                allowed_tokens: params.allowed_tokens.clone(),
                chain_id: response.signed.chain_id.clone(),
                permissions: params.permissions.clone(),
            },
            signature: response.signature.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERMIT_JSON: &str = r#"{"chain_id":"secret-4","account_number":"0","sequence":"0","fee":{"amount":[{"denom":"uscrt","amount":"0"}],"gas":"1"},"msgs":[{"type":"query_permit","value":{"permit_name":"Query Permit","allowed_tokens":["jj"],"permissions":["balance"]}}],"memo":""}"#;

    fn sample_signature() -> StdSignature {
        StdSignature {
            pub_key: PubKey {
                key_type: "tendermint/PubKeySecp256k1".to_string(),
                value: "A0rZpjh8+vUTMEjJ8LqSUpTlxSvCpx+Yh8JE4hZ6gKYJ".to_string(),
            },
            signature: "kX2sB1mY4a0pX4pHh0yJ2+fm4j7mVbD4K0Gm1gq0Zt9n".to_string(),
        }
    }

    #[test]
    fn test_query_permit_json_is_exact() {
        let json = serde_json::to_string(&StdSignDoc::query_permit()).unwrap();
        assert_eq!(json, PERMIT_JSON);
    }

    #[test]
    fn test_query_permit_is_stable_across_calls() {
        let first = serde_json::to_vec(&StdSignDoc::query_permit()).unwrap();
        let second = serde_json::to_vec(&StdSignDoc::query_permit()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_permit_fixed_fields() {
        let doc = StdSignDoc::query_permit();
        assert_eq!(doc.account_number, "0");
        assert_eq!(doc.sequence, "0");
        assert_eq!(doc.fee.amount, vec![Coin { denom: "uscrt".into(), amount: "0".into() }]);
        assert_eq!(doc.fee.gas, "1");
        assert!(doc.memo.is_empty());
        assert_eq!(doc.msgs.len(), 1);
    }

    #[test]
    fn test_sign_options_use_wallet_field_names() {
        let json = serde_json::to_string(&SignOptions::keep_document()).unwrap();
        assert_eq!(json, r#"{"preferNoSetFee":true,"preferNoSetMemo":true}"#);
    }

    #[test]
    fn test_sign_response_from_wallet_json() {
        let raw = format!(
            r#"{{"signed":{PERMIT_JSON},"signature":{{"pub_key":{{"type":"tendermint/PubKeySecp256k1","value":"A0rZ"}},"signature":"kX2s"}}}}"#
        );
        let response: AminoSignResponse = serde_json::from_str(&raw).unwrap();
        assert_eq!(response.signed, StdSignDoc::query_permit());
        assert_eq!(response.signature.pub_key.key_type, "tendermint/PubKeySecp256k1");
        assert_eq!(response.signature.signature, "kX2s");
    }

    #[test]
    fn test_query_permit_from_response() {
        let response = AminoSignResponse {
            signed: StdSignDoc::query_permit(),
            signature: sample_signature(),
        };
        let permit = QueryPermit::from_response(&response).unwrap();
        assert_eq!(permit.params.permit_name, "Query Permit");
        assert_eq!(permit.params.chain_id, "secret-4");
        assert_eq!(permit.params.allowed_tokens, vec!["jj".to_string()]);
        assert_eq!(permit.params.permissions, vec!["balance".to_string()]);
        assert_eq!(permit.signature, sample_signature());
    }

    #[test]
    fn test_query_permit_requires_permit_msg() {
        let mut signed = StdSignDoc::query_permit();
        signed.msgs.clear();
        let response = AminoSignResponse { signed, signature: sample_signature() };
        assert!(QueryPermit::from_response(&response).is_none());
    }
}
