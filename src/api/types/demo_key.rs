//! Demo key endpoint payloads

use serde::{Deserialize, Serialize};

use crate::domain::issuance::CredentialPair;

/// Body of `POST /api/request-demo-key`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoKeyRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// `{ "ok": true }`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Successful demo key response; keys are only present in inline mode
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoKeyResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,
}

impl DemoKeyResponse {
    pub fn emailed() -> Self {
        Self {
            ok: true,
            ingest: None,
            executor: None,
        }
    }

    pub fn inline(pair: CredentialPair) -> Self {
        Self {
            ok: true,
            ingest: Some(pair.ingest_token),
            executor: Some(pair.executor_token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emailed_response_has_no_keys() {
        let value = serde_json::to_value(DemoKeyResponse::emailed()).unwrap();
        assert_eq!(value, json!({ "ok": true }));
    }

    #[test]
    fn test_inline_response_includes_keys() {
        let value =
            serde_json::to_value(DemoKeyResponse::inline(CredentialPair::new("i", "e"))).unwrap();
        assert_eq!(value, json!({ "ok": true, "ingest": "i", "executor": "e" }));
    }

    #[test]
    fn test_request_email_is_optional() {
        let request: DemoKeyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_none());

        let request: DemoKeyRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@b.c"));
    }
}
