use crate::{errors::LikesError, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};
use std::collections::HashMap;

/// Region codes the service documents. Informational only: requests with
/// other codes are still sent and left for the service to reject.
pub const KNOWN_REGIONS: [&str; 6] = ["BR", "NA", "SA", "EU", "AS", "OC"];

/// Message used when a rejected payload carries no `message` field
pub const DEFAULT_REJECTION_MESSAGE: &str = "Request rejected by the service";

/// `data` of a successful `POST /generate-api-key`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyInfo {
    pub api_key: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /send-likes`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendLikesRequest {
    pub uid: String,
    pub region: String,
    pub access_token: String,
}

impl SendLikesRequest {
    pub fn new(uid: &str, region: &str, access_token: &str) -> Self {
        Self {
            uid: uid.to_string(),
            region: region.to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Wire form of the request body
    pub fn to_json(&self) -> Value {
        json!({
            "uid": self.uid,
            "region": self.region,
            "accessToken": self.access_token,
        })
    }
}

/// `data` of a successful `GET /get-token`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
}

/// Payload of `GET /health`. Fields sit at the top level, next to `success`.
///
/// `uptime` stays a JSON number so it prints exactly as the service sent it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HealthStatus {
    pub success: bool,
    pub status: String,
    pub uptime: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>, // Catch unknown fields
}

/// Check the `success` flag every endpoint returns.
///
/// Returns `None` when the payload is marked successful, otherwise the
/// message to surface: the payload's own `message` when it has one.
/// A missing or non-boolean `success` counts as a rejection.
pub fn rejection_message(body: &Value) -> Option<String> {
    if body.get("success").and_then(Value::as_bool) == Some(true) {
        return None;
    }

    Some(
        body.get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
    )
}

/// Decode the `data` object of a successful payload
pub fn extract_data<T: DeserializeOwned>(body: &Value) -> Result<T> {
    let data = body
        .get("data")
        .filter(|d| !d.is_null())
        .ok_or_else(|| LikesError::MissingField("data".to_string()))?;

    Ok(serde_json::from_value(data.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_message_success() {
        assert_eq!(rejection_message(&json!({"success": true})), None);
    }

    #[test]
    fn test_rejection_message_uses_server_message() {
        let body = json!({"success": false, "message": "API key inválida ou não encontrada"});
        assert_eq!(
            rejection_message(&body),
            Some("API key inválida ou não encontrada".to_string())
        );
    }

    #[test]
    fn test_rejection_message_without_success_flag() {
        assert_eq!(
            rejection_message(&json!({"status": "ok"})),
            Some(DEFAULT_REJECTION_MESSAGE.to_string())
        );
        // Truthy-looking values are not `true`
        assert!(rejection_message(&json!({"success": "true"})).is_some());
    }

    #[test]
    fn test_extract_api_key_info() {
        let body = json!({
            "success": true,
            "message": "API key gerada com sucesso",
            "data": {"apiKey": "abc123", "createdAt": "2024-05-01T12:00:00.000Z"}
        });

        let info: ApiKeyInfo = extract_data(&body).unwrap();
        assert_eq!(info.api_key, "abc123");
        assert!(info.created_at.is_some());
    }

    #[test]
    fn test_extract_token_info_optional_dates() {
        let body = json!({"success": true, "data": {"accessToken": "tok"}});

        let info: TokenInfo = extract_data(&body).unwrap();
        assert_eq!(info.access_token, "tok");
        assert_eq!(info.expires_at, None);
        assert_eq!(info.last_used, None);
    }

    #[test]
    fn test_extract_data_missing() {
        let err = extract_data::<TokenInfo>(&json!({"success": true})).unwrap_err();
        assert!(matches!(err, LikesError::MissingField(field) if field == "data"));

        let err = extract_data::<TokenInfo>(&json!({"success": true, "data": {}})).unwrap_err();
        assert!(matches!(err, LikesError::Serde(_)));
    }

    #[test]
    fn test_send_likes_request_wire_names() {
        let request = SendLikesRequest::new("123456789", "BR", "seu-token-aqui");
        let expected = json!({"uid": "123456789", "region": "BR", "accessToken": "seu-token-aqui"});

        assert_eq!(request.to_json(), expected);
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn test_health_status_keeps_extra_fields() {
        let health: HealthStatus = serde_json::from_value(json!({
            "success": true,
            "status": "ok",
            "uptime": 42,
            "environment": "development"
        }))
        .unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.uptime, Number::from(42));
        assert_eq!(health.extra.get("environment"), Some(&json!("development")));
    }

    #[test]
    fn test_health_uptime_round_trips_exactly() {
        let integral: HealthStatus =
            serde_json::from_value(json!({"success": true, "status": "ok", "uptime": 42}))
                .unwrap();
        assert_eq!(integral.uptime.to_string(), "42");
        assert_eq!(serde_json::to_value(&integral).unwrap()["uptime"], json!(42));

        let fractional: HealthStatus =
            serde_json::from_value(json!({"success": true, "status": "ok", "uptime": 12.5}))
                .unwrap();
        assert_eq!(fractional.uptime.to_string(), "12.5");
    }
}
