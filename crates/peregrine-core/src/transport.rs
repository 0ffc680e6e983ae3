use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Identifier of an active remote session, assigned at session creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wire-level response to a command submitted through the session.
///
/// The legacy JSON wire protocol carries a numeric `status`; the W3C dialect
/// omits it. `value` is the untyped result tree and must not be read before
/// the status has been checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// The remote-session channel used to submit commands to a controlled
/// browser instance.
///
/// Implementors wrap an existing WebDriver client. Session creation,
/// capability negotiation, and the wire protocol itself stay on their side
/// of this seam, as do timeout and retry policy.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Submit one named command against the session and return its response.
    ///
    /// Every call is a fallible network round trip.
    async fn execute(
        &self,
        session: &SessionId,
        command: &str,
        params: Value,
    ) -> Result<WireResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_legacy_response() {
        let response: WireResponse =
            serde_json::from_value(json!({"status": 0, "value": {"data": "iVBORw0K"}})).unwrap();

        assert_eq!(response.status, Some(0));
        assert_eq!(response.value, Some(json!({"data": "iVBORw0K"})));
    }

    #[test]
    fn test_parse_response_without_status() {
        let response: WireResponse =
            serde_json::from_value(json!({"value": {"ready": true}})).unwrap();

        assert_eq!(response.status, None);
        assert_eq!(response.value, Some(json!({"ready": true})));
    }

    #[test]
    fn test_missing_fields_parse_as_absent() {
        let response: WireResponse = serde_json::from_value(json!({})).unwrap();

        assert_eq!(response.status, None);
        assert!(response.value.is_none());
    }

    #[test]
    fn test_null_value_parses_as_absent() {
        let response: WireResponse =
            serde_json::from_value(json!({"status": 0, "value": null})).unwrap();

        assert_eq!(response.status, Some(0));
        assert!(response.value.is_none());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let response = WireResponse {
            status: None,
            value: Some(json!(1)),
        };

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire, json!({"value": 1}));
    }

    #[test]
    fn test_session_id_displays_raw() {
        let session = SessionId::new("f0ac8db2");
        assert_eq!(session.to_string(), "f0ac8db2");
        assert_eq!(session.as_str(), "f0ac8db2");
    }
}
