use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::firm::Firm;

/// Envelope every admin endpoint wraps its payload in:
/// `{ success, message?, data? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful response; a logical failure maps
    /// to [`ApiError::Backend`] carrying the backend message.
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Backend("Empty response from server".to_string()))
        } else {
            Err(ApiError::Backend(self.message.unwrap_or_else(|| "Request failed".to_string())))
        }
    }

    /// For mutations whose payload does not matter — only success/failure.
    pub fn into_ok(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Backend(self.message.unwrap_or_else(|| "Request failed".to_string())))
        }
    }
}

/// `data` shape of `GET /admin/firms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirmsPayload {
    #[serde(default)]
    pub firms: Vec<Firm>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_with_data_unwraps() {
        let envelope: ApiEnvelope<i64> =
            serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(envelope.into_data(), Ok(7));
    }

    #[test]
    fn failure_carries_the_backend_message() {
        let envelope: ApiEnvelope<i64> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert_eq!(envelope.into_data(), Err(ApiError::Backend("nope".into())));
    }

    #[test]
    fn failure_without_message_gets_a_generic_one() {
        let envelope: ApiEnvelope<i64> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.into_ok(), Err(ApiError::Backend("Request failed".into())));
    }

    #[test]
    fn success_without_data_is_ok_for_mutations() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"done"}"#).unwrap();
        assert_eq!(envelope.into_ok(), Ok(()));
    }

    #[test]
    fn firms_payload_defaults_to_empty() {
        let payload: FirmsPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.firms.is_empty());
    }
}
