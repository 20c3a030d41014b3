use serde::{Deserialize, Serialize};

/// A court record from the reference-data catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: i64,
    #[serde(default)]
    pub court_name: String,
    #[serde(default)]
    pub court_city: Option<String>,
    #[serde(default)]
    pub court_state: Option<String>,
}

/// Request body for creating or updating a court.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtPayload {
    pub court_name: String,
    #[serde(default)]
    pub court_city: Option<String>,
    #[serde(default)]
    pub court_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn court_parses_with_optional_location() {
        let court: Court =
            serde_json::from_str(r#"{"id":4,"courtName":"District Court"}"#).unwrap();
        assert_eq!(court.court_name, "District Court");
        assert_eq!(court.court_city, None);
        assert_eq!(court.court_state, None);
    }

    #[test]
    fn payload_serializes_in_camel_case() {
        let payload = CourtPayload {
            court_name: "High Court".into(),
            court_city: Some("Springfield".into()),
            court_state: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["courtName"], "High Court");
        assert_eq!(json["courtCity"], "Springfield");
    }
}
