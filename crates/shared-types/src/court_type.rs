use serde::{Deserialize, Serialize};

/// A court-type category (e.g. "Civil", "Criminal").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtType {
    pub id: i64,
    #[serde(default)]
    pub court_type_name: String,
}

/// Request body for creating or updating a court type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtTypePayload {
    pub court_type_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_in_camel_case() {
        let ct: CourtType =
            serde_json::from_str(r#"{"id":2,"courtTypeName":"Civil"}"#).unwrap();
        assert_eq!(ct.court_type_name, "Civil");

        let json = serde_json::to_value(CourtTypePayload {
            court_type_name: "Criminal".into(),
        })
        .unwrap();
        assert_eq!(json["courtTypeName"], "Criminal");
    }
}
