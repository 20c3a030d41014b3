use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Advocate account state as tracked by the backend.
///
/// The wire form is lenient: matching is case-insensitive and anything
/// absent or unrecognized collapses to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvocateStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

impl AdvocateStatus {
    fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "active" => AdvocateStatus::Active,
            "inactive" => AdvocateStatus::Inactive,
            _ => AdvocateStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvocateStatus::Active => "Active",
            AdvocateStatus::Inactive => "Inactive",
            AdvocateStatus::Pending => "Pending",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AdvocateStatus::Active)
    }
}

impl fmt::Display for AdvocateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AdvocateStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AdvocateStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(Self::from_wire).unwrap_or_default())
    }
}

/// An individual attorney account belonging to a firm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: AdvocateStatus,
    /// Normalized at the serde boundary; the backend sends `true`,
    /// `"true"`, or `1` for verified accounts and anything else (including
    /// nothing at all) for unverified ones.
    #[serde(default, deserialize_with = "truthy_flag")]
    pub email_verified: bool,
}

impl Advocate {
    /// Activation is only offered for verified accounts that are not
    /// already active.
    pub fn can_activate(&self) -> bool {
        self.email_verified && !self.status.is_active()
    }

    pub fn can_deactivate(&self) -> bool {
        self.status.is_active()
    }
}

fn truthy_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(value)) => value == "true",
        Some(Flag::Number(value)) => value == 1,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Advocate {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn status_is_case_insensitive_and_defaults_to_pending() {
        assert_eq!(parse(r#"{"id":1,"status":"ACTIVE"}"#).status, AdvocateStatus::Active);
        assert_eq!(parse(r#"{"id":1,"status":"inactive"}"#).status, AdvocateStatus::Inactive);
        assert_eq!(parse(r#"{"id":1,"status":"suspended"}"#).status, AdvocateStatus::Pending);
        assert_eq!(parse(r#"{"id":1,"status":null}"#).status, AdvocateStatus::Pending);
        assert_eq!(parse(r#"{"id":1}"#).status, AdvocateStatus::Pending);
    }

    #[test]
    fn email_verified_accepts_every_truthy_wire_form() {
        assert!(parse(r#"{"id":1,"emailVerified":true}"#).email_verified);
        assert!(parse(r#"{"id":1,"emailVerified":"true"}"#).email_verified);
        assert!(parse(r#"{"id":1,"emailVerified":1}"#).email_verified);

        assert!(!parse(r#"{"id":1,"emailVerified":false}"#).email_verified);
        assert!(!parse(r#"{"id":1,"emailVerified":"false"}"#).email_verified);
        assert!(!parse(r#"{"id":1,"emailVerified":0}"#).email_verified);
        assert!(!parse(r#"{"id":1,"emailVerified":null}"#).email_verified);
        assert!(!parse(r#"{"id":1}"#).email_verified);
    }

    #[test]
    fn activation_gating_truth_table() {
        let advocate = |status, email_verified| Advocate {
            id: 1,
            name: "Jane".into(),
            email: None,
            phone: None,
            address: None,
            status,
            email_verified,
        };

        // Activate iff verified and not already active.
        assert!(advocate(AdvocateStatus::Pending, true).can_activate());
        assert!(advocate(AdvocateStatus::Inactive, true).can_activate());
        assert!(!advocate(AdvocateStatus::Active, true).can_activate());
        assert!(!advocate(AdvocateStatus::Pending, false).can_activate());

        // Deactivate iff active.
        assert!(advocate(AdvocateStatus::Active, false).can_deactivate());
        assert!(!advocate(AdvocateStatus::Pending, true).can_deactivate());
        assert!(!advocate(AdvocateStatus::Inactive, true).can_deactivate());
    }

    #[test]
    fn status_round_trips_in_pascal_case() {
        let advocate = parse(r#"{"id":1,"status":"Active"}"#);
        let json = serde_json::to_value(&advocate).unwrap();
        assert_eq!(json["status"], "Active");
    }
}
