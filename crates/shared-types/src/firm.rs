use serde::{Deserialize, Serialize};

use crate::advocate::Advocate;

/// A law firm with its registered advocates.
///
/// Older backend deployments still emit the legacy `l`-prefixed column
/// names, so every identifying field accepts both spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firm {
    #[serde(alias = "lId", alias = "firmId")]
    pub id: i64,
    #[serde(default, alias = "lName", alias = "firmName")]
    pub name: String,
    #[serde(default, alias = "lEmail")]
    pub email: Option<String>,
    #[serde(default, alias = "lPhone")]
    pub phone: Option<String>,
    #[serde(default, alias = "lAddress")]
    pub address: Option<String>,
    #[serde(default)]
    pub advocates: Vec<Advocate>,
    #[serde(default)]
    pub advocate_count: Option<u32>,
}

impl Firm {
    /// The count column when the backend provides one, otherwise the
    /// length of the embedded advocate list.
    pub fn advocate_total(&self) -> usize {
        self.advocate_count
            .map(|count| count as usize)
            .unwrap_or(self.advocates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_modern_field_names() {
        let firm: Firm = serde_json::from_str(
            r#"{"id":3,"name":"Acme Law","email":"office@acme.example","advocates":[]}"#,
        )
        .unwrap();
        assert_eq!(firm.id, 3);
        assert_eq!(firm.name, "Acme Law");
        assert_eq!(firm.email.as_deref(), Some("office@acme.example"));
    }

    #[test]
    fn parses_legacy_field_names() {
        let firm: Firm = serde_json::from_str(
            r#"{"lId":9,"lName":"Harbor & Finch","lEmail":"hf@example.com","lPhone":"555-0101","lAddress":"1 Pier Rd"}"#,
        )
        .unwrap();
        assert_eq!(firm.id, 9);
        assert_eq!(firm.name, "Harbor & Finch");
        assert_eq!(firm.phone.as_deref(), Some("555-0101"));
        assert_eq!(firm.address.as_deref(), Some("1 Pier Rd"));
        assert!(firm.advocates.is_empty());
    }

    #[test]
    fn advocate_total_prefers_the_count_column() {
        let firm: Firm = serde_json::from_str(
            r#"{"id":1,"name":"Acme Law","advocateCount":12,"advocates":[{"id":5,"name":"Jane"}]}"#,
        )
        .unwrap();
        assert_eq!(firm.advocate_total(), 12);
    }

    #[test]
    fn advocate_total_falls_back_to_list_length() {
        let firm: Firm = serde_json::from_str(
            r#"{"id":1,"name":"Acme Law","advocates":[{"id":5},{"id":6}]}"#,
        )
        .unwrap();
        assert_eq!(firm.advocate_total(), 2);
    }
}
