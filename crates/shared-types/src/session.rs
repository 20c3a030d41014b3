use serde::{Deserialize, Serialize};

/// The signed-in administrator, as returned by the auth endpoints and
/// persisted alongside the token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

/// Token plus profile; the unit of persistence for a signed-in session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub admin: AdminProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `data` shape of the login and signup responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    #[serde(default)]
    pub admin: AdminProfile,
}

impl From<AuthPayload> for Session {
    fn from(payload: AuthPayload) -> Self {
        Session {
            token: payload.token,
            admin: payload.admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn auth_payload_becomes_a_session() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"token":"abc123","admin":{"name":"Sam","email":"sam@example.com"}}"#,
        )
        .unwrap();
        let session = Session::from(payload);
        assert_eq!(session.token, "abc123");
        assert_eq!(session.admin.email, "sam@example.com");
    }

    #[test]
    fn admin_profile_is_optional_in_the_payload() {
        let payload: AuthPayload = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(payload.admin, AdminProfile::default());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            token: "t".into(),
            admin: AdminProfile {
                name: None,
                email: "a@b.c".into(),
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
