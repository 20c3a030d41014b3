use shared_types::{ApiError, AuthPayload, LoginRequest, Session, SignupRequest};

use super::Client;

impl Client {
    pub async fn login(&self, email: String, password: String) -> Result<Session, ApiError> {
        let payload: AuthPayload = self
            .post("/admin/auth/login", &LoginRequest { email, password })
            .await?;
        Ok(payload.into())
    }

    pub async fn signup(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<Session, ApiError> {
        let payload: AuthPayload = self
            .post(
                "/admin/auth/signup",
                &SignupRequest {
                    name,
                    email,
                    password,
                },
            )
            .await?;
        Ok(payload.into())
    }
}
