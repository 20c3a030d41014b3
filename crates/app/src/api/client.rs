use dioxus::prelude::*;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiEnvelope, ApiError};

use crate::routes::Route;
use crate::session::SessionState;

/// Base URL of the admin backend, fixed at compile time.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:3000/api")
}

/// HTTP client bound to the current session.
pub struct Client {
    http: reqwest::Client,
    session: SessionState,
}

impl Client {
    pub fn new(session: SessionState) -> Self {
        Client {
            http: reqwest::Client::new(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{path}", base_url()));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::error!("request failed: {err}");
            ApiError::Transport(err.to_string())
        })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    /// A 401 with a stored token means the session expired: clear it and
    /// send the admin back to the login page. A 401 without one (bad
    /// credentials on the login form) stays local to the caller.
    fn expire_session(&self) {
        if self.session.token().is_some() {
            tracing::info!("session expired, redirecting to login");
            self.session.clear();
            navigator().push(Route::Login {});
        }
    }

    async fn decode<T: DeserializeOwned + Default>(
        response: Response,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))
    }

    pub async fn get<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode::<T>(response).await?.into_data()
    }

    pub async fn get_with_query<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.send(builder).await?;
        Self::decode::<T>(response).await?.into_data()
    }

    pub async fn post<T: DeserializeOwned + Default, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(builder).await?;
        Self::decode::<T>(response).await?.into_data()
    }

    pub async fn post_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(builder).await?;
        Self::decode::<serde_json::Value>(response).await?.into_ok()
    }

    pub async fn put_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.send(builder).await?;
        Self::decode::<serde_json::Value>(response).await?.into_ok()
    }

    pub async fn patch_ok(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(self.request(Method::PATCH, path)).await?;
        Self::decode::<serde_json::Value>(response).await?.into_ok()
    }

    pub async fn delete_ok(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(self.request(Method::DELETE, path)).await?;
        Self::decode::<serde_json::Value>(response).await?.into_ok()
    }
}
