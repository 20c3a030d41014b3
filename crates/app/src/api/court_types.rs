use shared_types::{ApiError, CourtType, CourtTypePayload};

use super::Client;

impl Client {
    pub async fn list_court_types(&self, search: Option<&str>) -> Result<Vec<CourtType>, ApiError> {
        match search {
            Some(term) if !term.is_empty() => {
                self.get_with_query("/admin/court-types", &[("search", term)])
                    .await
            }
            _ => self.get("/admin/court-types").await,
        }
    }

    pub async fn create_court_type(&self, payload: &CourtTypePayload) -> Result<(), ApiError> {
        self.post_ok("/admin/court-types", payload).await
    }

    pub async fn update_court_type(
        &self,
        id: i64,
        payload: &CourtTypePayload,
    ) -> Result<(), ApiError> {
        self.put_ok(&format!("/admin/court-types/{id}"), payload)
            .await
    }

    pub async fn delete_court_type(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/admin/court-types/{id}")).await
    }
}
