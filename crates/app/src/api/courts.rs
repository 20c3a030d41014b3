use shared_types::{ApiError, Court, CourtPayload};

use super::Client;

impl Client {
    pub async fn list_courts(&self, search: Option<&str>) -> Result<Vec<Court>, ApiError> {
        match search {
            Some(term) if !term.is_empty() => {
                self.get_with_query("/admin/courts", &[("search", term)])
                    .await
            }
            _ => self.get("/admin/courts").await,
        }
    }

    pub async fn create_court(&self, payload: &CourtPayload) -> Result<(), ApiError> {
        self.post_ok("/admin/courts", payload).await
    }

    pub async fn update_court(&self, id: i64, payload: &CourtPayload) -> Result<(), ApiError> {
        self.put_ok(&format!("/admin/courts/{id}"), payload).await
    }

    pub async fn delete_court(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/admin/courts/{id}")).await
    }
}
