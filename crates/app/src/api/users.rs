use shared_types::{Advocate, ApiError};

use super::Client;

impl Client {
    pub async fn activate_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.patch_ok(&format!("/admin/users/{user_id}/activate"))
            .await
    }

    pub async fn deactivate_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.patch_ok(&format!("/admin/users/{user_id}/deactivate"))
            .await
    }

    /// A single advocate with their firm details. No view consumes this
    /// yet.
    #[allow(dead_code)]
    pub async fn get_user(&self, user_id: i64) -> Result<Advocate, ApiError> {
        self.get(&format!("/admin/users/{user_id}")).await
    }
}
