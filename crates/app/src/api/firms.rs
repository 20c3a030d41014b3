use shared_types::{Advocate, ApiError, Firm, FirmsPayload};

use super::Client;

impl Client {
    /// All firms with their advocates, optionally narrowed by firm name.
    pub async fn list_firms(&self, firm_name: Option<&str>) -> Result<Vec<Firm>, ApiError> {
        let payload: FirmsPayload = match firm_name {
            Some(name) if !name.is_empty() => {
                self.get_with_query("/admin/firms", &[("firmName", name)])
                    .await?
            }
            _ => self.get("/admin/firms").await?,
        };
        Ok(payload.firms)
    }

    /// All advocates across every firm, optionally narrowed by a search
    /// term.
    pub async fn list_advocates(&self, search: Option<&str>) -> Result<Vec<Advocate>, ApiError> {
        match search {
            Some(term) if !term.is_empty() => {
                self.get_with_query("/admin/advocates", &[("search", term)])
                    .await
            }
            _ => self.get("/admin/advocates").await,
        }
    }
}
