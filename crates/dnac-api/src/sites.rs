// Site hierarchy endpoints
//
// Listing is a single flat call; deletes go to a per-type endpoint, and
// floors/buildings live under the v2 API while areas stay on v1.

use tracing::debug;

use crate::client::{DeleteResponse, DnacClient};
use crate::error::Error;
use crate::models::SiteRecord;

impl DnacClient {
    /// List every site (areas, buildings, floors) as a flat collection.
    ///
    /// `GET /dna/intent/api/v1/sites`
    pub async fn list_sites(&self) -> Result<Vec<SiteRecord>, Error> {
        let url = self.api_url("/dna/intent/api/v1/sites")?;
        debug!("listing sites");
        self.get_list(url).await
    }

    /// `DELETE /dna/intent/api/v2/floors/{id}`
    pub async fn delete_floor(&self, id: &str) -> Result<DeleteResponse, Error> {
        let url = self.resource_url("/dna/intent/api/v2/floors", id)?;
        debug!(id, "deleting floor");
        self.delete(url).await
    }

    /// `DELETE /dna/intent/api/v2/buildings/{id}`
    pub async fn delete_building(&self, id: &str) -> Result<DeleteResponse, Error> {
        let url = self.resource_url("/dna/intent/api/v2/buildings", id)?;
        debug!(id, "deleting building");
        self.delete(url).await
    }

    /// `DELETE /dna/intent/api/v1/areas/{id}`
    pub async fn delete_area(&self, id: &str) -> Result<DeleteResponse, Error> {
        let url = self.resource_url("/dna/intent/api/v1/areas", id)?;
        debug!(id, "deleting area");
        self.delete(url).await
    }
}
