// IP pool endpoints
//
// Sub-pools are reservations carved out of a global pool and must be
// released before the global pool can go.

use tracing::debug;

use crate::client::{DeleteResponse, DnacClient};
use crate::error::Error;
use crate::models::{GlobalPoolRecord, SubPoolRecord};

impl DnacClient {
    /// List reserved IP sub-pools, excluding inherited groups.
    ///
    /// `GET /dna/intent/api/v1/reserve-ip-subpool?ignoreInheritedGroups=true`
    pub async fn list_sub_pools(&self) -> Result<Vec<SubPoolRecord>, Error> {
        let url = self.api_url("/dna/intent/api/v1/reserve-ip-subpool?ignoreInheritedGroups=true")?;
        debug!("listing ip sub pools");
        self.get_list(url).await
    }

    /// List global IP pools.
    ///
    /// `GET /dna/intent/api/v1/global-pool`
    pub async fn list_global_pools(&self) -> Result<Vec<GlobalPoolRecord>, Error> {
        let url = self.api_url("/dna/intent/api/v1/global-pool")?;
        debug!("listing global ip pools");
        self.get_list(url).await
    }

    /// `DELETE /dna/intent/api/v1/reserve-ip-subpool/{id}`
    pub async fn delete_sub_pool(&self, id: &str) -> Result<DeleteResponse, Error> {
        let url = self.resource_url("/dna/intent/api/v1/reserve-ip-subpool", id)?;
        debug!(id, "deleting ip sub pool");
        self.delete(url).await
    }

    /// `DELETE /dna/intent/api/v1/global-pool/{id}`
    pub async fn delete_global_pool(&self, id: &str) -> Result<DeleteResponse, Error> {
        let url = self.resource_url("/dna/intent/api/v1/global-pool", id)?;
        debug!(id, "deleting global ip pool");
        self.delete(url).await
    }
}
