// ── Resource lister ──
//
// Fetches a family's flat collection. Pools take two calls (sub-pools,
// then global pools); either failing fails the whole family.

use tracing::{debug, trace};

use dnac_api::DnacClient;

use crate::convert::site_resource;
use crate::error::CoreError;
use crate::model::{Family, Resource};

/// List every resource of `family`. An empty collection is a valid result.
pub async fn list_family(client: &DnacClient, family: Family) -> Result<Vec<Resource>, CoreError> {
    let collection: Vec<Resource> = match family {
        Family::Pools => {
            let sub_pools = client.list_sub_pools().await?;
            let pools = client.list_global_pools().await?;
            sub_pools
                .into_iter()
                .map(Resource::from)
                .chain(pools.into_iter().map(Resource::from))
                .collect()
        }
        Family::Sites => client
            .list_sites()
            .await?
            .into_iter()
            .filter_map(|record| {
                let id = record.id.clone();
                let resource = site_resource(record);
                if resource.is_none() {
                    trace!(id, "ignoring site with unrecognised type");
                }
                resource
            })
            .collect(),
    };

    debug!(%family, count = collection.len(), "listed resources");
    Ok(collection)
}
