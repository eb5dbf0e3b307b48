// ── Deletion executor ──
//
// Walks a plan group by group and issues one DELETE per resource.
// HTTP 202 is the only success; any other status, or an id that cannot be
// addressed, is recorded and the batch carries on. A transport failure
// stops the rest of the family.

use tracing::{info, warn};

use dnac_api::{DeleteResponse, DnacClient};

use crate::event::CleanupEvent;
use crate::model::{DeletionOutcome, DeletionPlan, Resource, ResourceKind};

/// What happened while executing one plan.
#[derive(Debug, Clone, Default)]
pub struct Execution {
    pub outcomes: Vec<DeletionOutcome>,
    /// Set when a transport failure stopped the family early.
    pub aborted: Option<String>,
}

/// Execute `plan` in order, reporting every outcome through `on_event`.
pub async fn execute<F>(client: &DnacClient, plan: &DeletionPlan, on_event: &mut F) -> Execution
where
    F: FnMut(&CleanupEvent),
{
    let mut execution = Execution::default();

    for group in &plan.groups {
        on_event(&CleanupEvent::GroupStarted {
            kind: group.kind,
            count: group.resources.len(),
        });

        for resource in &group.resources {
            let outcome = match delete_one(client, resource).await {
                Ok(resp) => classify(resource, &resp),
                Err(e @ dnac_api::Error::InvalidId { .. }) => {
                    warn!(kind = %resource.kind, id = %resource.id, "skipping unaddressable resource");
                    DeletionOutcome::failed(resource.clone(), e.to_string())
                }
                Err(e) => {
                    let reason = format!(
                        "failed to delete {} {}: {e}",
                        resource.kind.label(),
                        resource.label()
                    );
                    warn!(family = %plan.family, %reason, "aborting family");
                    let outcome = DeletionOutcome::failed(resource.clone(), e.to_string());
                    on_event(&CleanupEvent::Outcome(outcome.clone()));
                    execution.outcomes.push(outcome);
                    execution.aborted = Some(reason);
                    return execution;
                }
            };

            on_event(&CleanupEvent::Outcome(outcome.clone()));
            execution.outcomes.push(outcome);
        }
    }

    execution
}

async fn delete_one(client: &DnacClient, resource: &Resource) -> Result<DeleteResponse, dnac_api::Error> {
    let id = resource.id.as_str();
    match resource.kind {
        ResourceKind::SubPool => client.delete_sub_pool(id).await,
        ResourceKind::Pool => client.delete_global_pool(id).await,
        ResourceKind::Floor => client.delete_floor(id).await,
        ResourceKind::Building => client.delete_building(id).await,
        ResourceKind::Area => client.delete_area(id).await,
    }
}

fn classify(resource: &Resource, resp: &DeleteResponse) -> DeletionOutcome {
    if resp.is_accepted() {
        info!(kind = %resource.kind, id = %resource.id, name = resource.label(), "deleted");
        DeletionOutcome::deleted(resource.clone(), format!("accepted (HTTP {})", resp.status))
    } else {
        warn!(
            kind = %resource.kind,
            id = %resource.id,
            name = resource.label(),
            status = resp.status,
            "delete rejected"
        );
        DeletionOutcome::failed(
            resource.clone(),
            format!("Status Code: {}, Response: {}", resp.status, resp.body),
        )
    }
}
