// ── Run orchestrator ──
//
// authenticate → for each family: list → plan → execute → report.
// Auth failure ends the run; anything after that only ends a family.

use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use dnac_api::DnacClient;

use crate::config::{CleanupConfig, Mode};
use crate::error::CoreError;
use crate::event::CleanupEvent;
use crate::executor;
use crate::lister;
use crate::model::Family;
use crate::plan;
use crate::report::{FamilyReport, RunReport};

/// One lab cleanup run against a single controller.
pub struct Cleanup {
    config: CleanupConfig,
}

impl Cleanup {
    pub fn new(config: CleanupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// Run without progress reporting.
    pub async fn run(&self) -> Result<RunReport, CoreError> {
        self.run_with(|_| {}).await
    }

    /// Run, reporting progress through `on_event` as it happens.
    ///
    /// In [`Mode::DryRun`] no request is sent at all and every family is
    /// reported as skipped.
    pub async fn run_with<F>(&self, mut on_event: F) -> Result<RunReport, CoreError>
    where
        F: FnMut(&CleanupEvent),
    {
        let mut report = RunReport::new(self.config.mode, self.config.url.as_str());

        if self.config.mode == Mode::DryRun {
            info!(url = %self.config.url, "dry run -- no requests will be sent");
            for family in Family::iter() {
                on_event(&CleanupEvent::FamilySkipped { family });
                report.families.push(FamilyReport::skipped(family));
            }
            return Ok(report);
        }

        let mut client = DnacClient::new(self.config.url.clone(), &self.config.transport())?;
        self.authenticate(&mut client).await?;
        on_event(&CleanupEvent::Authenticated);

        for family in Family::iter() {
            let family_report = clean_family(&client, family, &mut on_event).await;
            report.families.push(family_report);
        }

        Ok(report)
    }

    async fn authenticate(&self, client: &mut DnacClient) -> Result<(), CoreError> {
        debug!(url = %self.config.url, username = %self.config.username, "authenticating");
        client
            .login(&self.config.username, &self.config.password)
            .await
            .map_err(|e| match CoreError::from(e) {
                // Name the controller, not the token endpoint.
                CoreError::ConnectionFailed { reason, .. } => CoreError::ConnectionFailed {
                    url: self.config.url.to_string(),
                    reason,
                },
                other => other,
            })
    }
}

async fn clean_family<F>(client: &DnacClient, family: Family, on_event: &mut F) -> FamilyReport
where
    F: FnMut(&CleanupEvent),
{
    on_event(&CleanupEvent::Listing { family });

    let collection = match lister::list_family(client, family).await {
        Ok(collection) => collection,
        Err(e) => {
            let reason = format!("failed to retrieve {family}: {e}");
            warn!(%family, error = %e, "listing failed, skipping family");
            on_event(&CleanupEvent::FamilyAborted {
                family,
                reason: reason.clone(),
            });
            return FamilyReport::aborted(family, reason);
        }
    };

    let plan = plan::plan(&collection, family);
    on_event(&CleanupEvent::Planned {
        family,
        count: plan.len(),
    });

    let execution = executor::execute(client, &plan, on_event).await;
    if let Some(reason) = &execution.aborted {
        on_event(&CleanupEvent::FamilyAborted {
            family,
            reason: reason.clone(),
        });
    }

    FamilyReport::from_execution(family, plan.len(), execution)
}
