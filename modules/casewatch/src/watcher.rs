use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, info, warn};

use crate::detector::{detect, Update};
use crate::error::Result;
use crate::extract::extract_snapshot;
use crate::fetcher::PageFetcher;
use crate::notify::backend::NotifyBackend;
use crate::scheduler::Cycle;
use crate::snapshot::Snapshot;
use crate::store::RecordStore;

/// Result of one fetch → extract → detect → notify pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing went up; the observed snapshot is reported but not kept.
    Unchanged(Snapshot),
    Notified(Update),
}

/// Owns the baseline and runs the per-cycle pipeline against it.
pub struct Watcher {
    source_url: String,
    fetcher: Box<dyn PageFetcher>,
    notifier: Box<dyn NotifyBackend>,
    store: RecordStore,
    baseline: Snapshot,
    persist: bool,
}

impl Watcher {
    pub fn new(
        source_url: String,
        fetcher: Box<dyn PageFetcher>,
        notifier: Box<dyn NotifyBackend>,
        store: RecordStore,
        baseline: Snapshot,
    ) -> Self {
        Self {
            source_url,
            fetcher,
            notifier,
            store,
            baseline,
            persist: true,
        }
    }

    /// Never write the record. Nothing is actually delivered in a dry run, so
    /// the stored baseline must stay where the last real announcement left it.
    pub fn dry_run(mut self) -> Self {
        self.persist = false;
        self
    }

    pub fn baseline(&self) -> Snapshot {
        self.baseline
    }

    /// Run one cycle. Any error leaves the baseline and the record untouched.
    ///
    /// The baseline only moves after the message is delivered, so a failed
    /// send is re-announced (with the full delta) on the next cycle.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let html = self.fetcher.fetch(&self.source_url).await?;
        let observed = extract_snapshot(&html)?;

        let Some(update) = detect(&self.baseline, observed, &Local::now()) else {
            debug!(
                cases = observed.cases,
                deaths = observed.deaths,
                "No increase"
            );
            return Ok(CycleOutcome::Unchanged(observed));
        };

        info!(
            cases = update.snapshot.cases,
            deaths = update.snapshot.deaths,
            cases_diff = update.delta.cases,
            deaths_diff = update.delta.deaths,
            silent = update.message.silent,
            "Totals increased"
        );

        self.notifier.send(&update.message).await?;

        self.baseline = update.snapshot;
        if self.persist {
            if let Err(e) = self.store.save(&update.snapshot).await {
                warn!(error = %e, "Failed to persist baseline");
            }
        }

        Ok(CycleOutcome::Notified(update))
    }
}

#[async_trait]
impl Cycle for Watcher {
    async fn tick(&mut self) -> Result<()> {
        self.run_cycle().await.map(|_| ())
    }
}
