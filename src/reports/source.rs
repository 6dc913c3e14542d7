//! The polymorphic report interface.

use async_trait::async_trait;

use tallyfin_api::ApiClient;

use super::error::Result;
use super::model::{FailedItem, ReportEntry, ReportModel};
use super::ReportKind;

/// One report kind's implementation: load entities, correlate items, build
/// the model.
///
/// Sources are stateless. Everything a run needs arrives as explicit
/// parameters, so a single source instance can serve any number of
/// concurrent jobs.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// The kind this source produces.
    fn kind(&self) -> ReportKind;

    /// Fetch and sort the top-level entities, each enriched with its own
    /// metadata. Failures here are fatal to the job.
    async fn load(&self, client: &ApiClient) -> Result<Vec<ReportEntry>>;

    /// Attach descendant items to the loaded entries.
    ///
    /// Basic kinds leave the entries untouched and report no failures.
    /// Per-item metadata failures are recorded and returned, not raised;
    /// only collection-level fetches may fail the job from here.
    async fn correlate(
        &self,
        client: &ApiClient,
        entries: &mut [ReportEntry],
    ) -> Result<Vec<FailedItem>>;

    /// Wrap the finished entries into the render-ready model.
    fn build(
        &self,
        client: &ApiClient,
        entries: Vec<ReportEntry>,
        failed_items: Vec<FailedItem>,
    ) -> ReportModel {
        ReportModel::assemble(self.kind(), client.base_url(), entries, failed_items)
    }
}
