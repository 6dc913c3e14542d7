//! Inventory reports: the library folders themselves and their contents.

use async_trait::async_trait;
use tracing::debug;

use tallyfin_api::ApiClient;

use super::correlate::MetadataCache;
use super::entities::NameOrdering;
use super::error::Result;
use super::model::{FailedItem, ReportEntry, SubItem};
use super::source::ReportSource;
use super::{ReportDepth, ReportKind};

/// Report source for the inventory kinds.
///
/// Entries are the library folders; the full variant lists each folder's
/// direct children under it. Unlike entity correlation, folder grouping is
/// retained here rather than flattened away.
pub struct InventoryReport {
    kind: ReportKind,
    depth: ReportDepth,
}

impl InventoryReport {
    pub fn new(kind: ReportKind, depth: ReportDepth) -> Self {
        Self { kind, depth }
    }
}

#[async_trait]
impl ReportSource for InventoryReport {
    fn kind(&self) -> ReportKind {
        self.kind
    }

    async fn load(&self, client: &ApiClient) -> Result<Vec<ReportEntry>> {
        let folders = client.media_folders().await?;
        debug!(count = folders.items.len(), "loaded media folders");

        let mut entries = Vec::with_capacity(folders.items.len());
        for folder in folders.items {
            let mut entry = ReportEntry::new(folder.id, folder.name);
            entry.metadata = Some(client.item_metadata(&entry.id).await?);
            entries.push(entry);
        }

        entries.sort_by(|a, b| NameOrdering::CaseInsensitive.compare(&a.name, &b.name));
        Ok(entries)
    }

    async fn correlate(
        &self,
        client: &ApiClient,
        entries: &mut [ReportEntry],
    ) -> Result<Vec<FailedItem>> {
        if self.depth == ReportDepth::Basic {
            return Ok(Vec::new());
        }

        let mut cache = MetadataCache::new();
        for entry in entries.iter_mut() {
            let children = client.folder_items(&entry.id).await?;
            for item in children.items {
                let metadata = cache.lookup(client, &item.id).await.cloned();
                // A failed fetch still leaves the child listed: an inventory
                // must not drop items it knows exist.
                entry.sub_items.push(SubItem {
                    id: item.id,
                    name: item.name,
                    metadata,
                });
            }
        }
        Ok(cache.into_failures())
    }
}
