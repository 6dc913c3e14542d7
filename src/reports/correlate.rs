//! Item correlation: the join between entities and descendant media items.
//!
//! Candidate items come from flattening every library folder's direct
//! children into one instance-wide list. Each item's metadata is fetched at
//! most once per job through [`MetadataCache`] and matched against entities
//! by id, or by production year for the synthetic year entities.

use std::collections::HashMap;

use tracing::{debug, warn};

use tallyfin_api::{ApiClient, ItemMetadata, ItemSummary};

use super::entities::EntityClass;
use super::error::Result;
use super::model::{FailedItem, ReportEntry};

/// Per-job memoization of item metadata.
///
/// The nested entity-by-item loop costs O(items) remote calls instead of
/// O(entities x items). Population is lazy, so a report with zero entities
/// fetches nothing. A fetch failure is recorded once per item id and the
/// item is treated as unmatched from then on.
pub(crate) struct MetadataCache {
    fetched: HashMap<String, Option<ItemMetadata>>,
    failures: Vec<FailedItem>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self {
            fetched: HashMap::new(),
            failures: Vec::new(),
        }
    }

    /// Metadata for `item_id`, fetching on first use. `None` means the
    /// fetch failed, now or on an earlier lookup.
    pub async fn lookup(&mut self, client: &ApiClient, item_id: &str) -> Option<&ItemMetadata> {
        if !self.fetched.contains_key(item_id) {
            let fetched = match client.item_metadata(item_id).await {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    warn!(item_id = %item_id, error = %e, "item metadata fetch failed; item left unmatched");
                    self.failures.push(FailedItem {
                        item_id: item_id.to_string(),
                        error: e.to_string(),
                    });
                    None
                }
            };
            self.fetched.insert(item_id.to_string(), fetched);
        }
        self.fetched.get(item_id).and_then(|m| m.as_ref())
    }

    /// Consume the cache, yielding the recorded per-item failures.
    pub fn into_failures(self) -> Vec<FailedItem> {
        self.failures
    }
}

/// Flatten every folder's direct children into one candidate list.
///
/// Folder origin is dropped here; inventory reports keep their own grouping
/// and do not use this path. Folder enumeration failures are fatal.
pub(crate) async fn candidate_items(client: &ApiClient) -> Result<Vec<ItemSummary>> {
    let folders = client.media_folders().await?;
    debug!(folders = folders.items.len(), "enumerating library folders");

    let mut items = Vec::new();
    for folder in &folders.items {
        let children = client.folder_items(&folder.id).await?;
        debug!(
            folder = %folder.name,
            count = children.items.len(),
            "collected folder items"
        );
        items.extend(children.items);
    }
    Ok(items)
}

/// Whether `metadata` associates an item with `entry` under the given
/// entity class.
///
/// List classes match by id with `any` semantics, so an item attaches to an
/// entity once even when the metadata carries duplicate references. Years
/// match the item's production year against the entity name.
pub(crate) fn matches_entry(
    class: EntityClass,
    metadata: &ItemMetadata,
    entry: &ReportEntry,
) -> bool {
    match class {
        EntityClass::Studios => metadata.studios.iter().any(|s| s.id == entry.id),
        EntityClass::Genres => metadata.genre_items.iter().any(|g| g.id == entry.id),
        EntityClass::Tags => metadata.tag_items.iter().any(|t| t.id == entry.id),
        EntityClass::People => metadata.people.iter().any(|p| p.id == entry.id),
        EntityClass::Years => metadata
            .production_year
            .is_some_and(|year| year.to_string() == entry.name),
    }
}
