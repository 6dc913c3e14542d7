//! Entity-organized reports: people, studios, genres, tags, and years.

use std::cmp::Ordering;

use async_trait::async_trait;
use tracing::debug;

use tallyfin_api::{ApiClient, EntityCollection};

use super::correlate::{self, MetadataCache};
use super::error::Result;
use super::model::{FailedItem, ReportEntry, SubItem};
use super::source::ReportSource;
use super::{ReportDepth, ReportKind};

/// How entity names are compared when a report is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrdering {
    /// Plain byte order; uppercase sorts before lowercase.
    CaseSensitive,
    /// Uppercase-normalized comparison.
    CaseInsensitive,
}

impl NameOrdering {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::CaseSensitive => a.cmp(b),
            Self::CaseInsensitive => a.to_uppercase().cmp(&b.to_uppercase()),
        }
    }
}

/// The entity families a report can be organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    People,
    Studios,
    Genres,
    Tags,
    Years,
}

impl EntityClass {
    /// The wire collection this class is loaded from.
    pub fn collection(&self) -> EntityCollection {
        match self {
            Self::People => EntityCollection::People,
            Self::Studios => EntityCollection::Studios,
            Self::Genres => EntityCollection::Genres,
            Self::Tags => EntityCollection::Tags,
            Self::Years => EntityCollection::Years,
        }
    }

    /// Sort order for this class. People keep a case-sensitive comparison;
    /// every other class normalizes case first.
    pub fn ordering(&self) -> NameOrdering {
        match self {
            Self::People => NameOrdering::CaseSensitive,
            _ => NameOrdering::CaseInsensitive,
        }
    }

    /// Year entities are synthetic and have no detail record to fetch.
    pub fn has_own_metadata(&self) -> bool {
        !matches!(self, Self::Years)
    }
}

/// Report source for one entity class at one depth.
pub struct EntityReport {
    kind: ReportKind,
    class: EntityClass,
    depth: ReportDepth,
}

impl EntityReport {
    pub fn new(kind: ReportKind, class: EntityClass, depth: ReportDepth) -> Self {
        Self { kind, class, depth }
    }
}

#[async_trait]
impl ReportSource for EntityReport {
    fn kind(&self) -> ReportKind {
        self.kind
    }

    async fn load(&self, client: &ApiClient) -> Result<Vec<ReportEntry>> {
        let page = client.entities(self.class.collection()).await?;
        debug!(
            kind = %self.kind,
            count = page.total_record_count,
            "loaded entity collection"
        );

        let mut entries = Vec::with_capacity(page.items.len());
        for entity in page.items {
            let mut entry = ReportEntry::new(entity.id, entity.name);
            if self.class.has_own_metadata() {
                entry.metadata = Some(client.item_metadata(&entry.id).await?);
            }
            entries.push(entry);
        }

        let ordering = self.class.ordering();
        entries.sort_by(|a, b| ordering.compare(&a.name, &b.name));
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

        let items = correlate::candidate_items(client).await?;
        let mut cache = MetadataCache::new();

        for entry in entries.iter_mut() {
            for item in &items {
                let Some(metadata) = cache.lookup(client, &item.id).await else {
                    continue;
                };
                if correlate::matches_entry(self.class, metadata, entry) {
                    entry.sub_items.push(SubItem {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        metadata: Some(metadata.clone()),
                    });
                }
            }
        }

        Ok(cache.into_failures())
    }
}
