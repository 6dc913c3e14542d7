//! Render-ready report structures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tallyfin_api::ItemMetadata;

use super::ReportKind;

/// An entity row: id, display name, its own metadata, and the items
/// correlation attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub name: String,
    /// The entity's own extended metadata; `None` for synthetic entities
    /// (years) which have no detail record on the server.
    pub metadata: Option<ItemMetadata>,
    /// Correlated items in the order they were attached; never re-sorted.
    pub sub_items: Vec<SubItem>,
}

impl ReportEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: None,
            sub_items: Vec::new(),
        }
    }
}

/// An item attached to an entity.
#[derive(Debug, Clone, Serialize)]
pub struct SubItem {
    pub id: String,
    pub name: String,
    /// `None` when the item's metadata fetch failed. Inventory reports keep
    /// such items listed; correlation never attaches them in the first place.
    pub metadata: Option<ItemMetadata>,
}

/// A per-item enrichment failure recorded while a report was built.
#[derive(Debug, Clone, Serialize)]
pub struct FailedItem {
    pub item_id: String,
    pub error: String,
}

/// The one artifact handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ReportModel {
    pub kind: ReportKind,
    pub instance_url: String,
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
    pub entity_count: usize,
    pub sub_item_count: usize,
    pub failed_items: Vec<FailedItem>,
}

impl ReportModel {
    /// Wrap sorted entries into the final model.
    ///
    /// Pure assembly: counts are computed here, nothing is fetched, and
    /// empty input yields an empty model rather than an error.
    pub fn assemble(
        kind: ReportKind,
        instance_url: &str,
        entries: Vec<ReportEntry>,
        failed_items: Vec<FailedItem>,
    ) -> Self {
        let sub_item_count = entries.iter().map(|e| e.sub_items.len()).sum();
        Self {
            kind,
            instance_url: instance_url.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            entity_count: entries.len(),
            sub_item_count,
            entries,
            failed_items,
        }
    }

    /// True when at least one per-item enrichment call failed.
    pub fn is_partial(&self) -> bool {
        !self.failed_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_computes_counts() {
        let mut alpha = ReportEntry::new("a", "Alpha");
        alpha.sub_items.push(SubItem {
            id: "i1".into(),
            name: "One".into(),
            metadata: None,
        });
        alpha.sub_items.push(SubItem {
            id: "i2".into(),
            name: "Two".into(),
            metadata: None,
        });
        let beta = ReportEntry::new("b", "Beta");

        let model = ReportModel::assemble(
            ReportKind::StudiosFull,
            "http://host",
            vec![alpha, beta],
            Vec::new(),
        );
        assert_eq!(model.entity_count, 2);
        assert_eq!(model.sub_item_count, 2);
        assert_eq!(model.instance_url, "http://host");
        assert_eq!(model.tool_version, env!("CARGO_PKG_VERSION"));
        assert!(!model.is_partial());
    }

    #[test]
    fn empty_input_yields_an_empty_model() {
        let model =
            ReportModel::assemble(ReportKind::PeopleBasic, "http://host", Vec::new(), Vec::new());
        assert_eq!(model.entity_count, 0);
        assert_eq!(model.sub_item_count, 0);
        assert!(model.entries.is_empty());
        assert!(!model.is_partial());
    }

    #[test]
    fn recorded_failures_mark_the_model_partial() {
        let failed = vec![FailedItem {
            item_id: "i3".into(),
            error: "GET Users/u/Items/i3 returned HTTP 500".into(),
        }];
        let model =
            ReportModel::assemble(ReportKind::StudiosFull, "http://host", Vec::new(), failed);
        assert!(model.is_partial());
        assert_eq!(model.failed_items[0].item_id, "i3");
    }
}
