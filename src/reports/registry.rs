//! Registry resolving a [`ReportKind`] to its source implementation.

use std::sync::Arc;

use super::entities::{EntityClass, EntityReport};
use super::inventory::InventoryReport;
use super::source::ReportSource;
use super::{ReportDepth, ReportKind};

/// Holds one [`ReportSource`] per report kind.
///
/// A lookup miss surfaces as
/// [`ReportError::UnknownKind`](super::ReportError::UnknownKind) in the job
/// pipeline; with kinds being an enum this is the single place routing can
/// still go wrong.
pub struct ReportRegistry {
    sources: Vec<Arc<dyn ReportSource>>,
}

impl ReportRegistry {
    /// Create an empty registry with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Create a registry with every built-in report kind registered.
    pub fn with_defaults() -> Self {
        use EntityClass::*;
        use ReportDepth::*;
        use ReportKind::*;

        let mut registry = Self::new();
        registry.register(Arc::new(InventoryReport::new(InventoryBasic, Basic)));
        registry.register(Arc::new(InventoryReport::new(InventoryFull, Full)));
        registry.register(Arc::new(EntityReport::new(GenresBasic, Genres, Basic)));
        registry.register(Arc::new(EntityReport::new(GenresFull, Genres, Full)));
        registry.register(Arc::new(EntityReport::new(PeopleBasic, People, Basic)));
        registry.register(Arc::new(EntityReport::new(PeopleFull, People, Full)));
        registry.register(Arc::new(EntityReport::new(TagsBasic, Tags, Basic)));
        registry.register(Arc::new(EntityReport::new(TagsFull, Tags, Full)));
        registry.register(Arc::new(EntityReport::new(StudiosBasic, Studios, Basic)));
        registry.register(Arc::new(EntityReport::new(StudiosFull, Studios, Full)));
        registry.register(Arc::new(EntityReport::new(YearsFull, Years, Full)));
        registry
    }

    /// Register a source. On duplicate kinds the first registration wins.
    pub fn register(&mut self, source: Arc<dyn ReportSource>) {
        self.sources.push(source);
    }

    /// Resolve the source for a kind, if one is registered.
    pub fn get(&self, kind: ReportKind) -> Option<Arc<dyn ReportSource>> {
        self.sources.iter().find(|s| s.kind() == kind).cloned()
    }

    /// Kinds currently registered, in registration order.
    pub fn kinds(&self) -> Vec<ReportKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::new()
    }
}
