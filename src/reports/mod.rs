//! Report engine: kinds, sources, correlation, models, and jobs.
//!
//! A report request names a [`ReportKind`]; the [`registry`] resolves it to
//! a [`ReportSource`](source::ReportSource) which loads entities, optionally
//! correlates descendant items against them, and builds the final
//! [`ReportModel`](model::ReportModel). [`job::ReportJob`] wraps that
//! pipeline in a background task with a pollable completion flag.

pub mod correlate;
pub mod entities;
pub mod error;
pub mod inventory;
pub mod job;
pub mod model;
pub mod registry;
pub mod source;

pub use error::{ParseKindError, ReportError, Result};
pub use job::{JobOutcome, ReportJob};
pub use model::{FailedItem, ReportEntry, ReportModel, SubItem};
pub use registry::ReportRegistry;
pub use source::ReportSource;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Whether a report only lists entities or also correlates items under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDepth {
    Basic,
    Full,
}

/// Every report the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    InventoryBasic,
    InventoryFull,
    GenresBasic,
    GenresFull,
    PeopleBasic,
    PeopleFull,
    TagsBasic,
    TagsFull,
    StudiosBasic,
    StudiosFull,
    /// Years only ship a full variant.
    YearsFull,
}

impl ReportKind {
    pub const ALL: [ReportKind; 11] = [
        ReportKind::InventoryBasic,
        ReportKind::InventoryFull,
        ReportKind::GenresBasic,
        ReportKind::GenresFull,
        ReportKind::PeopleBasic,
        ReportKind::PeopleFull,
        ReportKind::TagsBasic,
        ReportKind::TagsFull,
        ReportKind::StudiosBasic,
        ReportKind::StudiosFull,
        ReportKind::YearsFull,
    ];

    pub fn depth(&self) -> ReportDepth {
        match self {
            Self::InventoryBasic
            | Self::GenresBasic
            | Self::PeopleBasic
            | Self::TagsBasic
            | Self::StudiosBasic => ReportDepth::Basic,
            Self::InventoryFull
            | Self::GenresFull
            | Self::PeopleFull
            | Self::TagsFull
            | Self::StudiosFull
            | Self::YearsFull => ReportDepth::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InventoryBasic => "inventory-basic",
            Self::InventoryFull => "inventory-full",
            Self::GenresBasic => "genres-basic",
            Self::GenresFull => "genres-full",
            Self::PeopleBasic => "people-basic",
            Self::PeopleFull => "people-full",
            Self::TagsBasic => "tags-basic",
            Self::TagsFull => "tags-full",
            Self::StudiosBasic => "studios-basic",
            Self::StudiosFull => "studios-full",
            Self::YearsFull => "years-full",
        }
    }

    /// One-line description for CLI listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InventoryBasic => "Library folders and their details",
            Self::InventoryFull => "Library folders with every direct child item",
            Self::GenresBasic => "All genres in the library",
            Self::GenresFull => "Genres with the episodes that carry them",
            Self::PeopleBasic => "All people credited in the library",
            Self::PeopleFull => "People with the episodes they are credited on",
            Self::TagsBasic => "All tags in the library",
            Self::TagsFull => "Tags with the episodes that carry them",
            Self::StudiosBasic => "All studios in the library",
            Self::StudiosFull => "Studios with the episodes they produced",
            Self::YearsFull => "Production years with the episodes released in them",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
