//! Typed client for the Jellyfin-compatible media server API.
//!
//! Exposes [`ApiClient`] plus the wire types the report engine consumes:
//! collection envelopes, item summaries, per-item metadata, and accounts.
//!
//! # Examples
//!
//! ```no_run
//! use tallyfin_api::{ApiClient, Credentials, EntityCollection};
//!
//! # async fn demo() -> tallyfin_api::Result<()> {
//! let client = ApiClient::new(Credentials::new(
//!     "http://media.local:8096",
//!     "api-token",
//!     "admin-user-id",
//! ));
//! let studios = client.entities(EntityCollection::Studios).await?;
//! println!("{} studios", studios.total_record_count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dto;
pub mod error;

pub use client::{ApiClient, Credentials, EntityCollection};
pub use dto::{
    Collection, EntitySummary, FolderSummary, ItemMetadata, ItemSummary, NameIdPair, PersonRef,
    User, UserPolicy,
};
pub use error::{ApiError, Result};
