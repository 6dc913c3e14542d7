//! HTTP client for the media server API.
//!
//! Every request is a GET authenticated by an `ApiKey` query parameter.
//! Collection endpoints are fetched in a single request each (the server
//! returns complete collections annotated with a total count). The client
//! performs no retries and sets no timeout beyond the transport default, so
//! callers that need bounded latency must impose their own.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dto::{Collection, EntitySummary, FolderSummary, ItemMetadata, ItemSummary, User};
use crate::error::{ApiError, Result};

/// Connection details for one server instance.
///
/// Immutable once a job starts; cheap to clone and safe to share across
/// concurrently running jobs.
#[derive(Debug, Clone)]
pub struct Credentials {
    base_url: String,
    api_token: String,
    admin_user_id: String,
}

impl Credentials {
    /// Create credentials, trimming any trailing `/` off the base URL.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        admin_user_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            admin_user_id: admin_user_id.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn admin_user_id(&self) -> &str {
        &self.admin_user_id
    }
}

/// The entity collections a report can be organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCollection {
    People,
    Studios,
    Genres,
    Tags,
    Years,
}

impl EntityCollection {
    /// Endpoint path for this collection. People live under `Persons` on
    /// the wire.
    pub fn path(&self) -> &'static str {
        match self {
            Self::People => "Persons",
            Self::Studios => "Studios",
            Self::Genres => "Genres",
            Self::Tags => "Tags",
            Self::Years => "Years",
        }
    }
}

/// Client for one server instance.
pub struct ApiClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    /// Build a request URL: `base/path?ApiKey=token` plus extra query pairs.
    ///
    /// Query values are appended verbatim, not URL-escaped: everything that
    /// lands here (record ids, the admin user id) originates from the API
    /// itself. Callers passing anything else must pre-sanitize it.
    fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{path}?ApiKey={}",
            self.credentials.base_url, self.credentials.api_token
        );
        for (key, value) in query {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }

    /// Issue a GET and decode the body.
    ///
    /// Anything other than a literal 200 is a hard failure, including other
    /// 2xx codes. The body is read as text first so transport and decode
    /// failures stay distinguishable.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path, query);
        debug!(path = %path, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::transport(path, e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ApiError::http(path, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(path, e))?;

        serde_json::from_str(&body).map_err(|e| ApiError::decode(path, e))
    }

    /// Fetch a complete entity collection, scoped to the admin user.
    pub async fn entities(
        &self,
        collection: EntityCollection,
    ) -> Result<Collection<EntitySummary>> {
        self.get_json(
            collection.path(),
            &[("userId", self.credentials.admin_user_id.as_str())],
        )
        .await
    }

    /// Fetch the top-level library folders.
    pub async fn media_folders(&self) -> Result<Collection<FolderSummary>> {
        self.get_json("Library/MediaFolders", &[]).await
    }

    /// Fetch a folder's direct child items.
    pub async fn folder_items(&self, parent_id: &str) -> Result<Collection<ItemSummary>> {
        let path = format!("Users/{}/Items", self.credentials.admin_user_id);
        self.get_json(&path, &[("ParentId", parent_id)]).await
    }

    /// Fetch extended metadata for a single item or entity id.
    pub async fn item_metadata(&self, item_id: &str) -> Result<ItemMetadata> {
        let path = format!("Users/{}/Items/{item_id}", self.credentials.admin_user_id);
        self.get_json(&path, &[]).await
    }

    /// Fetch all accounts. Unlike the collection endpoints this answers
    /// with a bare JSON array, no envelope.
    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json("Users", &[]).await
    }
}
