//! Shared test harness for report integration tests.
//!
//! Provides [`MockInstance`], a wiremock-backed fake media server with
//! helpers for mounting collection, folder, and metadata endpoints, plus
//! JSON fixture builders and a [`RecordingRenderer`] that captures models.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tallyfin::render::Renderer;
use tallyfin::reports::ReportModel;
use tallyfin_api::Credentials;

pub const ADMIN_USER: &str = "admin-1";
pub const API_KEY: &str = "test-token";

/// A fake media server instance.
pub struct MockInstance {
    pub server: MockServer,
}

impl MockInstance {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.server.uri(), API_KEY, ADMIN_USER)
    }

    /// Mount a collection endpoint answering with the given items.
    pub async fn mount_collection(&self, endpoint: &str, items: Vec<Value>) {
        let total = items.len();
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}")))
            .and(query_param("ApiKey", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Items": items,
                "TotalRecordCount": total,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a collection endpoint answering with an error status.
    pub async fn mount_collection_error(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mount one folder's direct children.
    pub async fn mount_folder_items(&self, folder_id: &str, items: Vec<Value>) {
        let total = items.len();
        Mock::given(method("GET"))
            .and(path(format!("/Users/{ADMIN_USER}/Items")))
            .and(query_param("ApiKey", API_KEY))
            .and(query_param("ParentId", folder_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Items": items,
                "TotalRecordCount": total,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount the metadata endpoint for one item id.
    pub async fn mount_metadata(&self, item_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/Users/{ADMIN_USER}/Items/{item_id}")))
            .and(query_param("ApiKey", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a failing metadata endpoint for one item id.
    pub async fn mount_metadata_error(&self, item_id: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/Users/{ADMIN_USER}/Items/{item_id}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

pub fn entity(id: &str, name: &str) -> Value {
    json!({ "Id": id, "Name": name })
}

pub fn folder(id: &str, name: &str) -> Value {
    json!({ "Id": id, "Name": name, "CollectionType": "tvshows" })
}

pub fn item(id: &str, name: &str) -> Value {
    json!({ "Id": id, "Name": name, "Type": "Episode" })
}

/// Metadata with no reference lists, for entity own-metadata mounts.
pub fn plain_metadata(id: &str, name: &str) -> Value {
    json!({ "Id": id, "Name": name })
}

/// Episode metadata carrying studio references.
pub fn episode_metadata(id: &str, name: &str, series: &str, studios: &[(&str, &str)]) -> Value {
    let mut value = linked_metadata(id, name, "Studios", studios);
    value["SeriesName"] = json!(series);
    value
}

/// Metadata with one populated reference list (`Studios`, `GenreItems`,
/// `TagItems`, or `People`).
pub fn linked_metadata(id: &str, name: &str, list_field: &str, refs: &[(&str, &str)]) -> Value {
    let entries: Vec<Value> = refs
        .iter()
        .map(|(rid, rname)| json!({ "Id": rid, "Name": rname }))
        .collect();
    let mut value = json!({ "Id": id, "Name": name });
    value[list_field] = Value::Array(entries);
    value
}

// ---------------------------------------------------------------------------
// Recording renderer
// ---------------------------------------------------------------------------

/// Captures every rendered model for assertions.
#[derive(Default)]
pub struct RecordingRenderer {
    models: Mutex<Vec<ReportModel>>,
}

impl RecordingRenderer {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn models(&self) -> Vec<ReportModel> {
        self.models.lock().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, model: &ReportModel) -> anyhow::Result<()> {
        self.models.lock().push(model.clone());
        Ok(())
    }
}
