//! The report job: one background task per report request.
//!
//! A job owns nothing shared. It receives [`Credentials`] and a renderer,
//! builds its own client and registry, runs the pipeline sequentially, and
//! delivers exactly one [`JobOutcome`] over a oneshot channel. Callers
//! either await [`ReportJob::wait`] or poll [`ReportJob::is_done`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{info, warn};
use uuid::Uuid;

use tallyfin_api::{ApiClient, Credentials};

use crate::render::Renderer;

use super::error::ReportError;
use super::model::ReportModel;
use super::registry::ReportRegistry;
use super::ReportKind;

/// Terminal result of a report job.
#[derive(Debug)]
pub enum JobOutcome {
    /// Every step completed and no per-item fetch failed.
    Success(ReportModel),
    /// A model was produced and rendered, but some per-item metadata
    /// fetches failed; the model's `failed_items` lists them.
    PartialFailure(ReportModel),
    /// A non-recoverable step failed. No model was rendered.
    Failure(ReportError),
}

impl JobOutcome {
    /// The produced model, if any.
    pub fn model(&self) -> Option<&ReportModel> {
        match self {
            Self::Success(model) | Self::PartialFailure(model) => Some(model),
            Self::Failure(_) => None,
        }
    }
}

/// Handle to one running report request.
///
/// Each instance services exactly one request and never restarts. Dropping
/// the handle detaches the worker; the job still runs to completion.
pub struct ReportJob {
    id: Uuid,
    kind: ReportKind,
    done: Arc<AtomicBool>,
    outcome: oneshot::Receiver<JobOutcome>,
}

impl ReportJob {
    /// Spawn the worker task for one report. Must be called within a Tokio
    /// runtime.
    pub fn spawn(credentials: Credentials, kind: ReportKind, renderer: Arc<dyn Renderer>) -> Self {
        let id = Uuid::new_v4();
        let done = Arc::new(AtomicBool::new(false));
        let (tx, rx) = oneshot::channel();

        let task_done = Arc::clone(&done);
        tokio::spawn(async move {
            info!(job = %id, kind = %kind, "report job started");
            let client = ApiClient::new(credentials);
            let registry = ReportRegistry::with_defaults();
            let outcome = execute(&client, &registry, kind, renderer.as_ref()).await;

            match &outcome {
                JobOutcome::Success(model) => info!(
                    job = %id,
                    entities = model.entity_count,
                    sub_items = model.sub_item_count,
                    "report job finished"
                ),
                JobOutcome::PartialFailure(model) => warn!(
                    job = %id,
                    entities = model.entity_count,
                    failed_items = model.failed_items.len(),
                    "report job finished with per-item failures"
                ),
                JobOutcome::Failure(error) => {
                    warn!(job = %id, error = %error, "report job failed")
                }
            }

            // Deliver before flipping the flag: whoever observes
            // `is_done() == true` must find the outcome already waiting.
            let _ = tx.send(outcome);
            task_done.store(true, Ordering::Release);
        });

        Self {
            id,
            kind,
            done,
            outcome: rx,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Whether the worker has delivered its outcome. Once this reads true,
    /// [`wait`](Self::wait) returns immediately.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Wait for the outcome. Consumes the job, so the result is retrieved
    /// exactly once.
    pub async fn wait(self) -> JobOutcome {
        match self.outcome.await {
            Ok(outcome) => outcome,
            Err(_) => JobOutcome::Failure(ReportError::WorkerGone),
        }
    }
}

/// Run the report pipeline: route, load, correlate, build, render.
pub(crate) async fn execute(
    client: &ApiClient,
    registry: &ReportRegistry,
    kind: ReportKind,
    renderer: &dyn Renderer,
) -> JobOutcome {
    let Some(source) = registry.get(kind) else {
        return JobOutcome::Failure(ReportError::UnknownKind(kind));
    };

    let mut entries = match source.load(client).await {
        Ok(entries) => entries,
        Err(error) => return JobOutcome::Failure(error),
    };

    let failed_items = match source.correlate(client, &mut entries).await {
        Ok(failed) => failed,
        Err(error) => return JobOutcome::Failure(error),
    };

    let model = source.build(client, entries, failed_items);

    if let Err(error) = renderer.render(&model) {
        return JobOutcome::Failure(ReportError::Render(error.to_string()));
    }

    if model.is_partial() {
        JobOutcome::PartialFailure(model)
    } else {
        JobOutcome::Success(model)
    }
}
