//! Generation orchestrator: drives compose, transmit, artifact retrieval,
//! and persistence for one generation call, and owns the in-memory gallery.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{AspectRatio, ContentSeries};
use crate::composer::{self, ComposeInput};
use crate::error::{AppError, Result};
use crate::export::base64 as b64;
use crate::ledger::{DailyCostCounter, LogEntry, RequestLog, ResponseSummary};
use crate::store::{keys, KvStore};
use crate::transport::{Artifact, Transport};

/// Observable state of the single in-flight generation.
///
/// `Idle -> InProgress -> Completed | Failed`, returning to the start of
/// the cycle on the next invocation. There is no cancel transition; once
/// transmitted, a request runs to completion or failure.
#[derive(Debug, Clone)]
pub enum GenerationState {
    Idle,
    InProgress(f64),
    Completed(GenerationRecord),
    Failed(String),
}

/// Durable record of one successfully retrieved image plus its generation
/// context. Replace-on-regenerate; removed only by explicit delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: Uuid,
    /// The raw prompt as typed, before any enhancement.
    pub prompt: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, with = "b64::opt_bytes")]
    pub image_data: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub seed: Option<i64>,
    pub model: String,
    #[serde(default)]
    pub cost: Option<f64>,
    // Older stored galleries predate these two fields.
    #[serde(default)]
    pub series: Option<ContentSeries>,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

impl GenerationRecord {
    fn from_artifact(
        artifact: &Artifact,
        bytes: Option<Vec<u8>>,
        input: &ComposeInput,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: input.raw_prompt.clone(),
            image_url: artifact.image_url.clone(),
            image_data: bytes,
            created_at: Utc::now(),
            seed: artifact.seed,
            model: input.model.id().to_string(),
            cost: artifact.cost,
            series: Some(input.series),
            aspect_ratio: input.aspect_ratio,
        }
    }
}

/// Sequences generation calls and owns the gallery, request log, and daily
/// cost counter. All collections are touched only from the single call
/// path; the locks exist for shared read access, not writer contention.
pub struct Orchestrator {
    transport: Arc<dyn Transport>,
    state: RwLock<GenerationState>,
    gallery: RwLock<Vec<GenerationRecord>>,
    log: RwLock<RequestLog>,
    daily_cost: RwLock<DailyCostCounter>,
    store: Mutex<KvStore>,
}

impl Orchestrator {
    /// Build an orchestrator over the given transport, loading the gallery,
    /// request log, and cost counter from the store.
    pub fn new(transport: Arc<dyn Transport>, store: KvStore) -> Self {
        let gallery: Vec<GenerationRecord> =
            store.get(keys::SAVED_RECORDS).unwrap_or_default();
        let log: RequestLog = store.get(keys::REQUEST_LOGS).unwrap_or_default();
        let total: f64 = store.get(keys::TOTAL_COST_TODAY).unwrap_or(0.0);
        let last_update: DateTime<Utc> = store
            .get(keys::LAST_COST_UPDATE)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        debug!(
            records = gallery.len(),
            log_entries = log.len(),
            "Loaded collections from store"
        );

        Self {
            transport,
            state: RwLock::new(GenerationState::Idle),
            gallery: RwLock::new(gallery),
            log: RwLock::new(log),
            daily_cost: RwLock::new(DailyCostCounter::new(total, last_update)),
            store: Mutex::new(store),
        }
    }

    /// Current state of the in-flight (or last) generation.
    pub fn state(&self) -> GenerationState {
        self.state.read().clone()
    }

    /// Gallery snapshot, newest first.
    pub fn records(&self) -> Vec<GenerationRecord> {
        self.gallery.read().clone()
    }

    /// Request log snapshot, newest first.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.log.read().entries().to_vec()
    }

    /// Running cost total for the current calendar day.
    pub fn daily_cost(&self) -> f64 {
        self.daily_cost.read().total()
    }

    /// Run one full generation: compose, transmit, retrieve artifacts,
    /// persist, and log. Returns the records that were stored; transitions
    /// to `Completed` when at least one record was produced.
    pub async fn generate(&self, input: &ComposeInput) -> Result<Vec<GenerationRecord>> {
        *self.state.write() = GenerationState::InProgress(0.1);

        let request = match composer::compose(input) {
            Ok(request) => request,
            Err(e) => {
                *self.state.write() = GenerationState::Failed(e.to_string());
                return Err(e);
            }
        };

        info!(
            task_uuid = %request.task_uuid,
            model = %request.model,
            count = ?request.number_results,
            "Starting generation"
        );

        let started = Instant::now();
        *self.state.write() = GenerationState::InProgress(0.5);

        let response = match self.transport.generate(&request).await {
            Ok(response) => response,
            Err(e) => {
                let duration = started.elapsed().as_secs_f64();
                let message = e.to_string();
                {
                    let mut log = self.log.write();
                    log.append(LogEntry::failure(request, message.clone(), duration));
                    self.persist_log(&log);
                }
                *self.state.write() = GenerationState::Failed(message);
                return Err(e);
            }
        };

        // Retrieve artifacts one at a time; a failed retrieval drops that
        // artifact from the results without failing the batch.
        let mut new_records = Vec::new();
        for artifact in &response.data {
            match self.resolve_artifact_bytes(artifact).await {
                Ok(bytes) => {
                    new_records.push(GenerationRecord::from_artifact(artifact, Some(bytes), input));
                }
                Err(e) => {
                    warn!(
                        image_uuid = ?artifact.image_uuid,
                        error = %e,
                        "Dropping artifact that could not be retrieved"
                    );
                }
            }
        }

        if !new_records.is_empty() {
            let mut gallery = self.gallery.write();
            for record in new_records.iter().rev() {
                gallery.insert(0, record.clone());
            }
            self.persist_gallery(&gallery);
        }

        let duration = started.elapsed().as_secs_f64();
        let total_cost: f64 = response.data.iter().filter_map(|a| a.cost).sum();
        {
            let mut log = self.log.write();
            log.append(LogEntry::success(
                request,
                ResponseSummary {
                    artifact_count: response.data.len(),
                    total_cost,
                },
                duration,
                total_cost,
            ));
            self.persist_log(&log);
        }
        self.record_cost(total_cost);

        info!(
            stored = new_records.len(),
            returned = response.data.len(),
            cost = total_cost,
            "Generation finished"
        );

        match new_records.first() {
            Some(first) => *self.state.write() = GenerationState::Completed(first.clone()),
            None => {
                *self.state.write() =
                    GenerationState::Failed("No images could be retrieved".to_string())
            }
        }

        Ok(new_records)
    }

    /// Re-run the full pipeline reusing a stored record's prompt text as
    /// the raw prompt. Style, series, model, and ratio come from the
    /// current selections, not the original record.
    pub async fn regenerate(
        &self,
        record_id: Uuid,
        current: &ComposeInput,
    ) -> Result<Vec<GenerationRecord>> {
        let prompt = {
            let gallery = self.gallery.read();
            gallery
                .iter()
                .find(|r| r.id == record_id)
                .map(|r| r.prompt.clone())
                .ok_or_else(|| AppError::RecordNotFound(record_id.to_string()))?
        };

        let mut input = current.clone();
        input.raw_prompt = prompt;
        self.generate(&input).await
    }

    /// Remove a record from the gallery and persist the collection.
    pub fn delete(&self, record_id: Uuid) -> Result<()> {
        let mut gallery = self.gallery.write();
        let before = gallery.len();
        gallery.retain(|r| r.id != record_id);
        if gallery.len() == before {
            return Err(AppError::RecordNotFound(record_id.to_string()));
        }
        self.persist_gallery(&gallery);
        Ok(())
    }

    /// Find a record by id.
    pub fn record(&self, record_id: Uuid) -> Option<GenerationRecord> {
        self.gallery.read().iter().find(|r| r.id == record_id).cloned()
    }

    async fn resolve_artifact_bytes(&self, artifact: &Artifact) -> Result<Vec<u8>> {
        if let Some(url) = &artifact.image_url {
            return self.transport.fetch_artifact(url).await;
        }
        if let Some(inline) = artifact
            .image_base64_data
            .as_deref()
            .or(artifact.image_data_uri.as_deref())
        {
            return b64::decode(inline);
        }
        Err(AppError::ArtifactFetch(
            "artifact has no URL or inline data".to_string(),
        ))
    }

    /// Persist failures are logged and otherwise ignored; the in-memory
    /// collection stays authoritative for the session.
    fn persist_gallery(&self, gallery: &[GenerationRecord]) {
        let mut store = self.store.lock();
        if let Err(e) = store.set(keys::SAVED_RECORDS, &gallery) {
            warn!(error = %e, "Failed to persist gallery");
        }
    }

    fn persist_log(&self, log: &RequestLog) {
        let mut store = self.store.lock();
        if let Err(e) = store.set(keys::REQUEST_LOGS, log) {
            warn!(error = %e, "Failed to persist request log");
        }
    }

    fn record_cost(&self, cost: f64) {
        let now = Utc::now();
        let mut counter = self.daily_cost.write();
        counter.record(cost, now);

        let mut store = self.store.lock();
        let result = store
            .set(keys::TOTAL_COST_TODAY, &counter.total())
            .and(store.set(keys::LAST_COST_UPDATE, &counter.last_update));
        if let Err(e) = result {
            warn!(error = %e, "Failed to persist daily cost");
        }
    }
}
