//! Request ledger: a bounded log of API calls plus the running daily cost
//! counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::GenerationRequest;

/// Maximum number of retained log entries. Oldest evicted first.
pub const MAX_ENTRIES: usize = 50;

/// Compact summary of a successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub artifact_count: usize,
    pub total_cost: f64,
}

/// One logged API call, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub request: GenerationRequest,
    pub response: Option<ResponseSummary>,
    pub error: Option<String>,
    pub duration_secs: f64,
    pub cost: Option<f64>,
}

impl LogEntry {
    /// Entry for a call that produced a response.
    pub fn success(
        request: GenerationRequest,
        summary: ResponseSummary,
        duration_secs: f64,
        cost: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            request,
            response: Some(summary),
            error: None,
            duration_secs,
            cost: Some(cost),
        }
    }

    /// Entry for a call that failed before a response was decoded.
    pub fn failure(request: GenerationRequest, error: String, duration_secs: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            request,
            response: None,
            error: Some(error),
            duration_secs,
            cost: None,
        }
    }
}

/// Append-only log of the most recent API calls, newest first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RequestLog {
    entries: Vec<LogEntry>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at the front; evicts the oldest entry once the log
    /// exceeds [`MAX_ENTRIES`].
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.truncate(MAX_ENTRIES);
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running cost total for the current calendar day.
///
/// The first write on a new calendar day replaces the total instead of
/// accumulating into it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyCostCounter {
    pub total: f64,
    pub last_update: DateTime<Utc>,
}

impl DailyCostCounter {
    pub fn new(total: f64, last_update: DateTime<Utc>) -> Self {
        Self { total, last_update }
    }

    /// Record a cost observed at `now`.
    pub fn record(&mut self, cost: f64, now: DateTime<Utc>) {
        if self.last_update.date_naive() != now.date_naive() {
            self.total = cost;
        } else {
            self.total += cost;
        }
        self.last_update = now;
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Default for DailyCostCounter {
    fn default() -> Self {
        Self {
            total: 0.0,
            // Distant past so the first recorded cost starts a fresh day.
            last_update: DateTime::<Utc>::MIN_UTC,
        }
    }
}
