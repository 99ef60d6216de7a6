use crate::cell::StateCell;
use crate::paths::STATUS_KEY;
use crate::store::Store;
use crate::types::ProjectStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// StatusRecord
// ---------------------------------------------------------------------------

/// Tracked state for one project. A record exists only once the user has
/// touched the project; everything else is implicitly not-started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub project_id: String,
    pub status: ProjectStatus,
    /// Stamped on every transition into in-progress, preserved across the
    /// other transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Present only while the status is completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Derived completion counts over the whole catalog.
///
/// `not_started` covers untouched projects too, so it is computed from the
/// catalog size rather than counted from explicit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStats {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// StatusTracker
// ---------------------------------------------------------------------------

pub struct StatusTracker<'s> {
    cell: StateCell<'s, Vec<StatusRecord>>,
    catalog_total: usize,
}

impl<'s> StatusTracker<'s> {
    /// `catalog_total` is the full catalog size, used for derived stats.
    pub fn load(store: &'s Store, catalog_total: usize) -> Self {
        Self {
            cell: StateCell::load(store, STATUS_KEY, Vec::new()),
            catalog_total,
        }
    }

    /// Upsert the status for one project, keeping at most one record per id.
    pub fn update_status(&mut self, project_id: &str, status: ProjectStatus) {
        let now = Utc::now();
        self.cell.update(|records| {
            let previous_start = records
                .iter()
                .find(|r| r.project_id == project_id)
                .and_then(|r| r.started_at);
            let entry = StatusRecord {
                project_id: project_id.to_string(),
                status,
                started_at: if status == ProjectStatus::InProgress {
                    Some(now)
                } else {
                    previous_start
                },
                completed_at: if status == ProjectStatus::Completed {
                    Some(now)
                } else {
                    None
                },
            };
            match records.iter_mut().find(|r| r.project_id == project_id) {
                Some(existing) => *existing = entry,
                None => records.push(entry),
            }
        });
    }

    /// Effective status; untracked projects read as not-started.
    pub fn status_of(&self, project_id: &str) -> ProjectStatus {
        self.record(project_id)
            .map(|r| r.status)
            .unwrap_or_default()
    }

    pub fn record(&self, project_id: &str) -> Option<&StatusRecord> {
        self.cell.get().iter().find(|r| r.project_id == project_id)
    }

    pub fn records(&self) -> &[StatusRecord] {
        self.cell.get()
    }

    pub fn completed_ids(&self) -> Vec<String> {
        self.cell
            .get()
            .iter()
            .filter(|r| r.status == ProjectStatus::Completed)
            .map(|r| r.project_id.clone())
            .collect()
    }

    pub fn stats(&self) -> StatusStats {
        let records = self.cell.get();
        let in_progress = records
            .iter()
            .filter(|r| r.status == ProjectStatus::InProgress)
            .count();
        let completed = records
            .iter()
            .filter(|r| r.status == ProjectStatus::Completed)
            .count();
        StatusStats {
            not_started: self.catalog_total.saturating_sub(in_progress + completed),
            in_progress,
            completed,
            total: self.catalog_total,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
