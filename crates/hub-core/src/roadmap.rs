use crate::cell::StateCell;
use crate::error::{HubError, Result};
use crate::paths::ROADMAPS_KEY;
use crate::store::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Roadmap
// ---------------------------------------------------------------------------

/// A user-authored learning sequence: an ordered list of project ids under a
/// name. Order is meaningful; ids never repeat within one roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: String,
    pub name: String,
    pub project_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Roadmaps
// ---------------------------------------------------------------------------

pub struct Roadmaps<'s> {
    cell: StateCell<'s, Vec<Roadmap>>,
}

impl<'s> Roadmaps<'s> {
    pub fn load(store: &'s Store) -> Self {
        Self {
            cell: StateCell::load(store, ROADMAPS_KEY, Vec::new()),
        }
    }

    /// Create an empty roadmap and return its id. Names are trimmed before
    /// storing; a name that trims to nothing creates nothing.
    pub fn create(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        let roadmap = Roadmap {
            id: id.clone(),
            name: name.to_string(),
            project_ids: Vec::new(),
            created_at: Utc::now(),
        };
        self.cell.update(|all| all.push(roadmap));
        Some(id)
    }

    /// Millisecond-stamped id. Roadmaps are created interactively, so the
    /// stamp alone is nearly always unique; the suffix covers same-instant
    /// collisions.
    fn fresh_id(&self) -> String {
        let base = format!("roadmap-{}", Utc::now().timestamp_millis());
        let mut id = base.clone();
        let mut n = 1;
        while self.cell.get().iter().any(|r| r.id == id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        id
    }

    /// Remove a roadmap. Returns `false` if no roadmap has that id.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.cell.update(|all| all.retain(|r| r.id != id));
        true
    }

    pub fn get(&self, id: &str) -> Option<&Roadmap> {
        self.cell.get().iter().find(|r| r.id == id)
    }

    pub fn all(&self) -> &[Roadmap] {
        self.cell.get()
    }

    /// Append `project_id` unless already present. Returns `true` when the
    /// roadmap changed.
    pub fn add_project(&mut self, roadmap_id: &str, project_id: &str) -> bool {
        let can_add = self
            .get(roadmap_id)
            .map(|r| !r.project_ids.iter().any(|p| p == project_id))
            .unwrap_or(false);
        if !can_add {
            return false;
        }
        self.cell.update(|all| {
            if let Some(r) = all.iter_mut().find(|r| r.id == roadmap_id) {
                r.project_ids.push(project_id.to_string());
            }
        });
        true
    }

    /// Remove `project_id`, keeping the relative order of the rest. Returns
    /// `true` when the roadmap changed.
    pub fn remove_project(&mut self, roadmap_id: &str, project_id: &str) -> bool {
        let present = self
            .get(roadmap_id)
            .map(|r| r.project_ids.iter().any(|p| p == project_id))
            .unwrap_or(false);
        if !present {
            return false;
        }
        self.cell.update(|all| {
            if let Some(r) = all.iter_mut().find(|r| r.id == roadmap_id) {
                r.project_ids.retain(|p| p != project_id);
            }
        });
        true
    }

    /// Replace the project order wholesale. The caller supplies the new
    /// order; membership is not re-checked here (drag-reorder semantics).
    pub fn reorder(&mut self, roadmap_id: &str, new_order: Vec<String>) -> bool {
        if self.get(roadmap_id).is_none() {
            return false;
        }
        self.cell.update(|all| {
            if let Some(r) = all.iter_mut().find(|r| r.id == roadmap_id) {
                r.project_ids = new_order;
            }
        });
        true
    }

    /// Move one project to `to_index` (0-based, clamped to the end).
    pub fn move_project(&mut self, roadmap_id: &str, project_id: &str, to_index: usize) -> Result<()> {
        let roadmap = self
            .get(roadmap_id)
            .ok_or_else(|| HubError::RoadmapNotFound(roadmap_id.to_string()))?;
        let from = roadmap
            .project_ids
            .iter()
            .position(|p| p == project_id)
            .ok_or_else(|| HubError::ProjectNotInRoadmap {
                roadmap: roadmap_id.to_string(),
                project: project_id.to_string(),
            })?;

        let last = roadmap.project_ids.len() - 1;
        let to = to_index.min(last);
        if from == to {
            return Ok(());
        }
        self.cell.update(|all| {
            if let Some(r) = all.iter_mut().find(|r| r.id == roadmap_id) {
                let item = r.project_ids.remove(from);
                r.project_ids.insert(to, item);
            }
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
