use crate::cell::StateCell;
use crate::paths::SKILLS_KEY;
use crate::store::Store;
use crate::types::SkillLevel;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SkillProgress
// ---------------------------------------------------------------------------

/// One rated skill. Skills the user has never rated have no record and read
/// as not-started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProgress {
    pub skill_id: String,
    pub level: SkillLevel,
}

/// Counts of rated skills per level; `total` is the size of the catalog's
/// skill universe, not the number of rated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillStats {
    pub learning: usize,
    pub comfortable: usize,
    pub mastered: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// SkillTracker
// ---------------------------------------------------------------------------

pub struct SkillTracker<'s> {
    cell: StateCell<'s, Vec<SkillProgress>>,
    skill_total: usize,
}

impl<'s> SkillTracker<'s> {
    /// `skill_total` is the number of distinct skill tags in the catalog.
    pub fn load(store: &'s Store, skill_total: usize) -> Self {
        Self {
            cell: StateCell::load(store, SKILLS_KEY, Vec::new()),
            skill_total,
        }
    }

    /// Replace-or-append the record for `skill_id`. Whole-record replacement;
    /// there is nothing to merge.
    pub fn update_skill(&mut self, skill_id: &str, level: SkillLevel) {
        self.cell.update(|records| {
            let entry = SkillProgress {
                skill_id: skill_id.to_string(),
                level,
            };
            match records.iter_mut().find(|r| r.skill_id == skill_id) {
                Some(existing) => *existing = entry,
                None => records.push(entry),
            }
        });
    }

    /// Stored level, or not-started for unrated skills.
    pub fn level_of(&self, skill_id: &str) -> SkillLevel {
        self.cell
            .get()
            .iter()
            .find(|r| r.skill_id == skill_id)
            .map(|r| r.level)
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[SkillProgress] {
        self.cell.get()
    }

    pub fn stats(&self) -> SkillStats {
        let records = self.cell.get();
        let count = |level: SkillLevel| records.iter().filter(|r| r.level == level).count();
        SkillStats {
            learning: count(SkillLevel::Learning),
            comfortable: count(SkillLevel::Comfortable),
            mastered: count(SkillLevel::Mastered),
            total: self.skill_total,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrated_skill_reads_not_started() {
        let store = Store::in_memory();
        let t = SkillTracker::load(&store, 16);
        assert_eq!(t.level_of("React"), SkillLevel::NotStarted);
        assert!(t.entries().is_empty());
    }

    #[test]
    fn update_then_read() {
        let store = Store::in_memory();
        let mut t = SkillTracker::load(&store, 16);
        t.update_skill("React", SkillLevel::Learning);
        assert_eq!(t.level_of("React"), SkillLevel::Learning);
    }

    #[test]
    fn update_replaces_rather_than_duplicates() {
        let store = Store::in_memory();
        let mut t = SkillTracker::load(&store, 16);
        t.update_skill("React", SkillLevel::Learning);
        t.update_skill("React", SkillLevel::Mastered);
        assert_eq!(t.entries().len(), 1);
        assert_eq!(t.level_of("React"), SkillLevel::Mastered);
    }

    #[test]
    fn explicit_not_started_keeps_a_record() {
        let store = Store::in_memory();
        let mut t = SkillTracker::load(&store, 16);
        t.update_skill("React", SkillLevel::Learning);
        t.update_skill("React", SkillLevel::NotStarted);
        assert_eq!(t.entries().len(), 1);
        assert_eq!(t.level_of("React"), SkillLevel::NotStarted);
    }

    #[test]
    fn stats_count_by_level_with_catalog_total() {
        let store = Store::in_memory();
        let mut t = SkillTracker::load(&store, 16);
        t.update_skill("React", SkillLevel::Learning);
        t.update_skill("CSS", SkillLevel::Learning);
        t.update_skill("Git", SkillLevel::Comfortable);
        t.update_skill("Node.js", SkillLevel::Mastered);
        t.update_skill("Testing", SkillLevel::NotStarted);

        let stats = t.stats();
        assert_eq!(stats.learning, 2);
        assert_eq!(stats.comfortable, 1);
        assert_eq!(stats.mastered, 1);
        // The total is the skill universe, not the five rated records.
        assert_eq!(stats.total, 16);
    }

    #[test]
    fn ratings_persist_across_reloads() {
        let store = Store::in_memory();
        {
            let mut t = SkillTracker::load(&store, 16);
            t.update_skill("React", SkillLevel::Comfortable);
        }
        let t = SkillTracker::load(&store, 16);
        assert_eq!(t.level_of("React"), SkillLevel::Comfortable);
    }

    #[test]
    fn stored_shape_uses_camel_case_keys() {
        let store = Store::in_memory();
        let mut t = SkillTracker::load(&store, 16);
        t.update_skill("React", SkillLevel::Learning);

        let raw: serde_json::Value = store.get(SKILLS_KEY, serde_json::Value::Null);
        assert_eq!(raw[0]["skillId"], "React");
        assert_eq!(raw[0]["level"], "learning");
    }
}
