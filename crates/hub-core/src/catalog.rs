use crate::error::{HubError, Result};
use crate::paths;
use crate::types::{Category, Difficulty, Scope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Curated starter catalog, compiled into the binary.
const BUILTIN_IDEAS: &str = include_str!("../data/ideas.json");

// ---------------------------------------------------------------------------
// ProjectIdea
// ---------------------------------------------------------------------------

/// One buildable project in the catalog. Read-only at runtime; the tracked
/// state (status, roadmap membership) lives elsewhere and refers to it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Skill tags; the distinct union across the catalog is the skill universe.
    pub skills: Vec<String>,
    /// Assistant-workflow tags exercised by the project.
    #[serde(default)]
    pub features: Vec<String>,
    pub category: Category,
    pub scope: Scope,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
    ideas: Vec<ProjectIdea>,
}

impl Catalog {
    pub fn new(ideas: Vec<ProjectIdea>) -> Self {
        Self { ideas }
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Result<Self> {
        let ideas: Vec<ProjectIdea> = serde_json::from_str(BUILTIN_IDEAS)?;
        Ok(Self::new(ideas))
    }

    /// Load the catalog for a workspace.
    ///
    /// A workspace can replace the builtin catalog by dropping
    /// `.hub/catalog.yaml` (or `.hub/catalog.json`) into place; YAML wins
    /// when both exist. Unlike tracked state, an override that fails to
    /// parse is a hard error, not a silent fallback to the builtin list.
    pub fn load(root: &Path) -> Result<Self> {
        let yaml = paths::catalog_yaml_path(root);
        if yaml.exists() {
            let raw = std::fs::read_to_string(&yaml)?;
            let ideas: Vec<ProjectIdea> = serde_yaml::from_str(&raw)?;
            return Ok(Self::new(ideas));
        }
        let json = paths::catalog_json_path(root);
        if json.exists() {
            let raw = std::fs::read_to_string(&json)?;
            let ideas: Vec<ProjectIdea> = serde_json::from_str(&raw)?;
            return Ok(Self::new(ideas));
        }
        Self::builtin()
    }

    pub fn ideas(&self) -> &[ProjectIdea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ProjectIdea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&ProjectIdea> {
        self.find(id)
            .ok_or_else(|| HubError::UnknownProject(id.to_string()))
    }

    /// Distinct skill tags across the catalog, sorted.
    pub fn all_skills(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .ideas
            .iter()
            .flat_map(|idea| idea.skills.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    pub fn skill_count(&self) -> usize {
        self.all_skills().len()
    }

    /// Categories that appear in at least one idea, in declaration order.
    pub fn categories(&self) -> Vec<Category> {
        Category::all()
            .iter()
            .copied()
            .filter(|c| self.ideas.iter().any(|idea| idea.category == *c))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// IdeaFilter
// ---------------------------------------------------------------------------

/// Conjunctive catalog filter: every populated field must match.
#[derive(Debug, Clone, Default)]
pub struct IdeaFilter {
    /// Required skill tags; an idea must carry all of them.
    pub skills: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    /// Case-insensitive substring over title, description, and skill tags.
    pub query: Option<String>,
}

impl IdeaFilter {
    pub fn matches(&self, idea: &ProjectIdea) -> bool {
        if !self.skills.iter().all(|s| idea.skills.contains(s)) {
            return false;
        }
        if let Some(difficulty) = self.difficulty {
            if idea.difficulty != difficulty {
                return false;
            }
        }
        if let Some(category) = self.category {
            if idea.category != category {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let in_title = idea.title.to_lowercase().contains(&needle);
            let in_description = idea.description.to_lowercase().contains(&needle);
            let in_skills = idea
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&needle));
            if !(in_title || in_description || in_skills) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectIdea> {
        catalog
            .ideas()
            .iter()
            .filter(|idea| self.matches(idea))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
