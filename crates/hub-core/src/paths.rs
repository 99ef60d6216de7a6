use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory and key constants
// ---------------------------------------------------------------------------

pub const HUB_DIR: &str = ".hub";

/// Storage keys, one JSON document per key under the hub directory.
pub const STATUS_KEY: &str = "project-statuses";
pub const SKILLS_KEY: &str = "skill-progress";
pub const ROADMAPS_KEY: &str = "roadmaps";
pub const WIZARD_KEY: &str = "wizard-step";
pub const THEME_KEY: &str = "theme";

pub const CATALOG_YAML: &str = "catalog.yaml";
pub const CATALOG_JSON: &str = "catalog.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn hub_dir(root: &Path) -> PathBuf {
    root.join(HUB_DIR)
}

pub fn key_file(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

pub fn catalog_yaml_path(root: &Path) -> PathBuf {
    hub_dir(root).join(CATALOG_YAML)
}

pub fn catalog_json_path(root: &Path) -> PathBuf {
    hub_dir(root).join(CATALOG_JSON)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
