use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::NotStarted,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "not-started",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::NotStarted
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(ProjectStatus::NotStarted),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(crate::error::HubError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SkillLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    NotStarted,
    Learning,
    Comfortable,
    Mastered,
}

impl SkillLevel {
    pub fn all() -> &'static [SkillLevel] {
        &[
            SkillLevel::NotStarted,
            SkillLevel::Learning,
            SkillLevel::Comfortable,
            SkillLevel::Mastered,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::NotStarted => "not-started",
            SkillLevel::Learning => "learning",
            SkillLevel::Comfortable => "comfortable",
            SkillLevel::Mastered => "mastered",
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::NotStarted
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(SkillLevel::NotStarted),
            "learning" => Ok(SkillLevel::Learning),
            "comfortable" => Ok(SkillLevel::Comfortable),
            "mastered" => Ok(SkillLevel::Mastered),
            _ => Err(crate::error::HubError::InvalidSkillLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(crate::error::HubError::InvalidDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DeveloperTools,
    WebApp,
    Automation,
    DataApi,
    Learning,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::DeveloperTools,
            Category::WebApp,
            Category::Automation,
            Category::DataApi,
            Category::Learning,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::DeveloperTools => "developer-tools",
            Category::WebApp => "web-app",
            Category::Automation => "automation",
            Category::DataApi => "data-api",
            Category::Learning => "learning",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Category::DeveloperTools => "Developer Tools",
            Category::WebApp => "Web App",
            Category::Automation => "Automation",
            Category::DataApi => "Data & APIs",
            Category::Learning => "Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer-tools" => Ok(Category::DeveloperTools),
            "web-app" => Ok(Category::WebApp),
            "automation" => Ok(Category::Automation),
            "data-api" => Ok(Category::DataApi),
            "learning" => Ok(Category::Learning),
            _ => Err(crate::error::HubError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Weekend,
    MultiDay,
    WeekPlus,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Weekend => "weekend",
            Scope::MultiDay => "multi-day",
            Scope::WeekPlus => "week-plus",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Scope::Weekend => "Weekend",
            Scope::MultiDay => "Multi-day",
            Scope::WeekPlus => "Week+",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekend" => Ok(Scope::Weekend),
            "multi-day" => Ok(Scope::MultiDay),
            "week-plus" => Ok(Scope::WeekPlus),
            _ => Err(crate::error::HubError::InvalidScope(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(crate::error::HubError::InvalidTheme(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
