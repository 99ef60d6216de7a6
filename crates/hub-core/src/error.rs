use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("unknown project id: {0}")]
    UnknownProject(String),

    #[error("roadmap not found: {0}")]
    RoadmapNotFound(String),

    #[error("project '{project}' is not in roadmap '{roadmap}'")]
    ProjectNotInRoadmap { roadmap: String, project: String },

    #[error("invalid status '{0}': expected not-started, in-progress, or completed")]
    InvalidStatus(String),

    #[error("invalid skill level '{0}': expected not-started, learning, comfortable, or mastered")]
    InvalidSkillLevel(String),

    #[error("invalid difficulty '{0}': expected beginner, intermediate, or advanced")]
    InvalidDifficulty(String),

    #[error("invalid category '{0}': expected developer-tools, web-app, automation, data-api, or learning")]
    InvalidCategory(String),

    #[error("invalid scope '{0}': expected weekend, multi-day, or week-plus")]
    InvalidScope(String),

    #[error("invalid theme '{0}': expected dark or light")]
    InvalidTheme(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;
