mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    ideas::IdeasSubcommand, project::ProjectSubcommand, roadmap::RoadmapSubcommand,
    skill::SkillSubcommand, theme::ThemeSubcommand, wizard::WizardSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hub",
    about = "Browse project ideas, track skill and project progress, and plan what to build next",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .hub/ or .git/)
    #[arg(long, global = true, env = "HUB_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the hub in the current workspace
    Init,

    /// Browse the project-idea catalog
    Ideas {
        #[command(subcommand)]
        subcommand: IdeasSubcommand,
    },

    /// Track per-project completion status
    Project {
        #[command(subcommand)]
        subcommand: ProjectSubcommand,
    },

    /// Rate and review skill proficiency
    Skill {
        #[command(subcommand)]
        subcommand: SkillSubcommand,
    },

    /// Build and maintain learning roadmaps
    Roadmap {
        #[command(subcommand)]
        subcommand: RoadmapSubcommand,
    },

    /// Step through the guided onboarding walkthrough
    Wizard {
        #[command(subcommand)]
        subcommand: Option<WizardSubcommand>,
    },

    /// Show or switch the color theme
    Theme {
        #[command(subcommand)]
        subcommand: Option<ThemeSubcommand>,
    },

    /// Suggest the next projects to build
    Recommend {
        /// Number of suggestions
        #[arg(long, short = 'n', default_value = "3")]
        count: usize,
    },

    /// Project and skill progress at a glance
    Progress,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Ideas { subcommand } => cmd::ideas::run(&root, subcommand, cli.json),
        Commands::Project { subcommand } => cmd::project::run(&root, subcommand, cli.json),
        Commands::Skill { subcommand } => cmd::skill::run(&root, subcommand, cli.json),
        Commands::Roadmap { subcommand } => cmd::roadmap::run(&root, subcommand, cli.json),
        Commands::Wizard { subcommand } => cmd::wizard::run(&root, subcommand, cli.json),
        Commands::Theme { subcommand } => cmd::theme::run(&root, subcommand, cli.json),
        Commands::Recommend { count } => cmd::recommend::run(&root, count, cli.json),
        Commands::Progress => cmd::progress::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
