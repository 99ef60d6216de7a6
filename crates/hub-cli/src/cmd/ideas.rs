use crate::output;
use anyhow::Context;
use clap::Subcommand;
use hub_core::catalog::{Catalog, IdeaFilter, ProjectIdea};
use hub_core::types::{Category, Difficulty};
use std::path::Path;

#[derive(Subcommand)]
pub enum IdeasSubcommand {
    /// List catalog ideas, optionally filtered
    List {
        /// Only ideas that teach this skill (repeatable)
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Only ideas at this difficulty (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<String>,
        /// Only ideas in this category (developer-tools, web-app, ...)
        #[arg(long)]
        category: Option<String>,
        /// Substring match against title, description, and skills
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one idea in full
    Show {
        /// Idea id, e.g. task-cli
        id: String,
    },
}

pub fn run(root: &Path, subcommand: IdeasSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        IdeasSubcommand::List {
            skills,
            difficulty,
            category,
            search,
        } => list(root, skills, difficulty, category, search, json),
        IdeasSubcommand::Show { id } => show(root, &id, json),
    }
}

// ----------------------------------------------------------------------------
// List
// ----------------------------------------------------------------------------

fn list(
    root: &Path,
    skills: Vec<String>,
    difficulty: Option<String>,
    category: Option<String>,
    search: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;

    let filter = IdeaFilter {
        skills,
        difficulty: difficulty.map(|d| d.parse::<Difficulty>()).transpose()?,
        category: category.map(|c| c.parse::<Category>()).transpose()?,
        query: search,
    };
    let ideas = filter.apply(&catalog);

    if json {
        output::print_json(&ideas)?;
        return Ok(());
    }

    if ideas.is_empty() {
        println!("No ideas match the current filters.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ideas
        .iter()
        .map(|idea| {
            vec![
                idea.id.clone(),
                idea.difficulty.to_string(),
                idea.category.label().to_string(),
                idea.scope.label().to_string(),
                idea.title.clone(),
            ]
        })
        .collect();
    output::print_table(&["ID", "DIFFICULTY", "CATEGORY", "SCOPE", "TITLE"], rows);
    println!("\n{} of {} ideas shown.", ideas.len(), catalog.len());

    Ok(())
}

// ----------------------------------------------------------------------------
// Show
// ----------------------------------------------------------------------------

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let idea = catalog.require(id)?;

    if json {
        output::print_json(idea)?;
        return Ok(());
    }

    print_idea(idea);
    Ok(())
}

fn print_idea(idea: &ProjectIdea) {
    println!("{}  ({})", idea.title, idea.id);
    println!(
        "{} · {} · {}",
        idea.difficulty,
        idea.category.label(),
        idea.scope.label()
    );
    println!("\n{}", idea.description);

    println!("\nSkills: {}", idea.skills.join(", "));
    if !idea.prerequisites.is_empty() {
        println!("Prerequisites: {}", idea.prerequisites.join(", "));
    }

    if !idea.learning_outcomes.is_empty() {
        println!("\nYou will learn:");
        for outcome in &idea.learning_outcomes {
            println!("  - {outcome}");
        }
    }

    if !idea.features.is_empty() {
        println!("\nAssistant features worth trying: {}", idea.features.join(", "));
    }

    println!("\nStart it:  hub project set {} in-progress", idea.id);
}
