use crate::output;
use anyhow::Context;
use hub_core::catalog::Catalog;
use hub_core::skills::SkillTracker;
use hub_core::status::StatusTracker;
use hub_core::store::Store;
use serde_json::json;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let store = Store::open(root);
    let statuses = StatusTracker::load(&store, catalog.len());
    let skills = SkillTracker::load(&store, catalog.skill_count());

    let project_stats = statuses.stats();
    let skill_stats = skills.stats();

    if json {
        output::print_json(&json!({
            "projects": project_stats,
            "skills": skill_stats,
        }))?;
        return Ok(());
    }

    println!(
        "Projects:  {} in progress · {} completed · {} not started ({} total)",
        project_stats.in_progress,
        project_stats.completed,
        project_stats.not_started,
        project_stats.total
    );
    println!(
        "Skills:    {} learning · {} comfortable · {} mastered ({} total)",
        skill_stats.learning, skill_stats.comfortable, skill_stats.mastered, skill_stats.total
    );

    if project_stats.in_progress == 0 && project_stats.completed == 0 {
        println!("\nNothing tracked yet. Try: hub recommend");
    }
    Ok(())
}
