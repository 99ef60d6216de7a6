use crate::output;
use anyhow::Context;
use hub_core::catalog::Catalog;
use hub_core::recommend;
use hub_core::skills::SkillTracker;
use hub_core::status::StatusTracker;
use hub_core::store::Store;
use serde_json::json;
use std::path::Path;

pub fn run(root: &Path, count: usize, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let store = Store::open(root);
    let statuses = StatusTracker::load(&store, catalog.len());
    let skills = SkillTracker::load(&store, catalog.skill_count());

    let completed = statuses.completed_ids();
    let ranked = recommend::rank(catalog.ideas(), skills.entries(), &completed);
    let picks: Vec<_> = ranked.iter().take(count).collect();

    if json {
        let entries: Vec<_> = picks
            .iter()
            .map(|s| json!({ "score": s.score, "idea": s.idea }))
            .collect();
        output::print_json(&entries)?;
        return Ok(());
    }

    if picks.is_empty() {
        println!("Nothing to recommend — every catalog project is completed.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = picks
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                format!("{:.1}", s.score),
                s.idea.id.clone(),
                s.idea.difficulty.to_string(),
                s.idea.title.clone(),
            ]
        })
        .collect();
    output::print_table(&["#", "SCORE", "ID", "DIFFICULTY", "TITLE"], rows);

    println!("\nDetails: hub ideas show {}", picks[0].idea.id);
    println!("Scores follow your skill ratings; rate more with `hub skill set`.");
    Ok(())
}
