use crate::output;
use anyhow::{bail, Context};
use clap::Subcommand;
use hub_core::catalog::Catalog;
use hub_core::skills::SkillTracker;
use hub_core::store::Store;
use hub_core::types::SkillLevel;
use serde_json::json;
use std::path::Path;

#[derive(Subcommand)]
pub enum SkillSubcommand {
    /// Rate your level for a skill
    Set {
        /// Skill name as it appears in the catalog, e.g. "React"
        skill: String,
        /// New level (not-started, learning, comfortable, mastered)
        level: String,
    },
    /// List every catalog skill and your level for it
    List,
}

pub fn run(root: &Path, subcommand: SkillSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        SkillSubcommand::Set { skill, level } => set(root, &skill, &level, json),
        SkillSubcommand::List => list(root, json),
    }
}

fn set(root: &Path, skill: &str, level: &str, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    if !catalog.all_skills().iter().any(|s| s == skill) {
        bail!("unknown skill '{skill}'; see `hub skill list` for the catalog skills");
    }
    let level = level.parse::<SkillLevel>()?;

    let store = Store::open(root);
    let mut tracker = SkillTracker::load(&store, catalog.skill_count());
    tracker.update_skill(skill, level);

    if json {
        output::print_json(&json!({ "skill_id": skill, "level": level.as_str() }))?;
        return Ok(());
    }

    println!("{skill}: {level}");
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let store = Store::open(root);
    let tracker = SkillTracker::load(&store, catalog.skill_count());

    let skills = catalog.all_skills();
    if json {
        let entries: Vec<_> = skills
            .iter()
            .map(|s| json!({ "skill_id": s, "level": tracker.level_of(s).as_str() }))
            .collect();
        output::print_json(&entries)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = skills
        .iter()
        .map(|s| vec![s.clone(), tracker.level_of(s).to_string()])
        .collect();
    output::print_table(&["SKILL", "LEVEL"], rows);

    let stats = tracker.stats();
    println!(
        "\n{} learning · {} comfortable · {} mastered ({} skills)",
        stats.learning, stats.comfortable, stats.mastered, stats.total
    );
    Ok(())
}
