use crate::output;
use anyhow::{bail, Context};
use clap::Subcommand;
use hub_core::catalog::Catalog;
use hub_core::roadmap::Roadmaps;
use hub_core::status::StatusTracker;
use hub_core::store::Store;
use serde_json::json;
use std::path::Path;

#[derive(Subcommand)]
pub enum RoadmapSubcommand {
    /// Create a new, empty roadmap
    Create {
        /// Roadmap name, e.g. "Backend fundamentals"
        name: String,
    },
    /// List all roadmaps
    List,
    /// Show one roadmap with its projects in order
    Show {
        /// Roadmap id, e.g. roadmap-1700000000000
        id: String,
    },
    /// Delete a roadmap
    Delete {
        /// Roadmap id
        id: String,
    },
    /// Add a project to the end of a roadmap
    Add {
        /// Roadmap id
        id: String,
        /// Project id, e.g. task-cli
        project_id: String,
    },
    /// Remove a project from a roadmap
    Remove {
        /// Roadmap id
        id: String,
        /// Project id
        project_id: String,
    },
    /// Move a project to a new position within a roadmap (1-based)
    Move {
        /// Roadmap id
        id: String,
        /// Project id
        project_id: String,
        /// Target position, 1 = first
        position: usize,
    },
    /// Replace a roadmap's project order wholesale
    Reorder {
        /// Roadmap id
        id: String,
        /// Project ids in the desired order
        project_ids: Vec<String>,
    },
}

pub fn run(root: &Path, subcommand: RoadmapSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        RoadmapSubcommand::Create { name } => create(root, &name, json),
        RoadmapSubcommand::List => list(root, json),
        RoadmapSubcommand::Show { id } => show(root, &id, json),
        RoadmapSubcommand::Delete { id } => delete(root, &id, json),
        RoadmapSubcommand::Add { id, project_id } => add(root, &id, &project_id, json),
        RoadmapSubcommand::Remove { id, project_id } => remove(root, &id, &project_id, json),
        RoadmapSubcommand::Move {
            id,
            project_id,
            position,
        } => move_project(root, &id, &project_id, position, json),
        RoadmapSubcommand::Reorder { id, project_ids } => reorder(root, &id, project_ids, json),
    }
}

// ----------------------------------------------------------------------------
// Create / Delete
// ----------------------------------------------------------------------------

fn create(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let store = Store::open(root);
    let mut roadmaps = Roadmaps::load(&store);

    let Some(id) = roadmaps.create(name) else {
        bail!("roadmap name cannot be blank");
    };

    if json {
        output::print_json(&json!({ "id": id, "name": name.trim() }))?;
        return Ok(());
    }

    println!("Created roadmap '{}' ({id})", name.trim());
    println!("Add projects with: hub roadmap add {id} <project-id>");
    Ok(())
}

fn delete(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let store = Store::open(root);
    let mut roadmaps = Roadmaps::load(&store);

    if !roadmaps.delete(id) {
        bail!("roadmap '{id}' not found");
    }

    if json {
        output::print_json(&json!({ "deleted": id }))?;
        return Ok(());
    }
    println!("Deleted roadmap {id}");
    Ok(())
}

// ----------------------------------------------------------------------------
// List / Show
// ----------------------------------------------------------------------------

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = Store::open(root);
    let roadmaps = Roadmaps::load(&store);

    if json {
        output::print_json(roadmaps.all())?;
        return Ok(());
    }

    if roadmaps.all().is_empty() {
        println!("No roadmaps yet. Try: hub roadmap create \"My first path\"");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = roadmaps
        .all()
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                r.project_ids.len().to_string(),
                r.created_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();
    output::print_table(&["ID", "NAME", "PROJECTS", "CREATED"], rows);
    Ok(())
}

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let store = Store::open(root);
    let roadmaps = Roadmaps::load(&store);
    let tracker = StatusTracker::load(&store, catalog.len());

    let Some(roadmap) = roadmaps.get(id) else {
        bail!("roadmap '{id}' not found");
    };

    if json {
        output::print_json(roadmap)?;
        return Ok(());
    }

    println!("{}  ({})", roadmap.name, roadmap.id);
    println!("Created: {}", roadmap.created_at.format("%Y-%m-%d"));

    if roadmap.project_ids.is_empty() {
        println!("\n(no projects yet)");
        return Ok(());
    }

    println!();
    for (i, project_id) in roadmap.project_ids.iter().enumerate() {
        let title = catalog
            .find(project_id)
            .map(|idea| idea.title.as_str())
            .unwrap_or("(not in catalog)");
        let status = tracker.status_of(project_id);
        println!("  {}. {title} [{status}]  ({project_id})", i + 1);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Membership and ordering
// ----------------------------------------------------------------------------

fn add(root: &Path, id: &str, project_id: &str, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    catalog.require(project_id)?;

    let store = Store::open(root);
    let mut roadmaps = Roadmaps::load(&store);
    if roadmaps.get(id).is_none() {
        bail!("roadmap '{id}' not found");
    }

    let added = roadmaps.add_project(id, project_id);
    if json {
        output::print_json(&json!({ "id": id, "project_id": project_id, "added": added }))?;
        return Ok(());
    }

    if added {
        println!("Added {project_id} to {id}");
    } else {
        println!("{project_id} is already on {id}");
    }
    Ok(())
}

fn remove(root: &Path, id: &str, project_id: &str, json: bool) -> anyhow::Result<()> {
    let store = Store::open(root);
    let mut roadmaps = Roadmaps::load(&store);
    if roadmaps.get(id).is_none() {
        bail!("roadmap '{id}' not found");
    }

    if !roadmaps.remove_project(id, project_id) {
        bail!("project '{project_id}' is not in roadmap '{id}'");
    }

    if json {
        output::print_json(&json!({ "id": id, "removed": project_id }))?;
        return Ok(());
    }
    println!("Removed {project_id} from {id}");
    Ok(())
}

fn move_project(
    root: &Path,
    id: &str,
    project_id: &str,
    position: usize,
    json: bool,
) -> anyhow::Result<()> {
    if position == 0 {
        bail!("positions are 1-based; use 1 for the first slot");
    }

    let store = Store::open(root);
    let mut roadmaps = Roadmaps::load(&store);
    roadmaps.move_project(id, project_id, position - 1)?;

    if json {
        let roadmap = roadmaps.get(id);
        output::print_json(&roadmap)?;
        return Ok(());
    }
    println!("Moved {project_id} to position {position} on {id}");
    Ok(())
}

fn reorder(root: &Path, id: &str, project_ids: Vec<String>, json: bool) -> anyhow::Result<()> {
    let store = Store::open(root);
    let mut roadmaps = Roadmaps::load(&store);

    if !roadmaps.reorder(id, project_ids) {
        bail!("roadmap '{id}' not found");
    }

    if json {
        let roadmap = roadmaps.get(id);
        output::print_json(&roadmap)?;
        return Ok(());
    }
    println!("Reordered {id}");
    Ok(())
}
