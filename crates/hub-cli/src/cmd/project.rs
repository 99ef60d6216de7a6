use crate::output;
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use hub_core::catalog::Catalog;
use hub_core::status::StatusTracker;
use hub_core::store::Store;
use hub_core::types::ProjectStatus;
use serde_json::json;
use std::path::Path;

#[derive(Subcommand)]
pub enum ProjectSubcommand {
    /// Set the status of a project
    Set {
        /// Project id, e.g. task-cli
        id: String,
        /// New status (not-started, in-progress, completed)
        status: String,
    },
    /// Show one project's tracked status
    Show {
        /// Project id, e.g. task-cli
        id: String,
    },
    /// List tracked projects
    List {
        /// Only projects with this status
        #[arg(long)]
        status: Option<String>,
    },
}

pub fn run(root: &Path, subcommand: ProjectSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        ProjectSubcommand::Set { id, status } => set(root, &id, &status, json),
        ProjectSubcommand::Show { id } => show(root, &id, json),
        ProjectSubcommand::List { status } => list(root, status, json),
    }
}

// ----------------------------------------------------------------------------
// Set
// ----------------------------------------------------------------------------

fn set(root: &Path, id: &str, status: &str, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let idea = catalog.require(id)?;
    let status = status.parse::<ProjectStatus>()?;

    let store = Store::open(root);
    let mut tracker = StatusTracker::load(&store, catalog.len());
    tracker.update_status(id, status);

    let record = tracker.record(id).cloned();
    if json {
        output::print_json(&json!({
            "project_id": id,
            "status": status.as_str(),
            "record": record,
        }))?;
        return Ok(());
    }

    println!("{}: {}", idea.title, status);
    if let Some(record) = record {
        if let Some(started) = record.started_at {
            println!("  started:   {}", format_time(started));
        }
        if let Some(completed) = record.completed_at {
            println!("  completed: {}", format_time(completed));
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Show
// ----------------------------------------------------------------------------

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let idea = catalog.require(id)?;

    let store = Store::open(root);
    let tracker = StatusTracker::load(&store, catalog.len());
    let status = tracker.status_of(id);
    let record = tracker.record(id).cloned();

    if json {
        output::print_json(&json!({
            "project_id": id,
            "title": idea.title,
            "status": status.as_str(),
            "record": record,
        }))?;
        return Ok(());
    }

    println!("{}  ({})", idea.title, idea.id);
    println!("Status: {status}");
    match record {
        Some(record) => {
            println!("  started:   {}", format_opt_time(record.started_at));
            println!("  completed: {}", format_opt_time(record.completed_at));
        }
        None => println!("  (never tracked)"),
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// List
// ----------------------------------------------------------------------------

fn list(root: &Path, status: Option<String>, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    let wanted = status.map(|s| s.parse::<ProjectStatus>()).transpose()?;

    let store = Store::open(root);
    let tracker = StatusTracker::load(&store, catalog.len());

    let records: Vec<_> = tracker
        .records()
        .iter()
        .filter(|r| wanted.map_or(true, |w| r.status == w))
        .cloned()
        .collect();

    if json {
        output::print_json(&records)?;
        return Ok(());
    }

    if records.is_empty() {
        match wanted {
            Some(w) => println!("No tracked projects with status {w}."),
            None => println!("No tracked projects yet. Try: hub project set task-cli in-progress"),
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            let title = catalog
                .find(&r.project_id)
                .map(|idea| idea.title.clone())
                .unwrap_or_else(|| "(not in catalog)".to_string());
            vec![
                r.project_id.clone(),
                r.status.to_string(),
                format_opt_time(r.started_at),
                format_opt_time(r.completed_at),
                title,
            ]
        })
        .collect();
    output::print_table(&["ID", "STATUS", "STARTED", "COMPLETED", "TITLE"], rows);
    Ok(())
}

fn format_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}

fn format_opt_time(t: Option<DateTime<Utc>>) -> String {
    t.map(format_time).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_timestamp_renders_dash() {
        assert_eq!(format_opt_time(None), "-");
    }
}
