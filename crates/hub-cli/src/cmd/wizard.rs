use crate::output;
use anyhow::Context;
use clap::Subcommand;
use hub_core::store::Store;
use hub_core::wizard::{WizardProgress, WizardStep};
use serde_json::json;
use std::path::Path;

#[derive(Subcommand)]
pub enum WizardSubcommand {
    /// Show the current step (the default)
    Show,
    /// Advance to the next step
    Next,
    /// Go back one step
    Back,
    /// Jump to a specific step (1-based)
    Goto {
        /// Step number, 1 = first
        step: usize,
    },
    /// Start the walkthrough over
    Reset,
}

pub fn run(root: &Path, subcommand: Option<WizardSubcommand>, json: bool) -> anyhow::Result<()> {
    let steps = WizardStep::builtin().context("failed to load the walkthrough steps")?;
    let store = Store::open(root);
    let mut progress = WizardProgress::load(&store, steps.len());

    match subcommand.unwrap_or(WizardSubcommand::Show) {
        WizardSubcommand::Show => {}
        WizardSubcommand::Next => progress.next(),
        WizardSubcommand::Back => progress.back(),
        WizardSubcommand::Goto { step } => progress.go_to(step.saturating_sub(1)),
        WizardSubcommand::Reset => progress.reset(),
    }

    let current = progress.current();
    let step = match steps.get(current) {
        Some(step) => step,
        None => {
            // Only reachable with an empty step list.
            println!("The walkthrough has no steps.");
            return Ok(());
        }
    };

    if json {
        output::print_json(&json!({
            "step": current + 1,
            "total": progress.total_steps(),
            "percent_complete": progress.percent_complete(),
            "content": step,
        }))?;
        return Ok(());
    }

    print_step(step, &progress);
    Ok(())
}

fn print_step(step: &WizardStep, progress: &WizardProgress) {
    println!(
        "Step {} of {} — {}",
        progress.current() + 1,
        progress.total_steps(),
        step.headline
    );
    println!("Phase {}: {}", step.phase, step.phase_title);
    println!("\n{}", step.summary);

    if let Some(hint) = &step.command_hint {
        println!("\nTry it:");
        println!("  $ {hint}");
    }

    println!();
    if progress.is_last() {
        println!("That's the whole tour. `hub wizard reset` starts it over.");
    } else {
        println!("`hub wizard next` continues; `hub wizard back` revisits.");
    }
}
