use crate::output;
use clap::Subcommand;
use hub_core::store::Store;
use hub_core::theme::ThemePreference;
use hub_core::types::ThemeMode;
use serde_json::json;
use std::path::Path;

#[derive(Subcommand)]
pub enum ThemeSubcommand {
    /// Show the current theme (the default)
    Show,
    /// Flip between dark and light
    Toggle,
    /// Set the theme directly
    Set {
        /// Theme mode (dark, light)
        mode: String,
    },
}

pub fn run(root: &Path, subcommand: Option<ThemeSubcommand>, json: bool) -> anyhow::Result<()> {
    let store = Store::open(root);
    let mut theme = ThemePreference::load(&store);

    match subcommand.unwrap_or(ThemeSubcommand::Show) {
        ThemeSubcommand::Show => {}
        ThemeSubcommand::Toggle => {
            theme.toggle();
        }
        ThemeSubcommand::Set { mode } => {
            let mode = mode.parse::<ThemeMode>()?;
            theme.set(mode);
        }
    }

    if json {
        output::print_json(&json!({ "theme": theme.mode().as_str() }))?;
        return Ok(());
    }

    println!("Theme: {}", theme.mode());
    Ok(())
}
