use anyhow::Context;
use hub_core::{catalog::Catalog, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing learning hub in: {}", root.display());

    let hub = paths::hub_dir(root);
    let existed = hub.is_dir();
    std::fs::create_dir_all(&hub).with_context(|| format!("failed to create {}", hub.display()))?;
    if existed {
        println!("  exists:  {}/", paths::HUB_DIR);
    } else {
        println!("  created: {}/", paths::HUB_DIR);
    }

    // Progress data is personal; keep it out of version control.
    if root.join(".git").is_dir() {
        io::ensure_gitignore_entry(root, ".hub/").context("failed to update .gitignore")?;
        println!("  updated: .gitignore (.hub/ ignored)");
    }

    let catalog = Catalog::load(root).context("failed to load the idea catalog")?;
    println!(
        "\nCatalog ready: {} project ideas across {} skills and {} categories.",
        catalog.len(),
        catalog.skill_count(),
        catalog.categories().len()
    );

    println!("\nNext:");
    println!("  hub wizard          guided walkthrough");
    println!("  hub ideas list      browse the catalog");
    println!("  hub recommend       what to build first");

    Ok(())
}
