//! Category CLI commands

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;

use super::output::Output;
use crate::domain::{Category, DEFAULT_TASK_COLOR};
use crate::storage::ProfileStore;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: String,

        /// Display color (hex)
        #[arg(long, default_value = DEFAULT_TASK_COLOR)]
        color: String,

        /// Emoji
        #[arg(long)]
        emoji: Option<String>,
    },

    /// List categories
    List,

    /// Edit a category; the change propagates to every task that has it
    Edit {
        /// Category name or id prefix
        category: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New color (hex)
        #[arg(long)]
        color: Option<String>,

        /// New emoji
        #[arg(long)]
        emoji: Option<String>,
    },

    /// Remove a category from the registry and from all tasks
    Rm {
        /// Category name or id prefix
        category: String,
    },
}

pub fn run(cmd: CategoryCommands, output: &Output, store: &ProfileStore) -> Result<()> {
    match cmd {
        CategoryCommands::Add { name, color, emoji } => add(output, store, &name, &color, emoji),
        CategoryCommands::List => list(output, store),
        CategoryCommands::Edit {
            category,
            name,
            color,
            emoji,
        } => edit(output, store, &category, name, color, emoji),
        CategoryCommands::Rm { category } => remove(output, store, &category),
    }
}

fn add(
    output: &Output,
    store: &ProfileStore,
    name: &str,
    color: &str,
    emoji: Option<String>,
) -> Result<()> {
    let mut profile = store.load()?;
    let id = profile.add_category(Category::new(name, color, emoji));
    store.save(&profile)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "id": id, "name": name }));
    } else {
        output.success(&format!("Added category {}", name));
    }
    Ok(())
}

fn list(output: &Output, store: &ProfileStore) -> Result<()> {
    let profile = store.load()?;

    if output.is_json() {
        output.data(&profile.categories);
        return Ok(());
    }

    if profile.categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }

    println!("{:<10} {:<20} {:<9} EMOJI", "ID", "NAME", "COLOR");
    println!("{}", "-".repeat(48));
    for cat in &profile.categories {
        println!(
            "{:<10} {:<20} {:<9} {}",
            &cat.id.to_string()[..8],
            cat.name,
            cat.color,
            cat.emoji.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn edit(
    output: &Output,
    store: &ProfileStore,
    needle: &str,
    name: Option<String>,
    color: Option<String>,
    emoji: Option<String>,
) -> Result<()> {
    let mut profile = store.load()?;
    let existing = profile.category_by_name_or_prefix(needle)?;

    let updated = Category {
        name: name.unwrap_or_else(|| existing.name.clone()),
        color: color.unwrap_or_else(|| existing.color.clone()),
        emoji: emoji.or_else(|| existing.emoji.clone()),
        ..existing.clone()
    };

    profile.update_category(&updated, Utc::now());
    store.save(&profile)?;
    output.success(&format!(
        "Category {} updated on the registry and all tasks",
        updated.name
    ));
    Ok(())
}

fn remove(output: &Output, store: &ProfileStore, needle: &str) -> Result<()> {
    let mut profile = store.load()?;
    let id = profile.category_by_name_or_prefix(needle)?.id;
    profile.remove_category(id);
    store.save(&profile)?;
    output.success("Category removed");
    Ok(())
}
