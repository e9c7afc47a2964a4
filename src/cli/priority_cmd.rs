//! Priority registry CLI commands
//!
//! Every mutating command stages its change in a registry draft and
//! commits it in one step, mirroring how the management dialog applies
//! edits only on explicit save. There is no delete command: tasks hold
//! priority ids by value and deleting an entry would orphan them.

use anyhow::{bail, Result};
use clap::Subcommand;

use super::output::Output;
use crate::domain::PriorityId;
use crate::storage::ProfileStore;

#[derive(Subcommand)]
pub enum PriorityCommands {
    /// List priority levels in rank order
    List,

    /// Change the label of a priority level
    Relabel {
        /// Priority id (e.g. "high")
        id: String,

        /// New label
        label: String,
    },

    /// Change the color of a priority level
    Recolor {
        /// Priority id
        id: String,

        /// New color (hex)
        color: String,
    },

    /// Move a priority level to another level's rank
    Move {
        /// Priority id to move
        id: String,

        /// Priority id whose rank it takes
        target: String,
    },
}

pub fn run(cmd: PriorityCommands, output: &Output, store: &ProfileStore) -> Result<()> {
    match cmd {
        PriorityCommands::List => list(output, store),
        PriorityCommands::Relabel { id, label } => relabel(output, store, &id, &label),
        PriorityCommands::Recolor { id, color } => recolor(output, store, &id, &color),
        PriorityCommands::Move { id, target } => reorder(output, store, &id, &target),
    }
}

fn list(output: &Output, store: &ProfileStore) -> Result<()> {
    let profile = store.load()?;

    if output.is_json() {
        let items: Vec<_> = profile
            .priorities
            .iter()
            .enumerate()
            .map(|(rank, p)| {
                serde_json::json!({
                    "rank": rank,
                    "id": p.id,
                    "label": p.label,
                    "color": p.color,
                })
            })
            .collect();
        output.data(&items);
        return Ok(());
    }

    println!("{:<5} {:<12} {:<16} COLOR", "RANK", "ID", "LABEL");
    println!("{}", "-".repeat(44));
    for (rank, p) in profile.priorities.iter().enumerate() {
        println!("{:<5} {:<12} {:<16} {}", rank, p.id, p.label, p.color);
    }
    Ok(())
}

fn relabel(output: &Output, store: &ProfileStore, id: &str, label: &str) -> Result<()> {
    let mut profile = store.load()?;
    let mut draft = profile.priorities.draft();
    if !draft.set_label(&PriorityId::new(id), label) {
        bail!("Unknown priority id '{}'", id);
    }
    profile.priorities = draft.commit();
    store.save(&profile)?;
    output.success(&format!("Priority {} relabeled to {}", id, label));
    Ok(())
}

fn recolor(output: &Output, store: &ProfileStore, id: &str, color: &str) -> Result<()> {
    let mut profile = store.load()?;
    let mut draft = profile.priorities.draft();
    if !draft.set_color(&PriorityId::new(id), color) {
        bail!("Unknown priority id '{}'", id);
    }
    profile.priorities = draft.commit();
    store.save(&profile)?;
    output.success(&format!("Priority {} recolored to {}", id, color));
    Ok(())
}

fn reorder(output: &Output, store: &ProfileStore, id: &str, target: &str) -> Result<()> {
    let mut profile = store.load()?;
    let mut draft = profile.priorities.draft();
    if !draft.reorder(&PriorityId::new(id), &PriorityId::new(target)) {
        bail!("Cannot move '{}' onto '{}'", id, target);
    }
    profile.priorities = draft.commit();
    store.save(&profile)?;
    output.success(&format!("Priority {} now ranks at {}'s old slot", id, target));
    Ok(())
}
