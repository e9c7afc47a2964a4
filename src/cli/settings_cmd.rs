//! Settings CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::SortKey;
use crate::storage::ProfileStore;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Move completed unpinned tasks to the bottom of the list
    DoneToBottom {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },

    /// Set the default sort key
    Sort {
        /// Sort key
        #[arg(value_enum)]
        key: SortKey,
    },

    /// Enable or disable categories
    Categories {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

pub fn run(cmd: SettingsCommands, output: &Output, store: &ProfileStore) -> Result<()> {
    match cmd {
        SettingsCommands::Show => {
            let profile = store.load()?;
            if output.is_json() {
                output.data(&profile.settings);
            } else {
                println!("done_to_bottom:    {}", profile.settings.done_to_bottom);
                println!("sort_key:          {:?}", profile.settings.sort_key);
                println!("enable_categories: {}", profile.settings.enable_categories);
            }
            Ok(())
        }
        SettingsCommands::DoneToBottom { value } => {
            let mut profile = store.load()?;
            profile.settings.done_to_bottom = value;
            store.save(&profile)?;
            output.success(&format!("done-to-bottom set to {}", value));
            Ok(())
        }
        SettingsCommands::Sort { key } => {
            let mut profile = store.load()?;
            profile.settings.sort_key = key;
            store.save(&profile)?;
            output.success(&format!("default sort set to {:?}", key));
            Ok(())
        }
        SettingsCommands::Categories { value } => {
            let mut profile = store.load()?;
            profile.settings.enable_categories = value;
            store.save(&profile)?;
            output.success(&format!("categories {}", if value { "enabled" } else { "disabled" }));
            Ok(())
        }
    }
}
