//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{category_cmd, priority_cmd, settings_cmd, task_cmd};
use crate::storage::{Config, DefaultFormat, ProfileStore};

#[derive(Parser)]
#[command(name = "tickit")]
#[command(author, version, about = "Local-first personal to-do list")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file setting)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Profile file location (defaults to the platform data directory)
    #[arg(long, global = true, env = "TICKIT_PROFILE")]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task name
        name: String,

        /// Longer description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Deadline (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        deadline: Option<String>,

        /// Priority id (critical, high, medium, low by default)
        #[arg(long, short = 'p')]
        priority: Option<String>,

        /// Categories (name or id prefix, repeatable)
        #[arg(long, short = 'c')]
        category: Vec<String>,

        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,

        /// Emoji
        #[arg(long)]
        emoji: Option<String>,

        /// Pin the task
        #[arg(long)]
        pin: bool,
    },

    /// List tasks (filtered and sorted)
    List {
        #[command(flatten)]
        view: task_cmd::ViewArgs,
    },

    /// Show task details
    Show {
        /// Task id or id prefix
        id: String,
    },

    /// Mark a task done
    Done {
        /// Task id or id prefix
        id: String,
    },

    /// Mark a done task as not done
    Reopen {
        /// Task id or id prefix
        id: String,
    },

    /// Pin a task to the top of the list
    Pin {
        /// Task id or id prefix
        id: String,
    },

    /// Unpin a task
    Unpin {
        /// Task id or id prefix
        id: String,
    },

    /// Edit task fields
    Edit {
        /// Task id or id prefix
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description ("" clears it)
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// New deadline (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<String>,

        /// Remove the deadline
        #[arg(long)]
        clear_deadline: bool,

        /// New priority id
        #[arg(long, short = 'p')]
        priority: Option<String>,

        /// Replace the category set (name or id prefix, repeatable)
        #[arg(long, short = 'c')]
        category: Option<Vec<String>>,

        /// New display color (hex)
        #[arg(long)]
        color: Option<String>,

        /// New emoji ("" clears it)
        #[arg(long)]
        emoji: Option<String>,
    },

    /// Delete a task
    Rm {
        /// Task id or id prefix
        id: String,
    },

    /// Drag a task onto another task's slot in the displayed list
    Move {
        /// Task to move (id or prefix)
        dragged: String,

        /// Task whose slot it takes (id or prefix)
        target: String,

        #[command(flatten)]
        view: task_cmd::ViewArgs,
    },

    /// Manage categories
    #[command(subcommand)]
    Category(category_cmd::CategoryCommands),

    /// Manage priority levels
    #[command(subcommand)]
    Priority(priority_cmd::PriorityCommands),

    /// Manage settings
    #[command(subcommand)]
    Settings(settings_cmd::SettingsCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli.format.unwrap_or(match config.default_format {
        DefaultFormat::Text => OutputFormat::Text,
        DefaultFormat::Json => OutputFormat::Json,
    });
    let output = Output::new(format, cli.verbose);

    let store = match cli.profile.or(config.profile) {
        Some(path) => ProfileStore::new(path),
        None => ProfileStore::default_location()?,
    };
    output.verbose(&format!("Profile at {}", store.path().display()));

    match cli.command {
        Commands::Add {
            name,
            description,
            deadline,
            priority,
            category,
            color,
            emoji,
            pin,
        } => task_cmd::add(
            &output,
            &store,
            &name,
            description,
            deadline,
            priority,
            &category,
            color,
            emoji,
            pin,
        ),
        Commands::List { view } => task_cmd::list(&output, &store, &view),
        Commands::Show { id } => task_cmd::show(&output, &store, &id),
        Commands::Done { id } => task_cmd::set_done(&output, &store, &id, true),
        Commands::Reopen { id } => task_cmd::set_done(&output, &store, &id, false),
        Commands::Pin { id } => task_cmd::set_pinned(&output, &store, &id, true),
        Commands::Unpin { id } => task_cmd::set_pinned(&output, &store, &id, false),
        Commands::Edit {
            id,
            name,
            description,
            deadline,
            clear_deadline,
            priority,
            category,
            color,
            emoji,
        } => task_cmd::edit(
            &output,
            &store,
            &id,
            name,
            description,
            deadline,
            clear_deadline,
            priority,
            category,
            color,
            emoji,
        ),
        Commands::Rm { id } => task_cmd::remove(&output, &store, &id),
        Commands::Move {
            dragged,
            target,
            view,
        } => task_cmd::move_task(&output, &store, &dragged, &target, &view),
        Commands::Category(cmd) => category_cmd::run(cmd, &output, &store),
        Commands::Priority(cmd) => priority_cmd::run(cmd, &output, &store),
        Commands::Settings(cmd) => settings_cmd::run(cmd, &output, &store),
    }
}
