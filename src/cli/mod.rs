//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Tasks | Create and manage tasks | `add`, `list`, `done`, `pin`, `move` |
//! | Categories | Label management | `category add`, `category edit` |
//! | Priorities | Priority registry | `priority list`, `priority move` |
//! | Settings | Persisted preferences | `settings done-to-bottom true` |
//!
//! All commands support `--format text|json` and `--verbose`. The profile
//! location can be overridden with `--profile` or `$TICKIT_PROFILE`.
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod category_cmd;
mod output;
mod priority_cmd;
mod settings_cmd;
mod task_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
