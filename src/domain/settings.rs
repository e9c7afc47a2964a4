//! Persisted application settings

use serde::{Deserialize, Serialize};

/// Sort key for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by creation date
    #[default]
    DateCreated,
    /// Ascending by deadline; tasks without one go last
    DueDate,
    /// Case-insensitive by name
    Alphabetical,
    /// By registry rank of the task's priority
    Priority,
    /// By manual drag-reorder position
    Custom,
}

/// User settings stored inside the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Move completed unpinned tasks below everything else
    pub done_to_bottom: bool,

    /// Default sort key for the task list
    pub sort_key: SortKey,

    /// Whether categories are enabled at all
    pub enable_categories: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            done_to_bottom: false,
            sort_key: SortKey::DateCreated,
            enable_categories: true,
        }
    }
}
