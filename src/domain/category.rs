//! Category domain model
//!
//! Categories are user-defined labels with a color and optional emoji.
//! Tasks embed copies of their categories rather than referencing the
//! registry, so edits must be propagated (see `Profile::update_category`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Display color (hex)
    pub color: String,

    /// Optional emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// When the category was last edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save: Option<DateTime<Utc>>,
}

impl Category {
    /// Creates a category with a fresh id
    pub fn new(name: impl Into<String>, color: impl Into<String>, emoji: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            emoji,
            last_save: None,
        }
    }
}
