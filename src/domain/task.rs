//! Task domain model
//!
//! Tasks are the individual to-do entries a user creates, pins, completes
//! and drag-reorders. Categories are embedded by value; edits to a category
//! definition are fanned out by [`crate::domain::Profile::update_category`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::category::Category;
use super::priority::PriorityId;

/// Maximum length of a task name, in characters
pub const TASK_NAME_MAX_LEN: usize = 40;

/// Maximum length of a task description, in characters
pub const DESCRIPTION_MAX_LEN: usize = 350;

/// Default color for new tasks when none is given
pub const DEFAULT_TASK_COLOR: &str = "#b624ff";

/// Validation errors for task creation and editing
///
/// These surface at the add/edit boundary and block the save; data that
/// reaches the filter/sort pipeline is always valid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task name is required")]
    NameRequired,

    #[error("Task name is too long (maximum {TASK_NAME_MAX_LEN} characters)")]
    NameTooLong,

    #[error("Description is too long (maximum {DESCRIPTION_MAX_LEN} characters)")]
    DescriptionTooLong,
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,

    /// Task name shown in the list
    pub name: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the task is completed
    pub done: bool,

    /// Pinned tasks always render before unpinned ones
    pub pinned: bool,

    /// Display color (hex)
    pub color: String,

    /// Optional emoji shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Categories embedded by value (not by reference)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,

    /// Priority id referencing the profile's priority registry
    pub priority: PriorityId,

    /// Manual order index, stamped by drag-reorder
    ///
    /// Dense over the displayed subset at the time of the last reorder;
    /// may be sparse across the whole store after filters change, so the
    /// custom sort treats a missing position as "after everything".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// When the task was last edited or repositioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save: Option<DateTime<Utc>>,
}

impl Task {
    /// Returns true if the task embeds a category with the given id
    pub fn has_category(&self, category_id: Uuid) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }
}

/// Validates a name/description pair against the configured maxima
pub(crate) fn validate_text(name: &str, description: Option<&str>) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() > TASK_NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if let Some(desc) = description {
        if desc.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ValidationError::DescriptionTooLong);
        }
    }
    Ok(())
}

/// Input for creating a task
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub categories: Vec<Category>,
    pub priority: Option<PriorityId>,
    pub pinned: bool,
}

impl TaskDraft {
    /// Creates a draft with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks the draft against the validation maxima
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text(&self.name, self.description.as_deref())
    }

    /// Builds a task with a fresh id, assuming the draft validated
    pub(crate) fn into_task(self, now: DateTime<Utc>) -> Task {
        Task {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            done: false,
            pinned: self.pinned,
            color: self.color.unwrap_or_else(|| DEFAULT_TASK_COLOR.to_string()),
            emoji: self.emoji,
            created_at: now,
            deadline: self.deadline,
            categories: self.categories,
            priority: self.priority.unwrap_or_else(PriorityId::low),
            position: None,
            last_save: None,
        }
    }
}

/// Partial update for an existing task
///
/// `None` fields are left untouched. An empty-string description or emoji
/// clears the field, matching how the edit dialog stores "" as unset.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub clear_deadline: bool,
    pub priority: Option<PriorityId>,
    pub categories: Option<Vec<Category>>,
}

impl TaskPatch {
    /// Returns true if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.emoji.is_none()
            && self.deadline.is_none()
            && !self.clear_deadline
            && self.priority.is_none()
            && self.categories.is_none()
    }

    /// Applies the patch to a task, stamping `last_save`
    pub(crate) fn apply(self, task: &mut Task, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(desc) = self.description {
            task.description = if desc.is_empty() { None } else { Some(desc) };
        }
        if let Some(color) = self.color {
            task.color = color;
        }
        if let Some(emoji) = self.emoji {
            task.emoji = if emoji.is_empty() { None } else { Some(emoji) };
        }
        if self.clear_deadline {
            task.deadline = None;
        } else if let Some(deadline) = self.deadline {
            task.deadline = Some(deadline);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(categories) = self.categories {
            task.categories = categories;
        }
        task.last_save = Some(now);
    }
}
