//! The user profile: top-level owner of tasks, categories and priorities
//!
//! All mutation happens through the methods here, each of which is a
//! single state transition: the affected collection is rebuilt and swapped
//! in wholesale, never partially edited in place. Deletions additionally
//! append the removed id to a ledger kept for sync bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::category::Category;
use super::priority::PriorityRegistry;
use super::settings::Settings;
use super::task::{Task, TaskDraft, TaskPatch, ValidationError};

/// Errors from id-prefix lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No entry matches id '{0}'")]
    NotFound(String),

    #[error("Id '{0}' is ambiguous, give more characters")]
    Ambiguous(String),
}

/// The whole persisted user state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub tasks: Vec<Task>,

    /// Ids of removed tasks, kept for sync bookkeeping
    pub deleted_tasks: Vec<Uuid>,

    pub categories: Vec<Category>,

    /// Ids of removed categories, kept for sync bookkeeping
    pub deleted_categories: Vec<Uuid>,

    pub priorities: PriorityRegistry,

    pub settings: Settings,
}

impl Profile {
    /// Adds a task from a validated draft; returns the new task's id
    pub fn add_task(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> Result<Uuid, ValidationError> {
        draft.validate()?;
        let task = draft.into_task(now);
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Applies a patch to a task; returns false if the id is unknown
    pub fn edit_task(
        &mut self,
        id: Uuid,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<bool, ValidationError> {
        let task = match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => task,
            None => return Ok(false),
        };

        let name = patch.name.as_deref().unwrap_or(&task.name);
        let description = patch
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(task.description.as_deref());
        super::task::validate_text(name, description)?;

        let mut tasks = self.tasks.clone();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            patch.apply(task, now);
        }
        self.tasks = tasks;
        Ok(true)
    }

    /// Removes a task and records its id in the deletion ledger
    pub fn remove_task(&mut self, id: Uuid) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != len_before;
        if removed {
            self.deleted_tasks.push(id);
        }
        removed
    }

    /// Marks a task done or not done
    pub fn set_done(&mut self, id: Uuid, done: bool, now: DateTime<Utc>) -> bool {
        self.stamp_task(id, now, |t| t.done = done)
    }

    /// Pins or unpins a task
    pub fn set_pinned(&mut self, id: Uuid, pinned: bool, now: DateTime<Utc>) -> bool {
        self.stamp_task(id, now, |t| t.pinned = pinned)
    }

    fn stamp_task(&mut self, id: Uuid, now: DateTime<Utc>, f: impl FnOnce(&mut Task)) -> bool {
        let mut tasks = self.tasks.clone();
        let found = match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                f(task);
                task.last_save = Some(now);
                true
            }
            None => false,
        };
        if found {
            self.tasks = tasks;
        }
        found
    }

    /// Replaces the full task collection (used by drag-reorder)
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Adds a category to the registry
    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    /// Removes a category from the registry, from every task that embeds
    /// it, and records its id in the deletion ledger
    pub fn remove_category(&mut self, id: Uuid) -> bool {
        let len_before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == len_before {
            return false;
        }
        self.deleted_categories.push(id);

        let mut tasks = self.tasks.clone();
        for task in &mut tasks {
            task.categories.retain(|c| c.id != id);
        }
        self.tasks = tasks;
        true
    }

    /// Propagates a category edit to the registry entry and to every
    /// embedded copy across all tasks, as one state transition
    ///
    /// Returns false if the registry has no entry with that id.
    pub fn update_category(&mut self, updated: &Category, now: DateTime<Utc>) -> bool {
        let entry = match self.categories.iter().position(|c| c.id == updated.id) {
            Some(idx) => idx,
            None => return false,
        };

        let stamped = Category {
            last_save: Some(now),
            ..updated.clone()
        };

        let mut categories = self.categories.clone();
        categories[entry] = stamped.clone();

        let mut tasks = self.tasks.clone();
        for task in &mut tasks {
            for embedded in &mut task.categories {
                if embedded.id == stamped.id {
                    *embedded = stamped.clone();
                }
            }
        }

        // Swap both collections in together so consumers never observe a
        // half-applied edit.
        self.categories = categories;
        self.tasks = tasks;
        true
    }

    /// Looks up a task by full id or unique id prefix
    pub fn task_by_prefix(&self, prefix: &str) -> Result<&Task, LookupError> {
        let mut matches = self
            .tasks
            .iter()
            .filter(|t| t.id.to_string().starts_with(prefix));

        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task),
            (Some(_), Some(_)) => Err(LookupError::Ambiguous(prefix.to_string())),
            (None, _) => Err(LookupError::NotFound(prefix.to_string())),
        }
    }

    /// Looks up a category by name (case-insensitive) or unique id prefix
    pub fn category_by_name_or_prefix(&self, needle: &str) -> Result<&Category, LookupError> {
        if let Some(cat) = self
            .categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
        {
            return Ok(cat);
        }

        let mut matches = self
            .categories
            .iter()
            .filter(|c| c.id.to_string().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(cat), None) => Ok(cat),
            (Some(_), Some(_)) => Err(LookupError::Ambiguous(needle.to_string())),
            (None, _) => Err(LookupError::NotFound(needle.to_string())),
        }
    }
}
