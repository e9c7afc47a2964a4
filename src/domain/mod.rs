//! Domain models for tickit
//!
//! The pure data model: tasks, categories, the priority registry and the
//! profile that owns them. No I/O concerns live here.

mod category;
mod priority;
mod profile;
mod settings;
mod task;

pub use category::Category;
pub use priority::{
    PriorityConfig, PriorityId, PriorityRanks, PriorityRegistry, RegistryDraft, UNRANKED_SENTINEL,
};
pub use profile::{LookupError, Profile};
pub use settings::{Settings, SortKey};
pub use task::{
    Task, TaskDraft, TaskPatch, ValidationError, DEFAULT_TASK_COLOR, DESCRIPTION_MAX_LEN,
    TASK_NAME_MAX_LEN,
};
