//! tickit - a local-first personal to-do list
//!
//! Tasks live in a single user profile together with categories, a
//! user-editable priority registry and settings. The rendered list is
//! produced by a pure pipeline (filter, stable sort, pinned-first
//! partitioning) and manual drag-reorder feeds positions back into the
//! profile.

pub mod cli;
pub mod domain;
pub mod storage;
pub mod view;

pub use domain::{Category, PriorityConfig, PriorityRegistry, Profile, Settings, SortKey, Task};
pub use view::{build_view, DateFilter, TaskFilter, ViewOptions};
