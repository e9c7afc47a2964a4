//! Priority registry
//!
//! Priorities are an ordered, user-editable list; registry order defines
//! the sort rank used by the priority sort key. Four built-in levels ship
//! as defaults. Entries cannot be deleted: tasks reference priority ids by
//! value and removing an entry would orphan those references. Edits are
//! staged in a [`RegistryDraft`] and committed atomically.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort rank assigned to a priority id that is not in the registry
pub const UNRANKED_SENTINEL: u32 = 99;

/// Identifier of a priority level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityId(String);

impl PriorityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn critical() -> Self {
        Self::new("critical")
    }

    pub fn high() -> Self {
        Self::new("high")
    }

    pub fn medium() -> Self {
        Self::new("medium")
    }

    pub fn low() -> Self {
        Self::new("low")
    }
}

impl fmt::Display for PriorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PriorityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single priority level: id, user-facing label, display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityConfig {
    pub id: PriorityId,
    pub label: String,
    pub color: String,
}

/// Ordered list of priority levels; order defines sort rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityRegistry(Vec<PriorityConfig>);

impl Default for PriorityRegistry {
    fn default() -> Self {
        Self(vec![
            PriorityConfig {
                id: PriorityId::critical(),
                label: "Critical".to_string(),
                color: "#ff3131".to_string(),
            },
            PriorityConfig {
                id: PriorityId::high(),
                label: "High".to_string(),
                color: "#ff9318".to_string(),
            },
            PriorityConfig {
                id: PriorityId::medium(),
                label: "Medium".to_string(),
                color: "#fff51f".to_string(),
            },
            PriorityConfig {
                id: PriorityId::low(),
                label: "Low".to_string(),
                color: "#29ff1f".to_string(),
            },
        ])
    }
}

impl PriorityRegistry {
    /// Iterates over entries in rank order
    pub fn iter(&self) -> impl Iterator<Item = &PriorityConfig> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up an entry by id
    pub fn get(&self, id: &PriorityId) -> Option<&PriorityConfig> {
        self.0.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PriorityId) -> bool {
        self.get(id).is_some()
    }

    /// Builds the rank table for the current order
    ///
    /// Built once per render; unknown ids rank as [`UNRANKED_SENTINEL`].
    pub fn rank_table(&self) -> PriorityRanks {
        PriorityRanks(
            self.0
                .iter()
                .enumerate()
                .map(|(idx, p)| (p.id.clone(), idx as u32))
                .collect(),
        )
    }

    /// Starts a draft edit session over a copy of the registry
    pub fn draft(&self) -> RegistryDraft {
        RegistryDraft {
            entries: self.0.clone(),
        }
    }
}

/// Total rank function built from the registry's current order
#[derive(Debug, Clone)]
pub struct PriorityRanks(HashMap<PriorityId, u32>);

impl PriorityRanks {
    /// Rank of a priority id; unknown ids sort after all known ones
    pub fn rank(&self, id: &PriorityId) -> u32 {
        self.0.get(id).copied().unwrap_or(UNRANKED_SENTINEL)
    }
}

/// Staged edits to the priority registry
///
/// The draft holds its own copy of the entries. Label and color edits and
/// drag-reorders accumulate here; `commit` applies them all in one step,
/// and dropping the draft discards everything. There is deliberately no
/// way to add or remove entries, so a commit is always a relabeling and
/// permutation of the original registry.
#[derive(Debug, Clone)]
pub struct RegistryDraft {
    entries: Vec<PriorityConfig>,
}

impl RegistryDraft {
    /// Current draft entries, in draft order
    pub fn entries(&self) -> &[PriorityConfig] {
        &self.entries
    }

    /// Sets the label of an entry; returns false if the id is unknown
    pub fn set_label(&mut self, id: &PriorityId, label: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|p| &p.id == id) {
            Some(entry) => {
                entry.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Sets the color of an entry; returns false if the id is unknown
    pub fn set_color(&mut self, id: &PriorityId, color: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|p| &p.id == id) {
            Some(entry) => {
                entry.color = color.into();
                true
            }
            None => false,
        }
    }

    /// Moves `dragged` to `target`'s slot (list-move, not swap)
    ///
    /// Returns false if either id is unknown or they are equal.
    pub fn reorder(&mut self, dragged: &PriorityId, target: &PriorityId) -> bool {
        if dragged == target {
            return false;
        }
        let old_index = match self.entries.iter().position(|p| &p.id == dragged) {
            Some(idx) => idx,
            None => return false,
        };
        let new_index = match self.entries.iter().position(|p| &p.id == target) {
            Some(idx) => idx,
            None => return false,
        };
        let entry = self.entries.remove(old_index);
        self.entries.insert(new_index, entry);
        true
    }

    /// Applies all staged edits, producing the new registry
    pub fn commit(self) -> PriorityRegistry {
        PriorityRegistry(self.entries)
    }
}
