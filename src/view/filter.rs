//! Task filtering
//!
//! Pure predicates over the task collection: category membership,
//! case-insensitive text search, and a deadline window. The three criteria
//! are conjunctive and filtering preserves input order; ordering is the
//! sort stage's job.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::domain::Task;

/// Deadline window selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// No deadline constraint; tasks without a deadline pass too
    #[default]
    All,
    /// Deadline falls on the current day
    Today,
    /// Deadline falls in the current Sunday-to-Saturday week
    ThisWeek,
    /// Deadline falls in `[start of from, end of to]`
    ///
    /// With either bound missing the filter is a no-op, same as `All`.
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

/// Combined filter options for the task list
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Keep only tasks embedding this category
    pub category: Option<Uuid>,

    /// Case-insensitive substring match on name or description;
    /// empty matches everything
    pub search: String,

    /// Deadline window
    pub dates: DateFilter,
}

impl TaskFilter {
    /// Returns true if the task passes all three criteria
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        self.matches_category(task) && self.matches_search(task) && self.matches_dates(task, now)
    }

    fn matches_category(&self, task: &Task) -> bool {
        match self.category {
            Some(id) => task.has_category(id),
            None => true,
        }
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.name.to_lowercase().contains(&needle)
            || task
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_dates(&self, task: &Task, now: DateTime<Utc>) -> bool {
        let (start, end) = match self.dates {
            DateFilter::All => return true,
            DateFilter::Today => {
                let today = now.date_naive();
                (day_start(today), day_after(today))
            }
            DateFilter::ThisWeek => {
                let today = now.date_naive();
                let week_start = today
                    .checked_sub_days(Days::new(u64::from(now.weekday().num_days_from_sunday())))
                    .unwrap_or(today);
                let week_end = week_start
                    .checked_add_days(Days::new(6))
                    .unwrap_or(week_start);
                (day_start(week_start), day_after(week_end))
            }
            DateFilter::Custom { from, to } => match (from, to) {
                (Some(from), Some(to)) => (day_start(from), day_after(to)),
                // Incomplete range behaves like All
                _ => return true,
            },
        };

        match task.deadline {
            Some(deadline) => deadline >= start && deadline < end,
            None => false,
        }
    }
}

/// Midnight at the start of the given day, UTC
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Midnight at the start of the following day, UTC
///
/// Used as an exclusive upper bound, which makes the window inclusive of
/// the whole last day down to the final nanosecond.
fn day_after(date: NaiveDate) -> DateTime<Utc> {
    day_start(date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX))
}
