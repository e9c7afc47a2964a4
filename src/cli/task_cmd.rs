//! Task CLI commands

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Args;

use super::output::Output;
use crate::domain::{
    Category, PriorityId, Profile, SortKey, TaskDraft, TaskPatch,
};
use crate::storage::ProfileStore;
use crate::view::{self, DateFilter, TaskFilter, ViewOptions};

/// Deadline window choices for `--due`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DueWindow {
    #[default]
    All,
    Today,
    ThisWeek,
    Custom,
}

/// Filter and sort flags shared by `list` and `move`
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Search in task names and descriptions
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep only tasks in this category (name or id prefix)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Deadline window
    #[arg(long, value_enum, default_value = "all")]
    pub due: DueWindow,

    /// Start of the custom deadline window (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// End of the custom deadline window (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Sort key (defaults to the profile setting)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
}

impl ViewArgs {
    /// Resolves the flags into pipeline options against a loaded profile
    fn to_options(&self, profile: &Profile) -> Result<ViewOptions> {
        let category = match &self.category {
            Some(needle) => {
                ensure_categories_enabled(profile)?;
                Some(profile.category_by_name_or_prefix(needle)?.id)
            }
            None => None,
        };

        let dates = match self.due {
            DueWindow::All => DateFilter::All,
            DueWindow::Today => DateFilter::Today,
            DueWindow::ThisWeek => DateFilter::ThisWeek,
            DueWindow::Custom => DateFilter::Custom {
                from: self.from,
                to: self.to,
            },
        };

        Ok(ViewOptions {
            filter: TaskFilter {
                category,
                search: self.search.clone().unwrap_or_default(),
                dates,
            },
            sort: self.sort.unwrap_or(profile.settings.sort_key),
            done_to_bottom: profile.settings.done_to_bottom,
        })
    }
}

/// Parses a deadline given as `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`
pub fn parse_deadline(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M") {
        return Ok(dt.and_utc());
    }
    let date: NaiveDate = input.parse().with_context(|| {
        format!(
            "Invalid deadline '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM",
            input
        )
    })?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

fn ensure_categories_enabled(profile: &Profile) -> Result<()> {
    if !profile.settings.enable_categories {
        bail!("Categories are disabled; enable them with `settings categories true`");
    }
    Ok(())
}

fn resolve_priority(profile: &Profile, id: &str) -> Result<PriorityId> {
    let priority = PriorityId::new(id);
    if !profile.priorities.contains(&priority) {
        let known: Vec<_> = profile.priorities.iter().map(|p| p.id.as_str()).collect();
        bail!("Unknown priority '{}', known: {}", id, known.join(", "));
    }
    Ok(priority)
}

fn resolve_categories(profile: &Profile, names: &[String]) -> Result<Vec<Category>> {
    if !names.is_empty() {
        ensure_categories_enabled(profile)?;
    }
    names
        .iter()
        .map(|n| Ok(profile.category_by_name_or_prefix(n)?.clone()))
        .collect()
}

fn short_id(task: &crate::domain::Task) -> String {
    task.id.to_string()[..8].to_string()
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    output: &Output,
    store: &ProfileStore,
    name: &str,
    description: Option<String>,
    deadline: Option<String>,
    priority: Option<String>,
    categories: &[String],
    color: Option<String>,
    emoji: Option<String>,
    pin: bool,
) -> Result<()> {
    let mut profile = store.load()?;

    let draft = TaskDraft {
        name: name.to_string(),
        description,
        color,
        emoji,
        deadline: deadline.as_deref().map(parse_deadline).transpose()?,
        categories: resolve_categories(&profile, categories)?,
        priority: priority
            .as_deref()
            .map(|p| resolve_priority(&profile, p))
            .transpose()?,
        pinned: pin,
    };

    let id = profile.add_task(draft, Utc::now())?;
    store.save(&profile)?;

    output.verbose_ctx("add", &format!("Created task {}", id));
    if output.is_json() {
        output.data(&serde_json::json!({ "id": id, "name": name }));
    } else {
        output.success(&format!("Added task {} ({})", name, &id.to_string()[..8]));
    }
    Ok(())
}

pub fn list(output: &Output, store: &ProfileStore, args: &ViewArgs) -> Result<()> {
    let profile = store.load()?;
    let opts = args.to_options(&profile)?;
    let ranks = profile.priorities.rank_table();
    let tasks = view::build_view(&profile.tasks, &opts, &ranks, Utc::now());

    output.verbose_ctx(
        "list",
        &format!("{} of {} tasks displayed", tasks.len(), profile.tasks.len()),
    );

    if output.is_json() {
        output.data(&tasks);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks to show.");
        return Ok(());
    }

    let with_categories = profile.settings.enable_categories;
    print!(
        "{:<10} {:<3} {:<4} {:<30} {:<17} {:<10}",
        "ID", "", "PIN", "NAME", "DUE", "PRIORITY"
    );
    if with_categories {
        print!(" CATEGORIES");
    }
    println!();
    println!("{}", "-".repeat(if with_categories { 90 } else { 78 }));
    for task in &tasks {
        let done = if task.done { "[x]" } else { "[ ]" };
        let pin = if task.pinned { "*" } else { "" };
        let due = task
            .deadline
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let priority = profile
            .priorities
            .get(&task.priority)
            .map(|p| p.label.clone())
            .unwrap_or_else(|| task.priority.to_string());
        print!(
            "{:<10} {:<3} {:<4} {:<30} {:<17} {:<10}",
            short_id(task),
            done,
            pin,
            task.name,
            due,
            priority,
        );
        if with_categories {
            let cats: Vec<_> = task.categories.iter().map(|c| c.name.as_str()).collect();
            print!(" {}", cats.join(", "));
        }
        println!();
    }
    Ok(())
}

pub fn show(output: &Output, store: &ProfileStore, id: &str) -> Result<()> {
    let profile = store.load()?;
    let task = profile.task_by_prefix(id)?;

    if output.is_json() {
        output.data(task);
        return Ok(());
    }

    println!("{} {}", task.emoji.as_deref().unwrap_or(""), task.name);
    println!("  id:        {}", task.id);
    println!("  done:      {}", task.done);
    println!("  pinned:    {}", task.pinned);
    println!("  color:     {}", task.color);
    println!("  created:   {}", task.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(desc) = &task.description {
        println!("  notes:     {}", desc);
    }
    if let Some(deadline) = task.deadline {
        println!("  due:       {}", deadline.format("%Y-%m-%d %H:%M"));
    }
    println!("  priority:  {}", task.priority);
    if !task.categories.is_empty() {
        let cats: Vec<_> = task.categories.iter().map(|c| c.name.as_str()).collect();
        println!("  categories: {}", cats.join(", "));
    }
    if let Some(position) = task.position {
        println!("  position:  {}", position);
    }
    if let Some(last_save) = task.last_save {
        println!("  edited:    {}", last_save.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}

pub fn set_done(output: &Output, store: &ProfileStore, id: &str, done: bool) -> Result<()> {
    let mut profile = store.load()?;
    let task_id = profile.task_by_prefix(id)?.id;
    profile.set_done(task_id, done, Utc::now());
    store.save(&profile)?;
    output.success(&format!(
        "Task {} marked {}",
        &task_id.to_string()[..8],
        if done { "done" } else { "not done" }
    ));
    Ok(())
}

pub fn set_pinned(output: &Output, store: &ProfileStore, id: &str, pinned: bool) -> Result<()> {
    let mut profile = store.load()?;
    let task_id = profile.task_by_prefix(id)?.id;
    profile.set_pinned(task_id, pinned, Utc::now());
    store.save(&profile)?;
    output.success(&format!(
        "Task {} {}",
        &task_id.to_string()[..8],
        if pinned { "pinned" } else { "unpinned" }
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn edit(
    output: &Output,
    store: &ProfileStore,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    deadline: Option<String>,
    clear_deadline: bool,
    priority: Option<String>,
    categories: Option<Vec<String>>,
    color: Option<String>,
    emoji: Option<String>,
) -> Result<()> {
    let mut profile = store.load()?;
    let task_id = profile.task_by_prefix(id)?.id;

    let patch = TaskPatch {
        name,
        description,
        color,
        emoji,
        deadline: deadline.as_deref().map(parse_deadline).transpose()?,
        clear_deadline,
        priority: priority
            .as_deref()
            .map(|p| resolve_priority(&profile, p))
            .transpose()?,
        categories: categories
            .as_deref()
            .map(|names| resolve_categories(&profile, names))
            .transpose()?,
    };

    if patch.is_empty() {
        bail!("Nothing to change; pass at least one field flag");
    }

    profile.edit_task(task_id, patch, Utc::now())?;
    store.save(&profile)?;
    output.success(&format!("Task {} updated", &task_id.to_string()[..8]));
    Ok(())
}

pub fn remove(output: &Output, store: &ProfileStore, id: &str) -> Result<()> {
    let mut profile = store.load()?;
    let task_id = profile.task_by_prefix(id)?.id;
    profile.remove_task(task_id);
    store.save(&profile)?;
    output.success(&format!("Task {} deleted", &task_id.to_string()[..8]));
    Ok(())
}

/// Drag-reorders `dragged` onto `target`'s slot in the displayed list
pub fn move_task(
    output: &Output,
    store: &ProfileStore,
    dragged: &str,
    target: &str,
    args: &ViewArgs,
) -> Result<()> {
    let mut profile = store.load()?;
    let dragged_id = profile.task_by_prefix(dragged)?.id;
    let target_id = profile.task_by_prefix(target)?.id;

    // Reorder happens against what the user currently sees: the same
    // filtered and sorted list that `list` would print.
    let opts = args.to_options(&profile)?;
    let ranks = profile.priorities.rank_table();
    let now = Utc::now();
    let displayed = view::build_view(&profile.tasks, &opts, &ranks, now);

    match view::apply_reorder(&profile.tasks, &displayed, dragged_id, target_id, now) {
        Some(tasks) => {
            profile.replace_tasks(tasks);
            store.save(&profile)?;
            output.success(&format!(
                "Moved {} to {}'s slot",
                &dragged_id.to_string()[..8],
                &target_id.to_string()[..8]
            ));
        }
        None => output.success("Nothing to move"),
    }
    Ok(())
}
