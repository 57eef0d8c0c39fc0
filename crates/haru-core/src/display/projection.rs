//! The pure view projection: filter, sort, and map to display rows.

use std::fmt;

use super::collections::TaskList;
use super::datetime::{ClockTime, MonthDay};
use super::escape::escape_html;
use crate::models::{Category, CategoryFilter, Task, TaskId};

/// One display-ready row of the rendered list.
///
/// Text is already escaped; date and time carry their display labels so a
/// consuming UI layer never re-derives them.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedTask {
    /// Identity, kept for the edit/delete/toggle affordances
    pub id: TaskId,
    /// Checkbox state
    pub completed: bool,
    /// Escaped task text
    pub text: String,
    /// Category, for the label and for styling hooks
    pub category: Category,
    /// Human-readable date label, empty when the task has no date
    pub date_label: String,
    /// Time label, empty when the task has no time
    pub time_label: String,
}

impl From<&Task> for ListedTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            completed: task.completed,
            text: escape_html(&task.text),
            category: task.category,
            date_label: MonthDay(&task.date).to_string(),
            time_label: ClockTime(&task.time).to_string(),
        }
    }
}

impl fmt::Display for ListedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "- [{mark}] {} [{}]", self.text, self.category.label())?;

        if !self.date_label.is_empty() {
            write!(f, " {}", self.date_label)?;
        }
        if !self.time_label.is_empty() {
            write!(f, " {}", self.time_label)?;
        }
        writeln!(f, " `{}`", self.id)
    }
}

/// Projects the cache through a category filter into an ordered list.
///
/// Tasks are sorted ascending by date then time using plain string
/// comparison; ISO dates and zero-padded 24-hour times make lexicographic
/// order equal chronological order, and empty strings sort first. The sort
/// is stable, so ties keep their store order.
pub fn project(tasks: &[Task], filter: CategoryFilter) -> TaskList {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| filter.admits(task)).collect();
    visible.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));

    TaskList(visible.into_iter().map(ListedTask::from).collect())
}
