//! Filter types for projecting the task list.

use std::fmt;
use std::str::FromStr;

use super::{Category, Task};

/// Category filter applied by the view projection.
///
/// `All` shows the full cache; `Only` narrows the list to a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every task
    #[default]
    All,

    /// Show only tasks in the given category
    Only(Category),
}

impl CategoryFilter {
    /// Whether the given task passes this filter.
    pub fn admits(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => task.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category.as_str()),
        }
    }
}
