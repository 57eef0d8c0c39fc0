//! Collection wrapper for the rendered task list.

use std::{fmt, ops::Index};

use super::projection::ListedTask;

/// Newtype wrapper for displaying the projected task list.
///
/// Formats each row through [`ListedTask`]'s Display and renders the
/// empty-state placeholder when there is nothing to show, so consumers
/// never special-case an empty cache.
pub struct TaskList(pub Vec<ListedTask>);

impl TaskList {
    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of rows in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the row at the given index.
    pub fn get(&self, index: usize) -> Option<&ListedTask> {
        self.0.get(index)
    }

    /// Get an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ListedTask> {
        self.0.iter()
    }
}

impl Index<usize> for TaskList {
    type Output = ListedTask;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TaskList {
    type Item = ListedTask;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a ListedTask;
    type IntoIter = std::slice::Iter<'a, ListedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "할 일이 없습니다.")?;
            writeln!(f, "새로운 할 일을 추가해보세요!")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}
