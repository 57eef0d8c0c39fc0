//! The fixed set of task categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the four task categories.
///
/// The wire representation matches the values stored by existing clients
/// (`"self"`, `"home"`, `"work"`, `"other"`); anything else is rejected when
/// a snapshot is decoded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Personal development tasks
    #[default]
    #[serde(rename = "self")]
    SelfImprovement,

    /// Household tasks
    Home,

    /// Work tasks
    Work,

    /// Everything else
    Other,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "self" | "self-improvement" => Ok(Category::SelfImprovement),
            "home" => Ok(Category::Home),
            "work" => Ok(Category::Work),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SelfImprovement => "self",
            Category::Home => "home",
            Category::Work => "work",
            Category::Other => "other",
        }
    }

    /// Korean display label used by the rendered list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use haru_core::models::Category;
    ///
    /// assert_eq!(Category::Home.label(), "가정");
    /// assert_eq!(Category::SelfImprovement.label(), "자기계발");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Category::SelfImprovement => "자기계발",
            Category::Home => "가정",
            Category::Work => "업무",
            Category::Other => "기타",
        }
    }

    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::SelfImprovement,
        Category::Home,
        Category::Work,
        Category::Other,
    ];
}
