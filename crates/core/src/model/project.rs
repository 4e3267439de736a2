use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::ids::ProjectId;

/// Showcase category a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Web,
    Ai,
    Iot,
    Mobile,
    Other,
}

impl ProjectCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [Self::Web, Self::Ai, Self::Iot, Self::Mobile, Self::Other];

    /// Human-facing label, as shown on filter buttons.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Ai => "AI",
            Self::Iot => "IoT",
            Self::Mobile => "Mobile",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    raw: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown project category: {}", self.raw)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for ProjectCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "ai" => Ok(Self::Ai),
            "iot" => Ok(Self::Iot),
            "mobile" => Ok(Self::Mobile),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError { raw: s.to_string() }),
        }
    }
}

/// Filter applied to the showcase grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == *category,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
        }
    }
}

/// A member-built project shown in the showcase. Static seed data, no
/// lifecycle at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
}
