use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::{
    errors::AppError,
    utils::validation::{validate_not_blank, validate_slug, validate_url},
};

// ───── Categories ───────────────────────────────────────────────────

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[display("Data Analysis")]
    #[serde(rename = "Data Analysis")]
    DataAnalysis,

    #[display("Dashboard")]
    Dashboard,

    #[display("Data Warehouse")]
    #[serde(rename = "Data Warehouse")]
    DataWarehouse,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::DataAnalysis,
        ProjectCategory::Dashboard,
        ProjectCategory::DataWarehouse,
    ];
}

impl FromStr for ProjectCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown project category: {}", s)))
    }
}

/// Query-side category selector. `All` sorts before every concrete category.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryFilter {
    #[display("All")]
    All,

    #[display("{_0}")]
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(category: ProjectCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ───── Project Record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub long_description: Option<String>,

    pub thumbnail: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    pub category: ProjectCategory,

    pub role: String,

    /// Free text, e.g. "2 weeks".
    pub duration: String,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    pub featured: bool,

    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Project {
    /// Case-insensitive substring match on title, description or any
    /// technology. `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }
}
