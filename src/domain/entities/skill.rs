use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Skill categories, in the order they are displayed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[display("Data Analysis")]
    #[serde(rename = "Data Analysis")]
    DataAnalysis,

    #[display("Visualization")]
    Visualization,

    #[display("Databases")]
    Databases,

    #[display("Programming")]
    Programming,

    #[display("Soft Skills")]
    #[serde(rename = "Soft Skills")]
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::DataAnalysis,
        SkillCategory::Visualization,
        SkillCategory::Databases,
        SkillCategory::Programming,
        SkillCategory::SoftSkills,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(range(max = 100, message = "Level must be between 0 and 100"))]
    pub level: u8,

    pub category: SkillCategory,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub years_of_experience: Option<u32>,
}

// ───── Proficiency ──────────────────────────────────────────────────

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ProficiencyLabel {
    Beginner,
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLabel {
    pub fn for_level(level: u8) -> Self {
        match level {
            90.. => ProficiencyLabel::Expert,
            70..=89 => ProficiencyLabel::Advanced,
            50..=69 => ProficiencyLabel::Intermediate,
            30..=49 => ProficiencyLabel::Basic,
            _ => ProficiencyLabel::Beginner,
        }
    }
}

// ───── Spoken Languages ─────────────────────────────────────────────

/// Declaration order runs from strongest to weakest.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageLevel {
    Native,
    Fluent,
    Professional,
    Intermediate,
    Basic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: LanguageLevel,
}
