use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        experience::Experience,
        profile::Profile,
        project::Project,
        skill::{Language, Skill},
    },
    errors::{AppError, FieldError},
    infrastructure::data,
    repositories::{
        experience::ExperienceRepository, profile::ProfileRepository,
        project::ProjectRepository, skill::SkillRepository,
    },
};

/// The four read-only portfolio tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// The process-wide catalog built from the authored tables.
    pub fn builtin() -> &'static Catalog {
        &data::CATALOG
    }

    /// Load-time assertions over every table.
    ///
    /// All problems are reported together; a passing catalog is not modified.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if let Err(e) = self.profile.validate() {
            errors.extend(FieldError::collect(Some("profile"), &e));
        }

        for (i, skill) in self.skills.iter().enumerate() {
            if let Err(e) = skill.validate() {
                errors.extend(FieldError::collect(Some(format!("skills[{}]", i).as_str()), &e));
            }
        }

        for (i, exp) in self.experience.iter().enumerate() {
            if let Err(e) = exp.validate() {
                errors.extend(FieldError::collect(Some(format!("experience[{}]", i).as_str()), &e));
            }
        }
        errors.extend(duplicates("experience", "id", self.experience.iter().map(|e| e.id.as_str())));

        for (i, project) in self.projects.iter().enumerate() {
            if let Err(e) = project.validate() {
                errors.extend(FieldError::collect(Some(format!("projects[{}]", i).as_str()), &e));
            }
        }
        errors.extend(duplicates("projects", "id", self.projects.iter().map(|p| p.id.as_str())));
        errors.extend(duplicates("projects", "slug", self.projects.iter().map(|p| p.slug.as_str())));

        if errors.is_empty() {
            tracing::debug!(
                skills = self.skills.len(),
                experience = self.experience.len(),
                projects = self.projects.len(),
                "Catalog validated"
            );
            Ok(())
        } else {
            for e in &errors {
                tracing::warn!("Invalid catalog entry {}: {}", e.field, e.message);
            }
            Err(AppError::ValidationError(errors))
        }
    }
}

fn duplicates<'a>(
    table: &str,
    field: &str,
    values: impl Iterator<Item = &'a str>,
) -> Vec<FieldError> {
    let mut seen = HashSet::new();
    values
        .enumerate()
        .filter(|(_, value)| !seen.insert(*value))
        .map(|(i, value)| {
            FieldError::new(
                format!("{}[{}].{}", table, i, field),
                format!("Duplicate {} {:?}", field, value),
            )
        })
        .collect()
}

impl ProfileRepository for Catalog {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl SkillRepository for Catalog {
    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn languages(&self) -> &[Language] {
        &self.languages
    }
}

impl ExperienceRepository for Catalog {
    fn experience(&self) -> &[Experience] {
        &self.experience
    }
}

impl ProjectRepository for Catalog {
    fn projects(&self) -> &[Project] {
        &self.projects
    }
}
