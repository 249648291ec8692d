use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    clock::Clock,
    constants::DEFAULT_TOP_SKILLS,
    entities::{
        profile::SocialLink,
        project::{CategoryFilter, Project},
        skill::{ProficiencyLabel, Skill, SkillCategory},
    },
    errors::AppError,
    use_cases::experience::format_month,
    AppState,
};

// ───── Export Models ────────────────────────────────────────────────

/// Everything a landing page renders, gathered from the query handlers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOverview<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub email: &'a str,
    pub location: &'a str,
    pub initials: String,
    pub has_photo: bool,
    pub social_links: Vec<SocialLink<'a>>,
    pub years_of_experience: u32,
    pub current_position: Option<PositionSummary<'a>>,
    pub top_skills: Vec<SkillSummary<'a>>,
    pub skill_groups: BTreeMap<SkillCategory, Vec<&'a Skill>>,
    pub average_skill_level: u8,
    pub project_counts: BTreeMap<CategoryFilter, usize>,
    pub featured_projects: Vec<&'a Project>,
    pub project_technologies: Vec<String>,
    pub experience_technologies: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSummary<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub since: String,
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct SkillSummary<'a> {
    pub name: &'a str,
    pub level: u8,
    pub label: ProficiencyLabel,
}

// ───── Assembly ─────────────────────────────────────────────────────

impl<'a> SiteOverview<'a> {
    pub fn build<C: Clock>(state: &'a AppState<'_, C>) -> Self {
        let profile = state.profile_handler.profile();
        let experience = &state.experience_handler;
        let skills = &state.skill_handler;
        let projects = &state.project_handler;

        let current_position = experience.current_position().map(|exp| PositionSummary {
            title: &exp.title,
            company: &exp.company,
            since: format_month(exp.start_date),
            duration: experience.duration(exp),
        });

        let top_skills = skills
            .top_skills(DEFAULT_TOP_SKILLS)
            .into_iter()
            .map(|skill| SkillSummary {
                name: &skill.name,
                level: skill.level,
                label: skills.proficiency_label(skill.level),
            })
            .collect();

        let overview = SiteOverview {
            name: &profile.name,
            title: &profile.title,
            email: &profile.email,
            location: &profile.location,
            initials: state.profile_handler.initials(),
            has_photo: state.profile_handler.has_photo(),
            social_links: state.profile_handler.social_links(),
            years_of_experience: experience.total_years_of_experience(),
            current_position,
            top_skills,
            skill_groups: skills.grouped_by_category(),
            average_skill_level: skills.average_level(),
            project_counts: projects.count_by_category(),
            featured_projects: projects.featured_projects(),
            project_technologies: projects.all_technologies(),
            experience_technologies: experience.all_technologies(),
        };

        tracing::debug!(
            featured = overview.featured_projects.len(),
            skill_groups = overview.skill_groups.len(),
            "Built site overview"
        );
        overview
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, AppError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
