use std::collections::BTreeMap;

use crate::{
    entities::skill::{Language, ProficiencyLabel, Skill, SkillCategory},
    repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    pub fn skills(&self) -> &[Skill] {
        self.skill_repo.skills()
    }

    pub fn by_category(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skill_repo
            .skills()
            .iter()
            .filter(|skill| skill.category == category)
            .collect()
    }

    /// Highest levels first. Equal levels keep their authored order.
    pub fn top_skills(&self, count: usize) -> Vec<&Skill> {
        let mut ranked: Vec<&Skill> = self.skill_repo.skills().iter().collect();
        ranked.sort_by(|a, b| b.level.cmp(&a.level));
        ranked.truncate(count);
        ranked
    }

    /// Categories with at least one skill, in category order rather than the
    /// order skills were authored
    pub fn used_categories(&self) -> Vec<SkillCategory> {
        let skills = self.skill_repo.skills();
        SkillCategory::ALL
            .into_iter()
            .filter(|category| skills.iter().any(|s| s.category == *category))
            .collect()
    }

    pub fn grouped_by_category(&self) -> BTreeMap<SkillCategory, Vec<&Skill>> {
        let mut grouped: BTreeMap<SkillCategory, Vec<&Skill>> = BTreeMap::new();
        for skill in self.skill_repo.skills() {
            grouped.entry(skill.category).or_default().push(skill);
        }
        grouped
    }

    /// Mean level rounded half up; 0 when there are no skills.
    pub fn average_level(&self) -> u8 {
        let skills = self.skill_repo.skills();
        if skills.is_empty() {
            return 0;
        }

        let total: u64 = skills.iter().map(|s| u64::from(s.level)).sum();
        let count = skills.len() as u64;
        let rounded = (2 * total + count) / (2 * count);
        u8::try_from(rounded).unwrap_or(u8::MAX)
    }

    pub fn proficiency_label(&self, level: u8) -> ProficiencyLabel {
        ProficiencyLabel::for_level(level)
    }

    pub fn languages(&self) -> &[Language] {
        self.skill_repo.languages()
    }

    /// Strongest tier first; languages on the same tier keep authored order.
    pub fn languages_by_proficiency(&self) -> Vec<&Language> {
        let mut ranked: Vec<&Language> = self.skill_repo.languages().iter().collect();
        ranked.sort_by_key(|language| language.level);
        ranked
    }
}
