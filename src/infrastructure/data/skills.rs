use crate::entities::skill::{Language, LanguageLevel, Skill, SkillCategory};

fn skill(name: &str, level: u8, category: SkillCategory, years: u32) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category,
        icon: None,
        years_of_experience: Some(years),
    }
}

pub(super) fn skills() -> Vec<Skill> {
    use SkillCategory::*;

    vec![
        // data analysis
        skill("SQL", 90, DataAnalysis, 1),
        skill("Excel", 85, DataAnalysis, 2),
        skill("Python", 60, Programming, 1),
        skill("Data Cleaning", 75, DataAnalysis, 1),
        skill("ETL Processes", 75, DataAnalysis, 1),
        skill("Data Modeling", 70, DataAnalysis, 1),
        // visualization
        skill("Power BI", 80, Visualization, 1),
        skill("Data Visualization", 85, Visualization, 1),
        skill("Dashboard Development", 80, Visualization, 1),
        // databases
        skill("SQL Server", 85, Databases, 1),
        skill("Database Management", 80, Databases, 1),
        // soft skills
        skill("Analytical Thinking", 90, SoftSkills, 3),
        skill("Problem Solving", 85, SoftSkills, 3),
        skill("Detail-Oriented", 90, SoftSkills, 3),
        skill("Fast Learner", 85, SoftSkills, 2),
        skill("Collaboration", 80, SoftSkills, 3),
        skill("Initiative", 85, SoftSkills, 2),
    ]
}

pub(super) fn languages() -> Vec<Language> {
    vec![
        Language { name: "English".into(), level: LanguageLevel::Professional },
        Language { name: "Swahili".into(), level: LanguageLevel::Native },
    ]
}
