use crate::entities::{
    experience::{EmploymentType, Experience},
    year_month::YearMonth,
};

use super::strings;

pub(super) fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: "exp-1".into(),
            title: "Data Analyst".into(),
            company: "Self-Directed Learning".into(),
            company_logo: None,
            location: "Nairobi, Kenya".into(),
            employment_type: EmploymentType::Freelance,
            start_date: YearMonth::new(2025, 1),
            end_date: None,
            current: true,
            description: "Building practical data analytics projects to demonstrate SQL, Power BI, and Excel skills.".into(),
            achievements: strings(&[
                "Built SQL data warehouse with fact/dimension tables and ETL pipelines",
                "Developed interactive Power BI dashboards for business insights",
                "Created Excel dashboards with advanced formulas and data visualization",
                "Cleaned, transformed, and modeled datasets for actionable insights",
            ]),
            technologies: strings(&["SQL Server", "Power BI", "Excel", "DAX", "ETL"]),
        },
        Experience {
            id: "exp-2".into(),
            title: "Site Assistant / Construction Worker".into(),
            company: "Private Building & Road Projects".into(),
            company_logo: None,
            location: "Kenya".into(),
            employment_type: EmploymentType::FullTime,
            start_date: YearMonth::new(2023, 1),
            end_date: Some(YearMonth::new(2024, 12)),
            current: false,
            description: "Monitored site activities, materials, and daily progress reports for construction projects.".into(),
            achievements: strings(&[
                "Monitored site activities, materials, and daily progress reports",
                "Collected and organized project data for cost tracking and planning",
                "Worked with engineers to ensure quality, accuracy, and safety compliance",
                "Built strong discipline, documentation, and attention to detail",
            ]),
            technologies: strings(&["Project Documentation", "Data Collection", "Quality Control", "Reporting"]),
        },
        Experience {
            id: "exp-3".into(),
            title: "Industrial Attachment Trainee".into(),
            company: "Benisa Limited".into(),
            company_logo: None,
            location: "Kenya".into(),
            employment_type: EmploymentType::Contract,
            start_date: YearMonth::new(2022, 1),
            end_date: Some(YearMonth::new(2022, 4)),
            current: false,
            description: "Assisted with surveying, measurements, and daily work records during industrial training.".into(),
            achievements: strings(&[
                "Assisted with surveying, measurements, and daily work records",
                "Prepared basic reports and maintained quantity logs",
                "Strengthened observational and analytical skills on site",
            ]),
            technologies: strings(&["Surveying", "Measurements", "Report Preparation", "Documentation"]),
        },
    ]
}
