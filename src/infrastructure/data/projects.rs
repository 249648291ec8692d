use crate::entities::project::{Project, ProjectCategory};

use super::strings;

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj-1".into(),
            slug: "pizza-sales-analytics".into(),
            title: "Pizza Sales Analytics".into(),
            description: "End-to-end analytics pipeline: cleaned raw data, built SQL models, and created interactive Power BI dashboard.".into(),
            long_description: Some(
                "Built a complete data analytics pipeline for pizza sales data. Cleaned and transformed raw data \
                 using SQL, designed a dimensional model for analytics, and created an interactive Power BI \
                 dashboard that reveals key business insights."
                    .into(),
            ),
            thumbnail: "/projects/pizza-sales.jpg".into(),
            images: strings(&["/projects/pizza-sales.jpg"]),
            technologies: strings(&["SQL", "Power BI", "Excel", "DAX", "ETL"]),
            category: ProjectCategory::DataAnalysis,
            role: "Data Analyst".into(),
            duration: "2 weeks".into(),
            live_url: None,
            github_url: Some("https://github.com/ndiragurichard/pizza_project".into()),
            featured: true,
            highlights: strings(&[
                "Identified top products and peak sales periods",
                "Discovered revenue trends and patterns",
                "Built complete ETL pipeline from raw data to dashboard",
            ]),
        },
        Project {
            id: "proj-2".into(),
            slug: "road-accident-analysis".into(),
            title: "Road Accident Analysis".into(),
            description: "Data visualization project analyzing accident severity, seasonality, and high-risk zones for Kenya and India.".into(),
            long_description: Some(
                "Analyzed road accident data from Kenya and India to identify patterns in accident severity, \
                 seasonality, and high-risk zones. Created visualizations to highlight safety improvement \
                 areas and support data-driven decision making."
                    .into(),
            ),
            thumbnail: "/projects/road-accident.jpg".into(),
            images: Vec::new(),
            technologies: strings(&["Power BI", "Excel", "Data Visualization", "DAX"]),
            category: ProjectCategory::Dashboard,
            role: "Data Analyst".into(),
            duration: "2 weeks".into(),
            live_url: None,
            github_url: None,
            featured: true,
            highlights: strings(&[
                "Analyzed accident severity across regions",
                "Identified seasonal patterns and trends",
                "Highlighted high-risk zones for safety improvements",
            ]),
        },
        Project {
            id: "proj-3".into(),
            slug: "tech-job-market-analysis".into(),
            title: "Tech Job Market Analysis".into(),
            description: "Analyzed job listings to identify demanded skills, trends, and salary patterns in the tech industry.".into(),
            long_description: Some(
                "Collected and analyzed tech job listings to understand market demands. Identified the most \
                 sought-after skills, emerging trends, and salary patterns to provide actionable insights for \
                 job seekers and career planners."
                    .into(),
            ),
            thumbnail: "/projects/tech-jobs.jpg".into(),
            images: Vec::new(),
            technologies: strings(&["Excel", "SQL", "Data Cleaning", "Data Analysis"]),
            category: ProjectCategory::DataAnalysis,
            role: "Data Analyst".into(),
            duration: "1 week".into(),
            live_url: None,
            github_url: None,
            featured: true,
            highlights: strings(&[
                "Identified most demanded tech skills",
                "Discovered salary trends by role",
                "Mapped skill requirements by job level",
            ]),
        },
        Project {
            id: "proj-4".into(),
            slug: "sales-data-warehouse".into(),
            title: "Sales Data Warehouse".into(),
            description: "Designed a simple data warehouse schema with ETL scripts for fact/dimension tables and aggregations.".into(),
            long_description: Some(
                "Designed and implemented a sales data warehouse from scratch. Created dimensional modeling \
                 schema with fact and dimension tables, implemented ETL scripts for data loading, and built \
                 aggregation tables for optimized query performance."
                    .into(),
            ),
            thumbnail: "/projects/data-warehouse.jpg".into(),
            images: Vec::new(),
            technologies: strings(&["SQL Server", "SQL", "ETL", "Data Modeling"]),
            category: ProjectCategory::DataWarehouse,
            role: "Data Engineer/Analyst".into(),
            duration: "3 weeks".into(),
            live_url: None,
            github_url: Some("https://github.com/ndiragurichard/SQL_PROJECT".into()),
            featured: true,
            highlights: strings(&[
                "Designed dimensional data warehouse schema",
                "Implemented complete ETL pipeline",
                "Created optimized aggregation tables",
            ]),
        },
        Project {
            id: "proj-5".into(),
            slug: "adventure-works-excel".into(),
            title: "Adventure Works Excel Dashboard".into(),
            description: "Collected, organized, and reported project data including materials, costs, and daily progress.".into(),
            long_description: Some(
                "Built comprehensive Excel dashboards for Adventure Works data. Focused on data organization, \
                 cost tracking, and daily progress reporting to strengthen accuracy, documentation, and \
                 analytical thinking."
                    .into(),
            ),
            thumbnail: "/projects/adventure-works.jpg".into(),
            images: Vec::new(),
            technologies: strings(&["Excel", "Pivot Tables", "Charts", "Formulas"]),
            category: ProjectCategory::Dashboard,
            role: "Data Analyst".into(),
            duration: "2 weeks".into(),
            live_url: None,
            github_url: Some("https://github.com/ndiragurichard/adventure_works_excel".into()),
            featured: false,
            highlights: strings(&[
                "Built interactive Excel dashboards",
                "Tracked materials and costs effectively",
                "Created daily progress reports",
            ]),
        },
    ]
}
