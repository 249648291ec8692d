
use portfolio_data::{
    entities::project::ProjectCategory,
    errors::AppError,
    repositories::catalog::Catalog,
    use_cases::overview::SiteOverview,
    AppState,
};
use serde_json::{json, Value};
use test_utils::*;

fn invalid_fields(catalog: &Catalog) -> Vec<String> {
    match catalog.validate() {
        Err(AppError::ValidationError(errors)) => errors.into_iter().map(|e| e.field).collect(),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn builtin_catalog_is_valid() {
    assert!(Catalog::builtin().validate().is_ok());
}

#[test]
fn fixture_catalog_is_valid() {
    assert!(empty_catalog().validate().is_ok());
}

#[test]
fn rejects_invalid_profile_fields() {
    let mut catalog = empty_catalog();
    catalog.profile.email = "not-an-email".into();
    catalog.profile.linkedin = Some("ftp://linkedin.example".into());

    assert_eq!(invalid_fields(&catalog), vec!["profile.email", "profile.linkedin"]);
}

#[test]
fn rejects_level_above_one_hundred() {
    let mut catalog = empty_catalog();
    catalog.skills = vec![skill("Overconfidence", 101, portfolio_data::entities::skill::SkillCategory::SoftSkills)];

    assert_eq!(invalid_fields(&catalog), vec!["skills[0].level"]);
}

#[test]
fn rejects_inconsistent_current_flag() {
    let mut catalog = empty_catalog();
    catalog.experience = vec![
        experience("ok", "2020-01", Some("2021-01"), false),
        experience("current-with-end", "2021-01", Some("2022-01"), true),
        experience("past-without-end", "2021-01", None, false),
        experience("ends-before-start", "2021-05", Some("2021-01"), false),
    ];

    let fields = invalid_fields(&catalog);
    assert_eq!(fields.len(), 3);
    assert!(fields.iter().all(|f| f.starts_with("experience[")));
    assert!(!fields.iter().any(|f| f.starts_with("experience[0]")));
}

#[test]
fn rejects_duplicate_ids_and_slugs() {
    let mut catalog = empty_catalog();
    let mut copy = project("alpha", ProjectCategory::Dashboard, &[]);
    copy.id = "id-beta".into();
    catalog.projects = vec![
        project("alpha", ProjectCategory::Dashboard, &[]),
        project("beta", ProjectCategory::Dashboard, &[]),
        copy,
    ];
    catalog.experience = vec![
        experience("exp-1", "2020-01", Some("2021-01"), false),
        experience("exp-1", "2021-01", Some("2022-01"), false),
    ];

    let fields = invalid_fields(&catalog);
    assert!(fields.contains(&"projects[2].id".to_string()));
    assert!(fields.contains(&"projects[2].slug".to_string()));
    assert!(fields.contains(&"experience[1].id".to_string()));
}

#[test]
fn rejects_slug_that_is_not_url_safe() {
    let mut catalog = empty_catalog();
    catalog.projects = vec![project("Pizza Sales", ProjectCategory::DataAnalysis, &[])];

    assert_eq!(invalid_fields(&catalog), vec!["projects[0].slug"]);
}

#[test]
fn unknown_category_fails_to_deserialize() {
    let result: Result<Catalog, _> = serde_json::from_value(json!({
        "profile": serde_json::to_value(&empty_catalog().profile).unwrap(),
        "projects": [{
            "id": "p", "slug": "p", "title": "P", "description": "d",
            "thumbnail": "/t.jpg", "category": "All", "role": "r",
            "duration": "1 week", "featured": false
        }]
    }));

    assert!(result.is_err());
}

#[test]
fn experience_dates_deserialize_from_year_month_strings() {
    let catalog: Catalog = serde_json::from_value(json!({
        "profile": serde_json::to_value(&empty_catalog().profile).unwrap(),
        "experience": [{
            "id": "exp-1", "title": "Analyst", "company": "Acme", "location": "Remote",
            "type": "part-time", "startDate": "2024-03", "current": true,
            "description": "Numbers"
        }]
    }))
    .unwrap();

    assert_eq!(catalog.experience[0].start_date.to_string(), "2024-03");
    assert!(catalog.experience[0].end_date.is_none());
    assert!(catalog.validate().is_ok());
}

#[test]
fn overview_exports_builtin_catalog() {
    let state = builtin_state();
    let overview = SiteOverview::build(&state);
    let json: Value = serde_json::from_str(&overview.to_json(false).unwrap()).unwrap();

    assert_eq!(json["initials"], "RN");
    assert_eq!(json["yearsOfExperience"], 4);
    assert_eq!(json["currentPosition"]["since"], "Jan 2025");
    assert_eq!(json["currentPosition"]["duration"], "1 yr 9 mo");
    assert_eq!(json["projectCounts"]["All"], 5);
    assert_eq!(json["projectCounts"]["Data Warehouse"], 1);
    assert_eq!(json["topSkills"][0]["label"], "Expert");
    assert_eq!(json["socialLinks"][0]["platform"], "github");
    assert_eq!(json["featuredProjects"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["skillGroups"].as_object().unwrap().keys().next().map(String::as_str),
        Some("Data Analysis")
    );
}

#[test]
fn builtin_state_reads_builtin_catalog() {
    let state = AppState::builtin();

    assert_eq!(state.profile_handler.initials(), "RN");
    assert_eq!(state.project_handler.projects().len(), Catalog::builtin().projects.len());
    assert_eq!(state.experience_handler.entries().len(), 3);
    // the earliest position starts in 2022, so the system clock yields at least 4 years
    assert!(state.experience_handler.total_years_of_experience() >= 4);
}
