
use portfolio_data::{
    constants::DEFAULT_RELATED_LIMIT,
    entities::project::{CategoryFilter, ProjectCategory},
    repositories::catalog::Catalog,
    use_cases::project::ProjectHandler,
};
use test_utils::*;

fn builtin() -> ProjectHandler<&'static Catalog> {
    ProjectHandler::new(Catalog::builtin())
}

fn slugs(projects: &[&portfolio_data::entities::project::Project]) -> Vec<String> {
    projects.iter().map(|p| p.slug.clone()).collect()
}

#[test]
fn featured_projects_keep_source_order() {
    let handler = builtin();

    assert_eq!(
        slugs(&handler.featured_projects()),
        vec![
            "pizza-sales-analytics",
            "road-accident-analysis",
            "tech-job-market-analysis",
            "sales-data-warehouse",
        ]
    );
}

#[test]
fn by_slug_finds_exact_match_only() {
    let handler = builtin();

    assert_eq!(
        handler.by_slug("sales-data-warehouse").map(|p| p.id.as_str()),
        Some("proj-4")
    );
    assert!(handler.by_slug("Sales-Data-Warehouse").is_none());
    assert!(handler.by_slug("missing").is_none());
}

#[test]
fn by_id_finds_project() {
    let handler = builtin();
    assert_eq!(handler.by_id("proj-5").map(|p| p.slug.as_str()), Some("adventure-works-excel"));
    assert!(handler.by_id("proj-99").is_none());
}

#[test]
fn all_filter_returns_full_list_in_order() {
    let handler = builtin();
    let all = handler.by_category(CategoryFilter::All);

    assert_eq!(all.len(), handler.projects().len());
    for (found, expected) in all.iter().zip(handler.projects()) {
        assert_eq!(found.slug, expected.slug);
    }
}

#[test]
fn category_filter_matches_exactly() {
    let handler = builtin();

    assert_eq!(
        slugs(&handler.by_category(CategoryFilter::Only(ProjectCategory::Dashboard))),
        vec!["road-accident-analysis", "adventure-works-excel"]
    );
}

#[test]
fn counts_include_all_and_empty_categories() {
    let mut catalog = empty_catalog();
    catalog.projects = vec![
        project("one", ProjectCategory::DataAnalysis, &[]),
        project("two", ProjectCategory::DataAnalysis, &[]),
    ];
    let handler = ProjectHandler::new(&catalog);

    let counts = handler.count_by_category();
    let ordered: Vec<(String, usize)> = counts.iter().map(|(k, v)| (k.to_string(), *v)).collect();

    assert_eq!(
        ordered,
        vec![
            ("All".to_string(), 2),
            ("Data Analysis".to_string(), 2),
            ("Dashboard".to_string(), 0),
            ("Data Warehouse".to_string(), 0),
        ]
    );
}

#[test]
fn all_count_equals_total_for_builtin_catalog() {
    let handler = builtin();
    let counts = handler.count_by_category();

    assert_eq!(counts[&CategoryFilter::All], handler.projects().len());
    assert_eq!(counts[&CategoryFilter::Only(ProjectCategory::DataAnalysis)], 2);
    assert_eq!(counts[&CategoryFilter::Only(ProjectCategory::Dashboard)], 2);
    assert_eq!(counts[&CategoryFilter::Only(ProjectCategory::DataWarehouse)], 1);
}

#[test]
fn technologies_are_unique_sorted_and_stable() {
    let handler = builtin();
    let first = handler.all_technologies();

    let mut expected = first.clone();
    expected.sort();
    expected.dedup();

    assert_eq!(first, expected);
    assert_eq!(first, handler.all_technologies());
    assert!(first.contains(&"Power BI".to_string()));
}

#[test]
fn search_matches_technologies_case_insensitively() {
    let handler = builtin();

    assert_eq!(
        slugs(&handler.search("power bi")),
        vec!["pizza-sales-analytics", "road-accident-analysis"]
    );
}

#[test]
fn search_matches_title_and_description() {
    let handler = builtin();

    assert_eq!(slugs(&handler.search("WAREHOUSE")), vec!["sales-data-warehouse"]);
    assert_eq!(slugs(&handler.search("salary")), vec!["tech-job-market-analysis"]);
    assert_eq!(
        slugs(&handler.search("sql")),
        vec!["pizza-sales-analytics", "tech-job-market-analysis", "sales-data-warehouse"]
    );
}

#[test]
fn empty_search_matches_everything() {
    let handler = builtin();
    assert_eq!(handler.search("").len(), handler.projects().len());
}

#[test]
fn related_projects_share_category_and_exclude_self() {
    let handler = builtin();

    let related = handler.related_projects("pizza-sales-analytics", DEFAULT_RELATED_LIMIT);

    assert_eq!(slugs(&related), vec!["tech-job-market-analysis"]);
    assert!(related.iter().all(|p| p.category == ProjectCategory::DataAnalysis));
}

#[test]
fn related_projects_respect_limit() {
    let mut catalog = empty_catalog();
    catalog.projects = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|slug| project(slug, ProjectCategory::Dashboard, &[]))
        .collect();
    let handler = ProjectHandler::new(&catalog);

    assert_eq!(slugs(&handler.related_projects("c", 3)), vec!["a", "b", "d"]);
    assert!(handler.related_projects("c", 0).is_empty());
}

#[test]
fn related_projects_for_unknown_slug_is_empty() {
    assert!(builtin().related_projects("nope", 3).is_empty());
}

#[test]
fn category_filters_start_with_all() {
    let filters = builtin().category_filters();
    let names: Vec<String> = filters.iter().map(|f| f.to_string()).collect();

    assert_eq!(names, vec!["All", "Data Analysis", "Dashboard", "Data Warehouse"]);
}

#[test]
fn category_names_parse_back() {
    assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!(
        "Data Warehouse".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::Only(ProjectCategory::DataWarehouse)
    );
    assert!("Mobile App".parse::<CategoryFilter>().is_err());
    assert!("All".parse::<ProjectCategory>().is_err());
}
