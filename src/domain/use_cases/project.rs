use std::collections::{BTreeMap, BTreeSet};

use crate::{
    entities::project::{CategoryFilter, Project, ProjectCategory},
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    pub fn projects(&self) -> &[Project] {
        self.project_repo.projects()
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.project_repo
            .projects()
            .iter()
            .filter(|project| project.featured)
            .collect()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Project> {
        let found = self.project_repo.projects().iter().find(|p| p.slug == slug);
        if found.is_none() {
            tracing::debug!("No project with slug {:?}", slug);
        }
        found
    }

    pub fn by_id(&self, id: &str) -> Option<&Project> {
        self.project_repo.projects().iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.project_repo
            .projects()
            .iter()
            .filter(|project| filter.matches(project.category))
            .collect()
    }

    /// `All` followed by every declared category, for filter controls
    pub fn category_filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn all_technologies(&self) -> Vec<String> {
        self.project_repo
            .projects()
            .iter()
            .flat_map(|project| project.technologies.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Project totals keyed by filter. Every declared category is present,
    /// including those without projects.
    pub fn count_by_category(&self) -> BTreeMap<CategoryFilter, usize> {
        let projects = self.project_repo.projects();

        let mut counts: BTreeMap<CategoryFilter, usize> = ProjectCategory::ALL
            .into_iter()
            .map(|category| (CategoryFilter::Only(category), 0))
            .collect();
        counts.insert(CategoryFilter::All, projects.len());

        for project in projects {
            *counts.entry(CategoryFilter::Only(project.category)).or_default() += 1;
        }
        counts
    }

    /// Case-insensitive match on title, description or technologies.
    /// An empty query returns every project.
    pub fn search(&self, query: &str) -> Vec<&Project> {
        let needle = query.to_lowercase();
        let results: Vec<&Project> = self
            .project_repo
            .projects()
            .iter()
            .filter(|project| project.matches_lowercase(&needle))
            .collect();

        tracing::debug!("Project search {:?} matched {} entries", query, results.len());
        results
    }

    /// Other projects in the same category as `slug`, at most `limit`
    pub fn related_projects(&self, slug: &str, limit: usize) -> Vec<&Project> {
        let Some(current) = self.by_slug(slug) else {
            return Vec::new();
        };

        self.project_repo
            .projects()
            .iter()
            .filter(|p| p.slug != current.slug && p.category == current.category)
            .take(limit)
            .collect()
    }
}
