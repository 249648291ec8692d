//! Authored portfolio content, built once on first access.

mod experience;
mod profile;
mod projects;
mod skills;

use once_cell::sync::Lazy;

use crate::repositories::catalog::Catalog;

pub static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    profile: profile::profile(),
    skills: skills::skills(),
    languages: skills::languages(),
    experience: experience::experience(),
    projects: projects::projects(),
});

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
