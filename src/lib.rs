mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;

pub use domain::{entities, use_cases};
pub use interfaces::repositories;
pub use infrastructure::{clock, utils};

use clock::{Clock, SystemClock};
use repositories::catalog::Catalog;
use use_cases::{
    experience::ExperienceHandler, profile::ProfileHandler, project::ProjectHandler,
    skill::SkillHandler,
};

pub struct AppState<'a, C: Clock = SystemClock> {
    pub profile_handler: ProfileHandler<&'a Catalog>,
    pub skill_handler: SkillHandler<&'a Catalog>,
    pub experience_handler: ExperienceHandler<&'a Catalog, C>,
    pub project_handler: ProjectHandler<&'a Catalog>,
}

impl<'a, C: Clock> AppState<'a, C> {
    pub fn new(catalog: &'a Catalog, clock: C) -> Self {
        AppState {
            profile_handler: ProfileHandler::new(catalog),
            skill_handler: SkillHandler::new(catalog),
            experience_handler: ExperienceHandler::new(catalog, clock),
            project_handler: ProjectHandler::new(catalog),
        }
    }
}

impl AppState<'static> {
    /// Handlers over the built-in catalog, measuring time with the system clock.
    pub fn builtin() -> Self {
        AppState::new(Catalog::builtin(), SystemClock)
    }
}
