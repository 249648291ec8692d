pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
pub mod year_month;
