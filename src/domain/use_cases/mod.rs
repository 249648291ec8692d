pub mod experience;
pub mod overview;
pub mod profile;
pub mod project;
pub mod skill;
