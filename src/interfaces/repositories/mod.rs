pub mod catalog;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
