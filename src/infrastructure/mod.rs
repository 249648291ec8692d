pub mod clock;
pub mod data;
pub mod utils;
