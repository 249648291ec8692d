/// Number of skills shown when no explicit count is requested.
pub const DEFAULT_TOP_SKILLS: usize = 6;

/// Number of related projects shown under a project page.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Total experience is measured in 365-day years.
pub const DAYS_PER_YEAR: i64 = 365;
