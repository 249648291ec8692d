use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    constants::DAYS_PER_YEAR,
    entities::{experience::Experience, year_month::YearMonth},
    repositories::experience::ExperienceRepository,
};

pub struct ExperienceHandler<R, C>
where
    R: ExperienceRepository,
    C: Clock,
{
    pub experience_repo: R,
    pub clock: C,
}

impl<R, C> ExperienceHandler<R, C>
where
    R: ExperienceRepository,
    C: Clock,
{
    pub fn new(experience_repo: R, clock: C) -> Self {
        ExperienceHandler { experience_repo, clock }
    }

    pub fn entries(&self) -> &[Experience] {
        self.experience_repo.experience()
    }

    pub fn total_years_of_experience(&self) -> u32 {
        self.total_years_of_experience_at(self.clock.today())
    }

    /// Whole 365-day years from the earliest start to the latest end.
    ///
    /// When any position is current the span runs to `today`, whatever the
    /// other entries' end dates are.
    pub fn total_years_of_experience_at(&self, today: NaiveDate) -> u32 {
        let entries = self.experience_repo.experience();

        let Some(earliest) = entries.iter().map(|exp| exp.start_date).min() else {
            return 0;
        };

        let latest_end = if entries.iter().any(|exp| exp.current) {
            today
        } else {
            match entries.iter().filter_map(|exp| exp.end_date).max() {
                Some(end) => end.first_day(),
                None => return 0,
            }
        };

        let days = latest_end.signed_duration_since(earliest.first_day()).num_days();
        u32::try_from(days.max(0) / DAYS_PER_YEAR).unwrap_or(u32::MAX)
    }

    pub fn current_position(&self) -> Option<&Experience> {
        self.experience_repo.experience().iter().find(|exp| exp.current)
    }

    /// Every technology used across positions, deduplicated and sorted
    pub fn all_technologies(&self) -> Vec<String> {
        self.experience_repo
            .experience()
            .iter()
            .flat_map(|exp| exp.technologies.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn duration(&self, entry: &Experience) -> String {
        self.duration_at(entry, self.clock.today())
    }

    pub fn duration_at(&self, entry: &Experience, today: NaiveDate) -> String {
        let end = entry.effective_end(YearMonth::from(today));
        format_months(entry.start_date.months_until(end).max(0))
    }
}

/// `Jan 2023` style rendering of a month.
pub fn format_month(value: YearMonth) -> String {
    value.format_short()
}

/// Renders a month count as `<Y> yr <M> mo`, dropping a zero component.
pub fn format_months(months: i64) -> String {
    let years = months / 12;
    let remaining = months % 12;

    match (years, remaining) {
        (0, m) => format!("{} mo", m),
        (y, 0) => format!("{} yr", y),
        (y, m) => format!("{} yr {} mo", y, m),
    }
}
