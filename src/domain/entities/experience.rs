use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    entities::year_month::YearMonth,
    utils::validation::{new_validation_error, validate_not_blank},
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[display("full-time")]
    FullTime,

    #[display("part-time")]
    PartTime,

    #[display("contract")]
    Contract,

    #[display("freelance")]
    Freelance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period"))]
pub struct Experience {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    pub title: String,

    pub company: String,

    #[serde(default)]
    pub company_logo: Option<String>,

    pub location: String,

    #[serde(rename = "type")]
    pub employment_type: EmploymentType,

    pub start_date: YearMonth,

    /// Absent while the position is current.
    #[serde(default)]
    pub end_date: Option<YearMonth>,

    pub current: bool,

    pub description: String,

    #[serde(default)]
    pub achievements: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    /// End month used for span calculations: `today` for a current position,
    /// otherwise the recorded end. A past entry with no end collapses onto
    /// its start month.
    pub fn effective_end(&self, today: YearMonth) -> YearMonth {
        if self.current {
            today
        } else {
            self.end_date.unwrap_or(self.start_date)
        }
    }
}

fn validate_period(exp: &Experience) -> Result<(), ValidationError> {
    match (exp.current, exp.end_date) {
        (true, Some(_)) => Err(new_validation_error(
            "end_date_on_current",
            "A current position must not have an end date",
        )),
        (false, None) => Err(new_validation_error(
            "end_date_missing",
            "A past position must have an end date",
        )),
        (false, Some(end)) if end < exp.start_date => Err(new_validation_error(
            "end_before_start",
            "End date must not be before start date",
        )),
        _ => Ok(()),
    }
}
