use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_not_blank, validate_url};

// ───── Profile Record ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub title: String,

    /// Path or URL of the profile photo.
    #[serde(default)]
    pub photo: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// "City, Country" or "Remote".
    pub location: String,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub website: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub linkedin: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub github: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub twitter: Option<String>,

    pub summary: String,

    #[serde(default)]
    pub highlights: Vec<String>,
}

// ───── Social Links ─────────────────────────────────────────────────

/// Declaration order is the display priority of the links.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[display("github")]
    Github,

    #[display("linkedin")]
    Linkedin,

    #[display("twitter")]
    Twitter,

    #[display("website")]
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Website,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink<'a> {
    pub platform: SocialPlatform,
    pub url: &'a str,
}

impl Profile {
    pub fn social_url(&self, platform: SocialPlatform) -> Option<&str> {
        let url = match platform {
            SocialPlatform::Github => &self.github,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Website => &self.website,
        };
        url.as_deref()
    }
}
