use crate::entities::profile::Profile;

use super::strings;

pub(super) fn profile() -> Profile {
    Profile {
        name: "Richard Ndirangu Wambugu".into(),
        title: "Data Analyst".into(),
        photo: Some("/images/profile.jpg".into()),
        email: "ndirangurichard07@gmail.com".into(),
        phone: Some("+254 794 064 670".into()),
        location: "Nairobi, Kenya".into(),
        website: None,
        linkedin: Some("https://www.linkedin.com/in/ndirangu-richard-711630325".into()),
        github: Some("https://github.com/ndiragurichard".into()),
        twitter: Some("https://twitter.com/ndirangu_Richrd".into()),
        summary: "Detail-driven Civil Engineering graduate transitioning into Data Analytics. \
                  Skilled in SQL and Power BI with a strong foundation in measurement, reporting, \
                  and structured problem-solving. Eager to apply analytical thinking to support \
                  data-driven decisions in a growing organization."
            .into(),
        highlights: strings(&[
            "Built end-to-end SQL data warehouse pipeline with Power BI dashboards",
            "Completed Data Analytics certification from Coursera (2025)",
            "Strong background in quantitative analysis and structured reporting",
            "Built multiple portfolio projects showcasing SQL, Power BI, and Excel skills",
        ]),
    }
}
