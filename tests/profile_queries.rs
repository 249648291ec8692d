
use portfolio_data::{
    entities::profile::SocialPlatform,
    repositories::catalog::Catalog,
    use_cases::profile::{initials, ProfileHandler},
};
use test_utils::*;

#[test]
fn builtin_social_links_skip_missing_website() {
    let handler = ProfileHandler::new(Catalog::builtin());
    let platforms: Vec<SocialPlatform> = handler.social_links().iter().map(|l| l.platform).collect();

    assert_eq!(
        platforms,
        vec![SocialPlatform::Github, SocialPlatform::Linkedin, SocialPlatform::Twitter]
    );
}

#[test]
fn social_links_follow_priority_order() {
    let mut catalog = empty_catalog();
    catalog.profile.website = Some("https://ada.dev".into());
    catalog.profile.twitter = Some("https://twitter.com/ada".into());
    catalog.profile.github = None;
    let handler = ProfileHandler::new(&catalog);

    let links: Vec<(String, &str)> = handler
        .social_links()
        .iter()
        .map(|l| (l.platform.to_string(), l.url))
        .collect();

    assert_eq!(
        links,
        vec![
            ("twitter".to_string(), "https://twitter.com/ada"),
            ("website".to_string(), "https://ada.dev"),
        ]
    );
}

#[test]
fn photo_must_be_non_empty() {
    let mut catalog = empty_catalog();
    assert!(ProfileHandler::new(&catalog).has_photo());

    catalog.profile.photo = Some(String::new());
    assert!(!ProfileHandler::new(&catalog).has_photo());

    catalog.profile.photo = None;
    assert!(!ProfileHandler::new(&catalog).has_photo());
}

#[test]
fn initials_take_first_two_words() {
    let handler = ProfileHandler::new(Catalog::builtin());
    assert_eq!(handler.initials(), "RN");

    assert_eq!(initials("ada lovelace"), "AL");
    assert_eq!(initials("  grace   brewster murray hopper "), "GB");
    assert_eq!(initials("Plato"), "P");
    assert_eq!(initials(""), "");
}
