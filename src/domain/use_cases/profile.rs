use crate::{
    entities::profile::{Profile, SocialLink, SocialPlatform},
    repositories::profile::ProfileRepository,
};

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    pub fn profile(&self) -> &Profile {
        self.profile_repo.profile()
    }

    /// Social links that are filled in, in github, linkedin, twitter,
    /// website order
    pub fn social_links(&self) -> Vec<SocialLink<'_>> {
        let profile = self.profile_repo.profile();

        SocialPlatform::ALL
            .into_iter()
            .filter_map(|platform| {
                profile
                    .social_url(platform)
                    .map(|url| SocialLink { platform, url })
            })
            .collect()
    }

    pub fn has_photo(&self) -> bool {
        self.profile_repo
            .profile()
            .photo
            .as_deref()
            .is_some_and(|photo| !photo.is_empty())
    }

    /// Up to two upper-cased initials taken from the name's words
    pub fn initials(&self) -> String {
        initials(&self.profile_repo.profile().name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}
