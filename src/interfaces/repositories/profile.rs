use crate::entities::profile::Profile;

pub trait ProfileRepository: Send + Sync {
    /// The site owner's profile
    fn profile(&self) -> &Profile;
}

impl<R: ProfileRepository + ?Sized> ProfileRepository for &R {
    fn profile(&self) -> &Profile {
        (**self).profile()
    }
}
