use crate::entities::experience::Experience;

pub trait ExperienceRepository: Send + Sync {
    /// Work history, newest first as authored
    fn experience(&self) -> &[Experience];
}

impl<R: ExperienceRepository + ?Sized> ExperienceRepository for &R {
    fn experience(&self) -> &[Experience] {
        (**self).experience()
    }
}
