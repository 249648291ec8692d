use crate::entities::skill::{Language, Skill};

pub trait SkillRepository: Send + Sync {
    /// All skills, in authoring order
    fn skills(&self) -> &[Skill];

    /// Spoken languages, in authoring order
    fn languages(&self) -> &[Language];
}

impl<R: SkillRepository + ?Sized> SkillRepository for &R {
    fn skills(&self) -> &[Skill] {
        (**self).skills()
    }

    fn languages(&self) -> &[Language] {
        (**self).languages()
    }
}
