use crate::entities::project::Project;

pub trait ProjectRepository: Send + Sync {
    /// All projects, in authoring order
    fn projects(&self) -> &[Project];
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for &R {
    fn projects(&self) -> &[Project] {
        (**self).projects()
    }
}
