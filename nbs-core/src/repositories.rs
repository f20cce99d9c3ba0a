// Low-level persistence access traits.
// Each repository is responsible for a single entity and its owned
// relationships. Related entities are only referenced by their id and
// never modified or loaded by another repository.

use std::io;

use thiserror::Error;

use crate::entities::{
    measure_type::MeasureType,
    project::{Project, ProjectId},
    solution::Solution,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait SolutionRepo {
    /// Store a new solution and return its assigned id.
    fn create_solution(&self, solution: &Solution) -> Result<i64>;
    fn get_solution(&self, id: i64) -> Result<Solution>;
    fn all_solutions(&self) -> Result<Vec<Solution>>;
}

pub trait MeasureTypeRepo {
    fn create_measure_type(&self, measure_type: &MeasureType) -> Result<()>;
    fn get_measure_type(&self, id: &str) -> Result<MeasureType>;
    fn all_measure_types(&self) -> Result<Vec<MeasureType>>;
}

pub trait ProjectRepo {
    fn create_project(&self, project: &Project) -> Result<()>;
    fn get_project(&self, id: &ProjectId) -> Result<Project>;
    fn all_projects(&self) -> Result<Vec<Project>>;

    fn try_get_project(&self, id: &ProjectId) -> Result<Option<Project>> {
        match self.get_project(id) {
            Ok(project) => Ok(Some(project)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
