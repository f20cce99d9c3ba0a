use thiserror::Error;

use crate::{
    geometry::GeometryError, impact::ImpactNormalizationError, repositories,
    version::UnsupportedVersionError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Impact(#[from] ImpactNormalizationError),
    #[error(transparent)]
    Version(#[from] UnsupportedVersionError),
    #[error("Measure type {0} not found")]
    MeasureTypeNotFound(String),
    #[error("Solution {0} not found")]
    SolutionNotFound(i64),
    #[error("Project {0} already exists")]
    ProjectExists(String),
    #[error("Bounding box is invalid")]
    Bbox,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
