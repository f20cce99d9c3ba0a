use std::io;

use thiserror::Error;

use nbs_boundary::deltares;
use nbs_core::{
    repositories::Error as RepoError, usecases::Error as ParameterError,
    version::UnsupportedVersionError,
};

pub use nbs_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Convert(#[from] deltares::Error),
    #[error(transparent)]
    Version(#[from] UnsupportedVersionError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<deltares::Error> for AppError {
    fn from(err: deltares::Error) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<UnsupportedVersionError> for AppError {
    fn from(err: UnsupportedVersionError) -> AppError {
        AppError::Business(err.into())
    }
}
