//! Application flows composing the repositories with the conversion
//! layers. The HTTP transport and the persistence engine stay behind the
//! repository traits.

mod export_project;
mod import_project;
mod read_solution;

pub mod prelude {
    pub use super::{export_project::*, import_project::*, read_solution::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use nbs_core::{repositories::*, usecases};
