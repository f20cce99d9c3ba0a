mod create_project;
mod create_solution;
mod error;
mod filter_solutions;


pub use self::{create_project::*, create_solution::*, error::Error, filter_solutions::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{
            adaptation::*, geometry::*, impact::*, measure_type::*, physical_properties::*,
            project::*, solution::*, styling::*,
        },
        repositories::*,
    };
}
