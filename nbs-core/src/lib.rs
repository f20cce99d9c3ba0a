pub use nbs_entities as entities;

pub mod fields;
pub mod geometry;
pub mod impact;
pub mod repositories;
pub mod usecases;
pub mod version;
