#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # nbs-entities
//!
//! Reusable, agnostic domain entities for nbsapi.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic. Serialization lives in
//! `nbs-boundary`, computation in `nbs-core`.

pub mod adaptation;
pub mod geometry;
pub mod impact;
pub mod measure_type;
pub mod physical_properties;
pub mod project;
pub mod solution;
pub mod styling;
pub mod version;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
