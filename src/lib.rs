//! # nbsapi
//!
//! Data-exchange core for nature-based solutions (NbS): geospatial
//! solution records with impact metrics, projects grouping them, two
//! concurrently-live API schema versions and a bidirectional converter to
//! the Deltares GeoJSON exchange format.
//!
//! This facade crate re-exports the workspace members:
//!
//! - [`entities`] — domain entities
//! - [`nbs_core`] — geometry math, field-name mapping, impact
//!   normalization, version resolution, repository traits and use cases
//! - [`boundary`] — serializable wire formats and the Deltares converter
//! - [`application`] — flows composing repositories and conversions
//!
//! HTTP transport, persistence engines and authentication are external
//! collaborators behind the repository traits.

pub use nbs_application as application;
pub use nbs_boundary as boundary;
pub use nbs_core;
pub use nbs_entities as entities;

pub use nbs_application::prelude as flows;
pub use nbs_core::{fields, geometry, impact, repositories, usecases, version};
