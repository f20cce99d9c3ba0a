use nbs_boundary::deltares::{self, DeltaresProject};
use nbs_entities::project::ProjectId;

use crate::{ProjectRepo, Result};

/// Export a stored project in the external exchange format.
pub fn export_project<R>(repo: &R, id: &ProjectId) -> Result<DeltaresProject>
where
    R: ProjectRepo,
{
    let project = repo.get_project(id)?;
    let export = deltares::project_to_deltares(&project)?;
    log::info!("Exported project {id} with {} areas", export.areas.len());
    Ok(export)
}
