use nbs_boundary::deltares::{self, DeltaresProject};
use nbs_entities::project::{Project, ProjectId};

use crate::{usecases, MeasureTypeRepo, ProjectRepo, Result, SolutionRepo};

/// Import a project from the external exchange format.
///
/// Referenced measure types are resolved against the stored ones. The
/// contained solutions are persisted first, then the project; an already
/// existing project id is rejected.
pub fn import_project<R>(
    repo: &R,
    payload: &DeltaresProject,
    id: Option<ProjectId>,
) -> Result<Project>
where
    R: ProjectRepo + SolutionRepo + MeasureTypeRepo,
{
    let measure_types = repo
        .all_measure_types()?
        .into_iter()
        .map(|measure_type| (measure_type.id.clone(), measure_type))
        .collect();
    let project = deltares::deltares_to_project(payload, &measure_types, id)?;

    if repo.try_get_project(&project.id)?.is_some() {
        return Err(usecases::Error::ProjectExists(project.id.to_string()).into());
    }

    let mut areas = Vec::with_capacity(project.areas.len());
    for solution in &project.areas {
        let id = repo.create_solution(solution)?;
        let mut stored = solution.clone();
        stored.id = id;
        areas.push(stored);
    }
    let project = Project { areas, ..project };
    repo.create_project(&project)?;
    log::info!(
        "Imported project {} with {} areas",
        project.id,
        project.areas.len()
    );
    Ok(project)
}
