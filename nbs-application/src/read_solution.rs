use nbs_boundary::VersionedSolution;
use nbs_core::version;
use nbs_entities::version::ApiVersion;

use crate::{Result, SolutionRepo};

/// Load a solution and render it in the given schema version.
pub fn read_solution<R>(repo: &R, id: i64, version: ApiVersion) -> Result<VersionedSolution>
where
    R: SolutionRepo,
{
    let solution = repo.get_solution(id)?;
    Ok(VersionedSolution::of(version, solution))
}

/// Load a solution for a request, resolving the schema version from the
/// request's path and `Accept-Version` header.
pub fn read_solution_for_request<R>(
    repo: &R,
    id: i64,
    path: Option<&str>,
    header: Option<&str>,
) -> Result<VersionedSolution>
where
    R: SolutionRepo,
{
    let version = version::resolve(path, header)?;
    read_solution(repo, id, version)
}
