use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// Explicit id, e.g. for imports; generated when absent.
    pub id: Option<ProjectId>,
    pub title: String,
    pub description: Option<String>,
    pub settings: Option<serde_json::Value>,
    pub targets: Option<serde_json::Value>,
    pub map: Option<MapSettings>,
    /// Ids of existing solutions to include.
    pub areas: Vec<i64>,
}

/// Store a new project after verifying all referenced solutions exist.
pub fn create_project<R>(repo: &R, new: NewProject) -> Result<Project>
where
    R: ProjectRepo + SolutionRepo,
{
    let NewProject {
        id,
        title,
        description,
        settings,
        targets,
        map,
        areas,
    } = new;

    let id = id.unwrap_or_else(ProjectId::new);
    if repo.try_get_project(&id)?.is_some() {
        return Err(Error::ProjectExists(id.to_string()));
    }

    let mut solutions = Vec::with_capacity(areas.len());
    for solution_id in areas {
        match repo.get_solution(solution_id) {
            Ok(solution) => solutions.push(solution),
            Err(crate::repositories::Error::NotFound) => {
                return Err(Error::SolutionNotFound(solution_id));
            }
            Err(err) => return Err(err.into()),
        }
    }

    let project = Project {
        id,
        title,
        description,
        settings,
        targets,
        map,
        areas: solutions,
    };
    repo.create_project(&project)?;
    log::debug!("Created new project {}", project.id);
    Ok(project)
}
