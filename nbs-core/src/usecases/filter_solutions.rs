use super::prelude::*;

/// Filter criteria for solution queries. All criteria must hold; empty
/// criteria match every solution.
#[derive(Debug, Clone, Default)]
pub struct SolutionFilter {
    /// Any coordinate of the solution's geometry inside the box.
    pub bbox: Option<Bbox>,
    /// Minimum adaptation score per kind (v1 scoring).
    pub targets: Vec<Adaptation>,
    /// Accepted impact intensity labels; a solution matches if any of its
    /// impacts carries one of them.
    pub intensities: Vec<String>,
}

pub fn filter_solutions<R>(repo: &R, filter: &SolutionFilter) -> Result<Vec<Solution>>
where
    R: SolutionRepo,
{
    if let Some(bbox) = &filter.bbox {
        if !bbox.is_valid() {
            return Err(Error::Bbox);
        }
    }
    let solutions = repo.all_solutions()?;
    Ok(solutions
        .into_iter()
        .filter(|solution| matches(solution, filter))
        .collect())
}

fn matches(solution: &Solution, filter: &SolutionFilter) -> bool {
    if let Some(bbox) = &filter.bbox {
        let Some(geometry) = &solution.geometry else {
            return false;
        };
        if !bbox.intersects(geometry) {
            return false;
        }
    }
    for target in &filter.targets {
        let satisfied = solution
            .adaptations
            .iter()
            .any(|a| a.kind == target.kind && a.value >= target.value);
        if !satisfied {
            return false;
        }
    }
    if !filter.intensities.is_empty() {
        let satisfied = solution
            .impacts
            .iter()
            .any(|impact| filter.intensities.contains(&impact.intensity.intensity));
        if !satisfied {
            return false;
        }
    }
    true
}
