use super::prelude::*;
use crate::geometry;

#[derive(Debug, Clone)]
pub struct NewSolution {
    pub name: String,
    pub definition: String,
    pub cobenefits: String,
    pub specificdetails: String,
    pub location: String,
    pub geometry: Option<Geometry>,
    pub styling: Option<Styling>,
    pub physical_properties: Option<PhysicalProperties>,
    pub measure_id: Option<String>,
    pub impacts: Vec<Impact>,
    pub adaptations: Vec<Adaptation>,
}

/// Validate and store a new solution.
///
/// A referenced measure type fills unset physical-property defaults
/// (explicit values always win). Area and length are derived from the
/// geometry; stored values are never taken from the caller.
pub fn create_solution<R>(repo: &R, new: NewSolution) -> Result<Solution>
where
    R: SolutionRepo + MeasureTypeRepo,
{
    let NewSolution {
        name,
        definition,
        cobenefits,
        specificdetails,
        location,
        geometry,
        styling,
        physical_properties,
        measure_id,
        impacts,
        adaptations,
    } = new;

    if let Some(ref geometry) = geometry {
        geometry::validate_geometry(geometry)?;
    }

    let physical_properties = match &measure_id {
        Some(measure_id) => {
            let measure_type = match repo.get_measure_type(measure_id) {
                Ok(measure_type) => measure_type,
                Err(crate::repositories::Error::NotFound) => {
                    return Err(Error::MeasureTypeNotFound(measure_id.clone()));
                }
                Err(err) => return Err(err.into()),
            };
            Some(
                physical_properties
                    .unwrap_or_default()
                    .overlay_defaults(&measure_type),
            )
        }
        None => physical_properties,
    };

    let (area, length) = match &geometry {
        Some(geometry) => (
            geometry::derived_area(geometry)?,
            geometry::derived_length(geometry)?,
        ),
        None => (None, None),
    };

    let mut solution = Solution {
        id: 0,
        name,
        definition,
        cobenefits,
        specificdetails,
        location,
        geometry,
        styling,
        physical_properties,
        area,
        length,
        measure_id,
        impacts,
        adaptations,
    };
    let id = repo.create_solution(&solution)?;
    solution.id = id;
    log::debug!("Created new solution {id} ({})", solution.name);
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_solution() -> NewSolution {
        NewSolution {
            name: "Rain garden".into(),
            definition: "A planted depression".into(),
            cobenefits: "Biodiversity".into(),
            specificdetails: "Roadside".into(),
            location: "Athens".into(),
            geometry: None,
            styling: None,
            physical_properties: None,
            measure_id: None,
            impacts: vec![],
            adaptations: vec![],
        }
    }

    #[test]
    fn assigns_an_id() {
        let db = MockDb::default();
        let solution = create_solution(&db, new_solution()).unwrap();
        assert_eq!(solution.id, 1);
        assert_eq!(db.solutions.borrow().len(), 1);
    }

    #[test]
    fn rejects_invalid_geometry() {
        let db = MockDb::default();
        let mut new = new_solution();
        new.geometry = Some(Geometry::LineString(vec![Position::new(0.0, 0.0)]));
        assert!(matches!(
            create_solution(&db, new),
            Err(Error::Geometry(_))
        ));
        assert!(db.solutions.borrow().is_empty());
    }

    #[test]
    fn derives_area_for_polygons() {
        let db = MockDb::default();
        let mut new = new_solution();
        new.geometry = Some(Geometry::Polygon(vec![vec![
            Position::new(0.0, 0.0),
            Position::new(0.0, 0.001),
            Position::new(0.001, 0.001),
            Position::new(0.001, 0.0),
            Position::new(0.0, 0.0),
        ]]));
        let solution = create_solution(&db, new).unwrap();
        assert!(solution.area.unwrap() > 0.0);
        assert_eq!(solution.length, None);
    }

    #[test]
    fn overlays_measure_type_defaults() {
        let db = MockDb::default();
        db.measure_types.borrow_mut().push(MeasureType {
            id: "39".into(),
            name: "Green Roof".into(),
            description: None,
            default_color: None,
            default_inflow: None,
            default_depth: Some(0.05),
            default_width: None,
            default_radius: None,
        });
        let mut new = new_solution();
        new.measure_id = Some("39".into());
        let solution = create_solution(&db, new.clone()).unwrap();
        assert_eq!(
            solution.physical_properties.unwrap().default_depth,
            Some(0.05)
        );

        // an explicit value survives the overlay
        new.physical_properties = Some(PhysicalProperties {
            default_depth: Some(0.10),
            ..Default::default()
        });
        let solution = create_solution(&db, new).unwrap();
        assert_eq!(
            solution.physical_properties.unwrap().default_depth,
            Some(0.10)
        );
    }

    #[test]
    fn unknown_measure_type_is_an_error() {
        let db = MockDb::default();
        let mut new = new_solution();
        new.measure_id = Some("nope".into());
        assert!(matches!(
            create_solution(&db, new),
            Err(Error::MeasureTypeNotFound(id)) if id == "nope"
        ));
    }
}
