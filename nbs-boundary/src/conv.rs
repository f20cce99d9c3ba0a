//! Conversions between the domain entities and the wire representations.

use nbs_core::{
    geometry::{self, GeometryError},
    impact::to_basic,
};
use nbs_entities as e;
use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("Unknown adaptation kind: {0}")]
    UnknownAdaptationKind(String),
    #[error(transparent)]
    Score(#[from] e::adaptation::ScoreOutOfRange),
}

fn position_from_slice(coordinates: &[f64]) -> Result<e::geometry::Position, GeometryError> {
    if !(2..=3).contains(&coordinates.len()) {
        return Err(GeometryError::MalformedCoordinates(
            "position must have 2 or 3 elements".into(),
        ));
    }
    Ok(e::geometry::Position::new(coordinates[0], coordinates[1]))
}

impl From<e::geometry::Geometry> for Geometry {
    fn from(from: e::geometry::Geometry) -> Self {
        use e::geometry::Geometry as G;
        let coords = |pos: e::geometry::Position| vec![pos.lon, pos.lat];
        match from {
            G::Point(pos) => Geometry::Point {
                coordinates: coords(pos),
            },
            G::LineString(line) => Geometry::LineString {
                coordinates: line.into_iter().map(coords).collect(),
            },
            G::Polygon(rings) => Geometry::Polygon {
                coordinates: rings
                    .into_iter()
                    .map(|ring| ring.into_iter().map(coords).collect())
                    .collect(),
            },
            G::GeometryCollection(geometries) => Geometry::GeometryCollection {
                geometries: geometries.into_iter().map(Into::into).collect(),
            },
        }
    }
}

impl TryFrom<Geometry> for e::geometry::Geometry {
    type Error = GeometryError;

    fn try_from(from: Geometry) -> Result<Self, Self::Error> {
        use e::geometry::Geometry as G;
        let geometry = match from {
            Geometry::Point { coordinates } => G::Point(position_from_slice(&coordinates)?),
            Geometry::LineString { coordinates } => G::LineString(
                coordinates
                    .iter()
                    .map(|pos| position_from_slice(pos))
                    .collect::<Result<_, _>>()?,
            ),
            Geometry::Polygon { coordinates } => G::Polygon(
                coordinates
                    .iter()
                    .map(|ring| {
                        ring.iter()
                            .map(|pos| position_from_slice(pos))
                            .collect::<Result<_, _>>()
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Geometry::GeometryCollection { geometries } => G::GeometryCollection(
                geometries
                    .into_iter()
                    .map(TryInto::try_into)
                    .collect::<Result<_, _>>()?,
            ),
        };
        geometry::validate_geometry(&geometry)?;
        Ok(geometry)
    }
}

impl From<e::impact::ImpactUnit> for ImpactUnit {
    fn from(from: e::impact::ImpactUnit) -> Self {
        let e::impact::ImpactUnit { unit, description } = from;
        Self { unit, description }
    }
}

impl From<ImpactUnit> for e::impact::ImpactUnit {
    fn from(from: ImpactUnit) -> Self {
        let ImpactUnit { unit, description } = from;
        Self { unit, description }
    }
}

impl From<e::impact::ImpactIntensity> for ImpactIntensity {
    fn from(from: e::impact::ImpactIntensity) -> Self {
        Self {
            intensity: from.intensity,
        }
    }
}

impl From<ImpactIntensity> for e::impact::ImpactIntensity {
    fn from(from: ImpactIntensity) -> Self {
        Self {
            intensity: from.intensity,
        }
    }
}

impl From<e::impact::ClimateImpact> for ClimateImpact {
    fn from(from: e::impact::ClimateImpact) -> Self {
        let e::impact::ClimateImpact {
            temp_reduction,
            cool_spot,
            evapotranspiration,
            groundwater_recharge,
            storage_capacity,
        } = from;
        Self {
            temp_reduction,
            cool_spot,
            evapotranspiration,
            groundwater_recharge,
            storage_capacity,
        }
    }
}

impl From<ClimateImpact> for e::impact::ClimateImpact {
    fn from(from: ClimateImpact) -> Self {
        let ClimateImpact {
            temp_reduction,
            cool_spot,
            evapotranspiration,
            groundwater_recharge,
            storage_capacity,
        } = from;
        Self {
            temp_reduction,
            cool_spot,
            evapotranspiration,
            groundwater_recharge,
            storage_capacity,
        }
    }
}

impl From<e::impact::WaterQualityImpact> for WaterQualityImpact {
    fn from(from: e::impact::WaterQualityImpact) -> Self {
        let e::impact::WaterQualityImpact {
            capture_unit,
            filtering_unit,
            settling_unit,
        } = from;
        Self {
            capture_unit,
            filtering_unit,
            settling_unit,
        }
    }
}

impl From<WaterQualityImpact> for e::impact::WaterQualityImpact {
    fn from(from: WaterQualityImpact) -> Self {
        let WaterQualityImpact {
            capture_unit,
            filtering_unit,
            settling_unit,
        } = from;
        Self {
            capture_unit,
            filtering_unit,
            settling_unit,
        }
    }
}

impl From<e::impact::CostImpact> for CostImpact {
    fn from(from: e::impact::CostImpact) -> Self {
        let e::impact::CostImpact {
            construction_cost,
            maintenance_cost,
            currency,
        } = from;
        Self {
            construction_cost,
            maintenance_cost,
            currency,
        }
    }
}

impl From<CostImpact> for e::impact::CostImpact {
    fn from(from: CostImpact) -> Self {
        let CostImpact {
            construction_cost,
            maintenance_cost,
            currency,
        } = from;
        Self {
            construction_cost,
            maintenance_cost,
            currency,
        }
    }
}

impl From<e::impact::SpecializedImpacts> for SpecializedImpacts {
    fn from(from: e::impact::SpecializedImpacts) -> Self {
        let e::impact::SpecializedImpacts {
            climate,
            water_quality,
            cost,
        } = from;
        Self {
            climate: climate.map(Into::into),
            water_quality: water_quality.map(Into::into),
            cost: cost.map(Into::into),
        }
    }
}

impl From<SpecializedImpacts> for e::impact::SpecializedImpacts {
    fn from(from: SpecializedImpacts) -> Self {
        let SpecializedImpacts {
            climate,
            water_quality,
            cost,
        } = from;
        Self {
            climate: climate.map(Into::into),
            water_quality: water_quality.map(Into::into),
            cost: cost.map(Into::into),
        }
    }
}

impl From<e::impact::Impact> for Impact {
    fn from(from: e::impact::Impact) -> Self {
        let e::impact::Impact {
            magnitude,
            unit,
            intensity,
            specialized,
        } = from;
        Self {
            magnitude,
            unit: unit.into(),
            intensity: intensity.into(),
            specialized: specialized.map(Into::into),
        }
    }
}

impl From<Impact> for e::impact::Impact {
    fn from(from: Impact) -> Self {
        let Impact {
            magnitude,
            unit,
            intensity,
            specialized,
        } = from;
        Self {
            magnitude,
            unit: unit.into(),
            intensity: intensity.into(),
            specialized: specialized.map(Into::into),
        }
    }
}

impl From<e::impact::Impact> for ImpactV1 {
    fn from(from: e::impact::Impact) -> Self {
        let e::impact::Impact {
            magnitude,
            unit,
            intensity,
            specialized: _specialized,
        } = to_basic(&from);
        Self {
            magnitude,
            unit: unit.into(),
            intensity: intensity.into(),
        }
    }
}

impl From<e::styling::Styling> for Styling {
    fn from(from: e::styling::Styling) -> Self {
        let e::styling::Styling { color, hidden } = from;
        Self { color, hidden }
    }
}

impl From<Styling> for e::styling::Styling {
    fn from(from: Styling) -> Self {
        let Styling { color, hidden } = from;
        Self { color, hidden }
    }
}

impl From<e::physical_properties::PhysicalProperties> for PhysicalProperties {
    fn from(from: e::physical_properties::PhysicalProperties) -> Self {
        let e::physical_properties::PhysicalProperties {
            default_inflow,
            default_depth,
            default_width,
            default_radius,
            area_inflow,
            area_depth,
            area_width,
            area_radius,
        } = from;
        Self {
            default_inflow,
            default_depth,
            default_width,
            default_radius,
            area_inflow,
            area_depth,
            area_width,
            area_radius,
        }
    }
}

impl From<PhysicalProperties> for e::physical_properties::PhysicalProperties {
    fn from(from: PhysicalProperties) -> Self {
        let PhysicalProperties {
            default_inflow,
            default_depth,
            default_width,
            default_radius,
            area_inflow,
            area_depth,
            area_width,
            area_radius,
        } = from;
        Self {
            default_inflow,
            default_depth,
            default_width,
            default_radius,
            area_inflow,
            area_depth,
            area_width,
            area_radius,
        }
    }
}

impl From<e::measure_type::MeasureType> for MeasureType {
    fn from(from: e::measure_type::MeasureType) -> Self {
        let e::measure_type::MeasureType {
            id,
            name,
            description,
            default_color,
            default_inflow,
            default_depth,
            default_width,
            default_radius,
        } = from;
        Self {
            id,
            name,
            description,
            default_color,
            default_inflow,
            default_depth,
            default_width,
            default_radius,
        }
    }
}

impl From<MeasureType> for e::measure_type::MeasureType {
    fn from(from: MeasureType) -> Self {
        let MeasureType {
            id,
            name,
            description,
            default_color,
            default_inflow,
            default_depth,
            default_width,
            default_radius,
        } = from;
        Self {
            id,
            name,
            description,
            default_color,
            default_inflow,
            default_depth,
            default_width,
            default_radius,
        }
    }
}

impl From<e::adaptation::Adaptation> for AdaptationRead {
    fn from(from: e::adaptation::Adaptation) -> Self {
        let e::adaptation::Adaptation { kind, value } = from;
        Self {
            adaptation: TargetBase {
                kind: kind.to_string(),
            },
            value: i64::from(u8::from(value)),
        }
    }
}

impl TryFrom<AdaptationRead> for e::adaptation::Adaptation {
    type Error = Error;

    fn try_from(from: AdaptationRead) -> Result<Self, Self::Error> {
        let AdaptationRead { adaptation, value } = from;
        let kind = adaptation
            .kind
            .parse()
            .map_err(|_| Error::UnknownAdaptationKind(adaptation.kind))?;
        Ok(Self {
            kind,
            value: e::adaptation::Score::new(value)?,
        })
    }
}

impl From<e::solution::Solution> for Solution {
    fn from(from: e::solution::Solution) -> Self {
        let e::solution::Solution {
            id,
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
        } = from;
        Self {
            id,
            name,
            definition,
            cobenefits,
            specificdetails,
            location,
            geometry: geometry.map(Into::into),
            styling: styling.map(Into::into),
            physical_properties: physical_properties.map(Into::into),
            area,
            length,
            measure_id,
            impacts: impacts.into_iter().map(Into::into).collect(),
            adaptations: adaptations.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<Solution> for e::solution::Solution {
    type Error = Error;

    fn try_from(from: Solution) -> Result<Self, Self::Error> {
        let Solution {
            id,
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
        } = from;
        Ok(Self {
            id,
            name,
            definition,
            cobenefits,
            specificdetails,
            location,
            geometry: geometry.map(TryInto::try_into).transpose()?,
            styling: styling.map(Into::into),
            physical_properties: physical_properties.map(Into::into),
            area,
            length,
            measure_id,
            impacts: impacts.into_iter().map(Into::into).collect(),
            adaptations: adaptations
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<e::solution::Solution> for SolutionV1 {
    fn from(from: e::solution::Solution) -> Self {
        let e::solution::Solution {
            id,
            name,
            definition,
            cobenefits,
            specificdetails,
            location,
            impacts,
            adaptations,
            ..
        } = from;
        Self {
            id,
            name,
            definition,
            cobenefits,
            specificdetails,
            location,
            adaptations: adaptations.into_iter().map(Into::into).collect(),
            impacts: impacts.into_iter().map(Into::into).collect(),
        }
    }
}

impl VersionedSolution {
    /// Render a solution in the given schema version.
    pub fn of(version: e::version::ApiVersion, solution: e::solution::Solution) -> Self {
        use e::version::ApiVersion::*;
        match version {
            V1 => Self::V1(solution.into()),
            V2 => Self::V2(solution.into()),
        }
    }
}

impl From<e::project::MapSettings> for MapSettings {
    fn from(from: e::project::MapSettings) -> Self {
        let e::project::MapSettings {
            center,
            zoom,
            base_layer,
        } = from;
        Self {
            center: center.map(|pos| vec![pos.lon, pos.lat]),
            zoom,
            base_layer,
        }
    }
}

impl TryFrom<MapSettings> for e::project::MapSettings {
    type Error = Error;

    fn try_from(from: MapSettings) -> Result<Self, Self::Error> {
        let MapSettings {
            center,
            zoom,
            base_layer,
        } = from;
        Ok(Self {
            center: center
                .map(|coordinates| position_from_slice(&coordinates))
                .transpose()?,
            zoom,
            base_layer,
        })
    }
}

impl From<e::project::Project> for Project {
    fn from(from: e::project::Project) -> Self {
        let e::project::Project {
            id,
            title,
            description,
            settings,
            targets,
            map,
            areas,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            settings,
            map: map.map(Into::into),
            targets,
            areas: areas.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<Project> for e::project::Project {
    type Error = Error;

    fn try_from(from: Project) -> Result<Self, Self::Error> {
        let Project {
            id,
            title,
            description,
            settings,
            map,
            targets,
            areas,
        } = from;
        Ok(Self {
            id: id.into(),
            title,
            description,
            settings,
            targets,
            map: map.map(TryInto::try_into).transpose()?,
            areas: areas
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}
