//! The Deltares exchange format and the conversions into and out of it.
//!
//! The external format is GeoJSON-Feature based with camelCase property
//! names and all specialized impact metrics flattened into a single
//! `apiData` bag. Area and length are always recomputed from the geometry
//! on export; stored values are never trusted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use nbs_core::{
    fields::{self, FieldMappingError},
    geometry::{self, GeometryError},
    impact::{self, ImpactNormalizationError},
};
use nbs_entities as e;

use crate::Styling;

/// Property defaults required by the external format.
const DEFAULT_INFLOW: f64 = 1.0;
const DEFAULT_DEPTH: f64 = 0.1;
const DEFAULT_WIDTH: f64 = 1.0;
const DEFAULT_RADIUS: f64 = 1.0;

/// Measure id marking a solution without an assigned measure type.
const NO_MEASURE: &str = "0";

const DEFAULT_ZOOM: f64 = 16.0;

/// Padding applied to the project boundary box, in degrees.
const BOUNDARY_PADDING: f64 = 0.001;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Impact(#[from] ImpactNormalizationError),
    #[error(transparent)]
    Fields(#[from] FieldMappingError),
    #[error("Measure type {0} not found")]
    MeasureTypeNotFound(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {value}")]
    InvalidPropertyValue { field: &'static str, value: String },
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeltaresProperties {
    pub name: String,
    pub definition: String,
    pub cobenefits: String,
    pub specificdetails: String,
    pub location: String,
    pub hidden: bool,
    /// Flattened specialized impact metrics, sparse.
    pub api_data: Map<String, Value>,
    /// Measure type id, `"0"` when none is assigned.
    pub measure: String,
    pub color: String,
    pub default_inflow: f64,
    pub default_depth: f64,
    pub default_width: f64,
    pub default_radius: f64,
    pub area_inflow: Option<f64>,
    /// Carried as a string by the external format.
    pub area_depth: Option<String>,
    pub area_width: Option<f64>,
    pub area_radius: Option<f64>,
    pub area: Option<f64>,
    pub length: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeltaresFeature {
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub properties: DeltaresProperties,
    pub geometry: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeltaresMapSettings {
    pub center: MapCenter,
    pub zoom: f64,
    #[serde(default)]
    pub custom_layers: Vec<Value>,
    #[serde(default)]
    pub layers: Vec<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeltaresSettings {
    /// Boundary feature enclosing all areas.
    pub area: Value,
    /// General settings, at least the project title.
    pub general: Map<String, Value>,
    #[serde(default)]
    pub project_area: Value,
    #[serde(default)]
    pub targets: Value,
    #[serde(default = "default_true")]
    pub user_viewed_project_settings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pluvflood_param: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeltaresProject {
    pub areas: Vec<DeltaresFeature>,
    #[serde(default = "default_true")]
    pub legal_accepted: bool,
    pub map: DeltaresMapSettings,
    #[serde(default = "default_true")]
    pub display_map: bool,
    pub settings: DeltaresSettings,
    #[serde(default)]
    pub measure_overrides: Map<String, Value>,
    #[serde(default)]
    pub saved_in_workspace: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Placeholder geometry exported for solutions without one.
fn placeholder_geometry() -> Value {
    json!({"type": "Point", "coordinates": [0, 0]})
}

/// Scenario defaults of the external project-area section.
fn default_project_area() -> Map<String, Value> {
    let defaults = json!({
        "scenarioName": "Default Scenario",
        "capacity": {
            "heatCoping": false,
            "droughtCoping": false,
            "floodCoping": false,
            "waterSafetyCoping": false,
        },
        "multifunctionality": "1",
        "scale": {
            "city": false,
            "neighbourhood": true,
            "street": false,
            "building": false,
        },
        "suitability": {
            "greySpace": true,
            "greenSpacePrivateGardens": false,
            "greenSpaceNoRecreation": false,
            "greenSpaceRecreationUrbanFarming": false,
            "greyGreenSpaceSportsPlayground": false,
            "redSpace": false,
            "blueSpace": false,
        },
        "subsurface": "medium",
        "surface": "mixed",
        "soil": "clay",
        "slope": "flat",
    });
    match defaults {
        Value::Object(obj) => obj,
        _ => unreachable!("literal is an object"),
    }
}

/// Convert a solution into an external feature.
///
/// Area and length are recomputed from the geometry so that the export is
/// consistent even if the stored values are stale.
pub fn solution_to_feature(solution: &e::solution::Solution) -> Result<DeltaresFeature> {
    let api_data = impact::flatten(&solution.impacts)?;
    let styling = solution.styling_or_default();
    let physical = solution.physical_properties_or_default();

    let (area, length) = match &solution.geometry {
        Some(geometry) => (
            geometry::derived_area(geometry)?,
            geometry::derived_length(geometry)?,
        ),
        None => (None, None),
    };

    let properties = DeltaresProperties {
        name: solution.name.clone(),
        definition: solution.definition.clone(),
        cobenefits: solution.cobenefits.clone(),
        specificdetails: solution.specificdetails.clone(),
        location: solution.location.clone(),
        hidden: styling.hidden,
        api_data,
        measure: solution
            .measure_id
            .clone()
            .unwrap_or_else(|| NO_MEASURE.to_string()),
        color: styling.color,
        default_inflow: physical.default_inflow.unwrap_or(DEFAULT_INFLOW),
        default_depth: physical.default_depth.unwrap_or(DEFAULT_DEPTH),
        default_width: physical.default_width.unwrap_or(DEFAULT_WIDTH),
        default_radius: physical.default_radius.unwrap_or(DEFAULT_RADIUS),
        area_inflow: physical.area_inflow,
        area_depth: physical.area_depth.map(|depth| depth.to_string()),
        area_width: physical.area_width,
        area_radius: physical.area_radius,
        area,
        length,
    };

    let geometry = solution
        .geometry
        .as_ref()
        .map(geometry::to_value)
        .unwrap_or_else(placeholder_geometry);

    Ok(DeltaresFeature {
        id: solution.id.to_string(),
        feature_type: "Feature".to_string(),
        properties,
        geometry,
    })
}

/// Convert an external feature back into a solution.
///
/// The `apiData` bag is unflattened into specialized impacts, measure-type
/// defaults are overlaid onto unset physical properties (explicit values
/// win) and area/length are recomputed from the validated geometry.
pub fn feature_to_solution(
    feature: &DeltaresFeature,
    measure_types: &HashMap<String, e::measure_type::MeasureType>,
) -> Result<e::solution::Solution> {
    let props = &feature.properties;

    let geometry = geometry::from_value(&feature.geometry)?;
    // the placeholder stands for "no geometry"
    let is_placeholder = matches!(
        &geometry,
        e::geometry::Geometry::Point(pos) if pos.lon == 0.0 && pos.lat == 0.0
    );
    let geometry = (!is_placeholder).then_some(geometry);

    let area_depth = props
        .area_depth
        .as_ref()
        .map(|depth| {
            depth
                .parse::<f64>()
                .map_err(|_| Error::InvalidPropertyValue {
                    field: "areaDepth",
                    value: depth.clone(),
                })
        })
        .transpose()?;

    let mut physical_properties = e::physical_properties::PhysicalProperties {
        default_inflow: Some(props.default_inflow),
        default_depth: Some(props.default_depth),
        default_width: Some(props.default_width),
        default_radius: Some(props.default_radius),
        area_inflow: props.area_inflow,
        area_depth,
        area_width: props.area_width,
        area_radius: props.area_radius,
    };

    let measure_id = if props.measure == NO_MEASURE {
        None
    } else {
        let measure_type = measure_types
            .get(&props.measure)
            .ok_or_else(|| Error::MeasureTypeNotFound(props.measure.clone()))?;
        physical_properties = physical_properties.overlay_defaults(measure_type);
        Some(props.measure.clone())
    };

    let impacts = impact::unflatten(&props.api_data)?;

    let (area, length) = match &geometry {
        Some(geometry) => (
            geometry::derived_area(geometry)?,
            geometry::derived_length(geometry)?,
        ),
        None => (None, None),
    };

    Ok(e::solution::Solution {
        // Feature ids minted by other exporters may not be numeric; such
        // solutions are stored with an unassigned id.
        id: feature.id.parse().unwrap_or(0),
        name: props.name.clone(),
        definition: props.definition.clone(),
        cobenefits: props.cobenefits.clone(),
        specificdetails: props.specificdetails.clone(),
        location: props.location.clone(),
        geometry,
        styling: Some(props.styling().into()),
        physical_properties: Some(physical_properties),
        area,
        length,
        measure_id,
        impacts,
        adaptations: vec![],
    })
}

/// Collect the coordinates of every area, substituting the placeholder
/// for solutions without geometry, as the export does.
fn area_positions(project: &e::project::Project) -> Vec<e::geometry::Position> {
    let mut positions = Vec::new();
    for solution in &project.areas {
        match &solution.geometry {
            Some(geometry) => positions.extend(geometry.positions()),
            None => positions.push(e::geometry::Position::default()),
        }
    }
    positions
}

/// Bounding feature enclosing all areas, padded by [`BOUNDARY_PADDING`].
fn project_boundary(positions: &[e::geometry::Position]) -> Result<Value> {
    if positions.is_empty() {
        return Ok(json!({
            "type": "Feature",
            "properties": {"area": 0, "isProjectArea": true},
            "geometry": {"type": "Polygon", "coordinates": [[]]},
        }));
    }
    let mut min = positions[0];
    let mut max = positions[0];
    for pos in positions {
        min.lon = min.lon.min(pos.lon);
        min.lat = min.lat.min(pos.lat);
        max.lon = max.lon.max(pos.lon);
        max.lat = max.lat.max(pos.lat);
    }
    min.lon -= BOUNDARY_PADDING;
    min.lat -= BOUNDARY_PADDING;
    max.lon += BOUNDARY_PADDING;
    max.lat += BOUNDARY_PADDING;

    let ring = vec![
        e::geometry::Position::new(min.lon, min.lat),
        e::geometry::Position::new(max.lon, min.lat),
        e::geometry::Position::new(max.lon, max.lat),
        e::geometry::Position::new(min.lon, max.lat),
        e::geometry::Position::new(min.lon, min.lat),
    ];
    let boundary_area = geometry::compute_area(&[ring.clone()])?;

    Ok(json!({
        "type": "Feature",
        "properties": {"area": boundary_area, "isProjectArea": true},
        "geometry": geometry::to_value(&e::geometry::Geometry::Polygon(vec![ring])),
    }))
}

/// Convert a project into the external export shape.
pub fn project_to_deltares(project: &e::project::Project) -> Result<DeltaresProject> {
    let areas = project
        .areas
        .iter()
        .map(solution_to_feature)
        .collect::<Result<Vec<_>>>()?;

    let positions = area_positions(project);
    let center = if positions.is_empty() {
        MapCenter { lat: 0.0, lng: 0.0 }
    } else {
        let n = positions.len() as f64;
        MapCenter {
            lat: positions.iter().map(|pos| pos.lat).sum::<f64>() / n,
            lng: positions.iter().map(|pos| pos.lon).sum::<f64>() / n,
        }
    };
    let zoom = project
        .map
        .as_ref()
        .and_then(|map| map.zoom)
        .unwrap_or(DEFAULT_ZOOM);

    // scenario defaults overlaid with the project's own settings
    let mut project_area = default_project_area();
    if let Some(settings) = &project.settings {
        if let Value::Object(mapped) = fields::to_external(settings)? {
            project_area.extend(mapped);
        }
    }

    let targets = match &project.targets {
        Some(targets) => fields::to_external(targets)?,
        None => json!({}),
    };

    let mut general = Map::new();
    general.insert("title".to_string(), Value::String(project.title.clone()));
    if let Some(description) = &project.description {
        general.insert(
            "description".to_string(),
            Value::String(description.clone()),
        );
    }

    let mut measure_overrides = Map::new();
    for feature in &areas {
        let measure = &feature.properties.measure;
        if !measure_overrides.contains_key(measure) {
            measure_overrides.insert(
                measure.clone(),
                json!({"color": {"hex": feature.properties.color}}),
            );
        }
    }

    Ok(DeltaresProject {
        settings: DeltaresSettings {
            area: project_boundary(&positions)?,
            general,
            project_area: Value::Object(project_area),
            targets,
            user_viewed_project_settings: true,
            pluvflood_param: None,
        },
        areas,
        legal_accepted: true,
        map: DeltaresMapSettings {
            center,
            zoom,
            custom_layers: vec![],
            layers: vec![],
        },
        display_map: true,
        measure_overrides,
        saved_in_workspace: None,
    })
}

/// Convert an external export back into a project.
///
/// The payload does not carry a project id; one is generated unless the
/// caller supplies an override.
pub fn deltares_to_project(
    payload: &DeltaresProject,
    measure_types: &HashMap<String, e::measure_type::MeasureType>,
    id: Option<e::project::ProjectId>,
) -> Result<e::project::Project> {
    let general = &payload.settings.general;
    let title = general
        .get("title")
        .and_then(Value::as_str)
        .ok_or(Error::MissingField("settings.general.title"))?
        .to_string();
    let description = general
        .get("description")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let settings = match &payload.settings.project_area {
        Value::Null => None,
        tree => Some(fields::to_internal(tree)?),
    };
    let targets = match &payload.settings.targets {
        Value::Null => None,
        Value::Object(obj) if obj.is_empty() => None,
        tree => Some(fields::to_internal(tree)?),
    };

    let map = e::project::MapSettings {
        center: Some(e::geometry::Position::new(
            payload.map.center.lng,
            payload.map.center.lat,
        )),
        zoom: Some(payload.map.zoom),
        base_layer: None,
    };

    let areas = payload
        .areas
        .iter()
        .map(|feature| feature_to_solution(feature, measure_types))
        .collect::<Result<Vec<_>>>()?;

    Ok(e::project::Project {
        id: id.unwrap_or_else(e::project::ProjectId::new),
        title,
        description,
        settings,
        targets,
        map: Some(map),
        areas,
    })
}

impl DeltaresProperties {
    /// The styling carried by a feature.
    pub fn styling(&self) -> Styling {
        Styling {
            color: self.color.clone(),
            hidden: self.hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::builders::Builder;
    use e::geometry::{Geometry, Position};

    fn measure_types() -> HashMap<String, e::measure_type::MeasureType> {
        let measure = e::measure_type::MeasureType {
            id: "39".into(),
            name: "Green Roof".into(),
            description: None,
            default_color: Some("#31D336".into()),
            default_inflow: Some(1.0),
            default_depth: Some(0.05),
            default_width: Some(5.0),
            default_radius: Some(1.0),
        };
        [(measure.id.clone(), measure)].into()
    }

    fn square() -> Vec<Position> {
        vec![
            Position::new(4.90, 52.36),
            Position::new(4.90, 52.37),
            Position::new(4.91, 52.37),
            Position::new(4.91, 52.36),
            Position::new(4.90, 52.36),
        ]
    }

    fn solution() -> e::solution::Solution {
        let mut solution = e::solution::Solution::build()
            .id(17)
            .name("Green roof cluster")
            .definition("Extensive sedum roof")
            .location("Amsterdam")
            .geometry(Some(Geometry::Polygon(vec![square()])))
            .styling("#31D336", false)
            .measure_id("39")
            .physical_properties(e::physical_properties::PhysicalProperties {
                default_inflow: Some(2.0),
                default_depth: Some(0.05),
                default_width: Some(5.0),
                default_radius: Some(1.0),
                area_depth: Some(0.4),
                ..Default::default()
            })
            .impact(
                e::impact::Impact::build()
                    .magnitude(142.3)
                    .unit("m3", "storage capacity")
                    .intensity("medium")
                    .climate(e::impact::ClimateImpact {
                        storage_capacity: Some(142.3),
                        groundwater_recharge: Some(-0.04),
                        ..Default::default()
                    })
                    .finish(),
            )
            .finish();
        solution.cobenefits = "Insulation".into();
        solution.specificdetails = "Roof retrofit".into();
        solution
    }

    #[test]
    fn export_recomputes_area_and_ignores_stored_value() {
        let mut stale = solution();
        stale.area = Some(1.0);
        let feature = solution_to_feature(&stale).unwrap();
        let area = feature.properties.area.unwrap();
        assert!((area - 0.0001 * 111_320.0 * 111_320.0).abs() / area < 1e-6);
        assert_eq!(feature.properties.length, None);
        assert_eq!(feature.id, "17");
        assert_eq!(feature.properties.measure, "39");
        // areaDepth is carried as a string
        assert_eq!(feature.properties.area_depth.as_deref(), Some("0.4"));
    }

    #[test]
    fn export_serializes_camel_case() {
        let feature = solution_to_feature(&solution()).unwrap();
        let value = serde_json::to_value(&feature).unwrap();
        let props = &value["properties"];
        assert!(props.get("defaultInflow").is_some());
        assert!(props.get("apiData").is_some());
        assert_eq!(props["apiData"]["groundwater_recharge"], json!(-0.04));
        assert_eq!(props["apiData"]["storageCapacity"], json!(142.3));
    }

    #[test]
    fn feature_round_trip_preserves_schema_complete_solutions() {
        let original = solution();
        let feature = solution_to_feature(&original).unwrap();
        let restored = feature_to_solution(&feature, &measure_types()).unwrap();

        assert_eq!(restored.id, original.id);
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.definition, original.definition);
        assert_eq!(restored.cobenefits, original.cobenefits);
        assert_eq!(restored.specificdetails, original.specificdetails);
        assert_eq!(restored.location, original.location);
        assert_eq!(restored.geometry, original.geometry);
        assert_eq!(restored.styling, original.styling);
        assert_eq!(restored.measure_id, original.measure_id);
        assert_eq!(
            restored.physical_properties,
            original.physical_properties
        );
        let area = restored.area.unwrap();
        assert!((area - feature.properties.area.unwrap()).abs() / area < 1e-6);
        // impacts are regrouped per category with equal metrics
        let specialized = restored.impacts[0].specialized.as_ref().unwrap();
        assert_eq!(
            specialized.climate.as_ref().unwrap().storage_capacity,
            Some(142.3)
        );
        assert_eq!(
            specialized.climate.as_ref().unwrap().groundwater_recharge,
            Some(-0.04)
        );
    }

    #[test]
    fn missing_geometry_exports_placeholder_and_reimports_as_none() {
        let mut bare = solution();
        bare.geometry = None;
        let feature = solution_to_feature(&bare).unwrap();
        assert_eq!(
            feature.geometry,
            json!({"type": "Point", "coordinates": [0, 0]})
        );
        let restored = feature_to_solution(&feature, &measure_types()).unwrap();
        assert_eq!(restored.geometry, None);
        assert_eq!(restored.area, None);
    }

    #[test]
    fn unknown_measure_fails_on_import() {
        let mut feature = solution_to_feature(&solution()).unwrap();
        feature.properties.measure = "77".into();
        assert!(matches!(
            feature_to_solution(&feature, &measure_types()),
            Err(Error::MeasureTypeNotFound(id)) if id == "77"
        ));
    }

    #[test]
    fn garbage_area_depth_fails_on_import() {
        let mut feature = solution_to_feature(&solution()).unwrap();
        feature.properties.area_depth = Some("deep".into());
        assert!(matches!(
            feature_to_solution(&feature, &measure_types()),
            Err(Error::InvalidPropertyValue { field: "areaDepth", .. })
        ));
    }

    fn project() -> e::project::Project {
        e::project::Project {
            id: "proj-votris".into(),
            title: "Votris project area".into(),
            description: Some("Urban nature-based solutions".into()),
            settings: Some(json!({
                "scenario_name": "Athens_area_5",
                "capacity": {"heat_coping": true, "drought_coping": true,
                             "flood_coping": true, "water_safety_coping": false},
                "multifunctionality": "1",
                "scale": {"city": false, "neighbourhood": true,
                          "street": true, "building": true},
                "subsurface": "high",
                "surface": "flatRoofs",
                "soil": "sand",
                "slope": "flatAreaHighGround",
            })),
            targets: Some(json!({
                "climate": {"storage_capacity": {"include": true, "value": "1400"}},
                "water_quality": {"filtering_unit": {"include": true, "value": "100"}},
            })),
            map: Some(e::project::MapSettings {
                center: Some(Position::new(23.72, 38.01)),
                zoom: Some(16.0),
                base_layer: None,
            }),
            areas: vec![solution()],
        }
    }

    #[test]
    fn project_export_shape() {
        let export = project_to_deltares(&project()).unwrap();
        assert_eq!(export.areas.len(), 1);
        assert!(export.legal_accepted);
        assert_eq!(export.map.zoom, 16.0);
        // center is recomputed from the areas, not taken from the map settings
        assert!((export.map.center.lng - 4.904).abs() < 1e-6);

        let project_area = export.settings.project_area.as_object().unwrap();
        assert_eq!(project_area["scenarioName"], json!("Athens_area_5"));
        assert_eq!(project_area["capacity"]["heatCoping"], json!(true));
        // defaults fill sections the project does not configure
        assert_eq!(project_area["suitability"]["greySpace"], json!(true));

        // the targets category uses the concatenated external name
        assert_eq!(
            export.settings.targets["waterquality"]["filteringUnit"]["value"],
            json!("100")
        );
        assert_eq!(
            export.settings.targets["climate"]["storageCapacity"]["include"],
            json!(true)
        );

        assert_eq!(export.settings.general["title"], json!("Votris project area"));
        assert_eq!(
            export.measure_overrides["39"],
            json!({"color": {"hex": "#31D336"}})
        );

        let boundary = &export.settings.area;
        assert_eq!(boundary["properties"]["isProjectArea"], json!(true));
        assert!(boundary["properties"]["area"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn project_round_trip() {
        let original = project();
        let export = project_to_deltares(&original).unwrap();
        let restored =
            deltares_to_project(&export, &measure_types(), Some("proj-votris".into())).unwrap();

        assert_eq!(restored.id, original.id);
        assert_eq!(restored.title, original.title);
        assert_eq!(restored.description, original.description);
        assert_eq!(restored.targets, original.targets);
        assert_eq!(restored.areas.len(), 1);
        assert_eq!(restored.areas[0].name, "Green roof cluster");
        // configured settings survive; unset sections come back as defaults
        let settings = restored.settings.unwrap();
        assert_eq!(settings["scenario_name"], json!("Athens_area_5"));
        assert_eq!(settings["capacity"]["heat_coping"], json!(true));
        assert_eq!(settings["suitability"]["grey_space"], json!(true));
    }

    #[test]
    fn import_without_title_fails() {
        let mut export = project_to_deltares(&project()).unwrap();
        export.settings.general.clear();
        assert!(matches!(
            deltares_to_project(&export, &measure_types(), None),
            Err(Error::MissingField("settings.general.title"))
        ));
    }

    #[test]
    fn empty_project_exports_degenerate_boundary() {
        let mut empty = project();
        empty.areas.clear();
        let export = project_to_deltares(&empty).unwrap();
        assert_eq!(export.map.center, MapCenter { lat: 0.0, lng: 0.0 });
        assert_eq!(
            export.settings.area["properties"]["area"],
            json!(0)
        );
    }
}
