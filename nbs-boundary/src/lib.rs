//! Serializable, anemic data structures for the versioned nbsapi wire
//! formats, plus the Deltares exchange format in [`deltares`].

use serde::{Deserialize, Serialize};

pub mod conv;
pub mod deltares;

/// GeoJSON geometry, coordinates in [longitude, latitude] order.
///
/// A position may carry a third (altitude) element on input; it is not
/// preserved by the conversion into the domain representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImpactUnit {
    pub unit: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImpactIntensity {
    pub intensity: String,
}

/// v1 impact shape: the basic fields only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImpactV1 {
    pub magnitude: f64,
    pub unit: ImpactUnit,
    pub intensity: ImpactIntensity,
}

/// v2 impact shape with optional specialized metrics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Impact {
    pub magnitude: f64,
    pub unit: ImpactUnit,
    pub intensity: ImpactIntensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialized: Option<SpecializedImpacts>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SpecializedImpacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<ClimateImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_quality: Option<WaterQualityImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostImpact>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ClimateImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_reduction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_spot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evapotranspiration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groundwater_recharge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WaterQualityImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtering_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settling_unit: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CostImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Styling {
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub hidden: bool,
}

fn default_color() -> String {
    nbs_entities::styling::DEFAULT_COLOR.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicalProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_inflow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_inflow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_radius: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeasureType {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_inflow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_radius: Option<f64>,
}

/// v1 adaptation-target association.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdaptationRead {
    pub adaptation: TargetBase,
    pub value: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TargetBase {
    #[serde(rename = "type")]
    pub kind: String,
}

/// v1 solution shape: adaptation scoring and basic impacts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionV1 {
    pub id: i64,
    pub name: String,
    pub definition: String,
    pub cobenefits: String,
    pub specificdetails: String,
    pub location: String,
    #[serde(alias = "solution_targets")]
    pub adaptations: Vec<AdaptationRead>,
    pub impacts: Vec<ImpactV1>,
}

/// v2 solution shape: the full record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: i64,
    pub name: String,
    pub definition: String,
    pub cobenefits: String,
    pub specificdetails: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styling: Option<Styling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_properties: Option<PhysicalProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_id: Option<String>,
    pub impacts: Vec<Impact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", alias = "solution_targets")]
    pub adaptations: Vec<AdaptationRead>,
}

/// A solution rendered in the schema version governing a request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum VersionedSolution {
    V2(Solution),
    V1(SolutionV1),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MapSettings {
    /// Map center, [longitude, latitude].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_layer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<serde_json::Value>,
    #[serde(default)]
    pub areas: Vec<Solution>,
}
