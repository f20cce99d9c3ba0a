//! Conversion between the nested specialized-impact representation and the
//! flat external property bag, and projection to the basic v1 shape.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::{
    entities::impact::{
        ClimateImpact, CostImpact, Impact, ImpactIntensity, ImpactUnit, SpecializedImpacts,
        WaterQualityImpact,
    },
    fields::{self, FieldMappingError},
};

/// Placeholder unit/intensity values for impacts synthesized from a flat
/// bag, one per category.
const CLIMATE_UNIT: (&str, &str) = ("m3", "storage capacity");
const WATER_QUALITY_UNIT: (&str, &str) = ("units", "water quality improvement");
const COST_UNIT: (&str, &str) = ("EUR", "construction cost");
const PLACEHOLDER_INTENSITY: &str = "medium";
const DEFAULT_CURRENCY: &str = "EUR";

/// External-only metric carried by partner payloads; accepted and ignored.
const FMEAS_AREA: &str = "Fmeas_area";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImpactNormalizationError {
    #[error("Unknown specialized impact field: {0}")]
    UnknownField(String),
    #[error("Specialized impact field is not numeric: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Fields(#[from] FieldMappingError),
}

type Result<T> = std::result::Result<T, ImpactNormalizationError>;

/// Merge the specialized metrics of all impacts into one flat mapping
/// keyed by external field name.
///
/// When two impacts define the same field the later one wins; this is a
/// defined policy, not an error. `currency` is internal-only and not part
/// of the bag.
pub fn flatten(impacts: &[Impact]) -> Result<Map<String, Value>> {
    let mut internal = Map::new();
    let mut insert = |key: &str, value: Option<f64>| {
        if let Some(value) = value {
            if let Some(number) = Number::from_f64(value) {
                internal.insert(key.to_string(), Value::Number(number));
            }
        }
    };
    for impact in impacts {
        let Some(specialized) = &impact.specialized else {
            continue;
        };
        if let Some(climate) = &specialized.climate {
            insert("temp_reduction", climate.temp_reduction);
            insert("cool_spot", climate.cool_spot);
            insert("evapotranspiration", climate.evapotranspiration);
            insert("groundwater_recharge", climate.groundwater_recharge);
            insert("storage_capacity", climate.storage_capacity);
        }
        if let Some(water_quality) = &specialized.water_quality {
            insert("capture_unit", water_quality.capture_unit);
            insert("filtering_unit", water_quality.filtering_unit);
            insert("settling_unit", water_quality.settling_unit);
        }
        if let Some(cost) = &specialized.cost {
            insert("construction_cost", cost.construction_cost);
            insert("maintenance_cost", cost.maintenance_cost);
        }
    }
    match fields::to_external(&Value::Object(internal))? {
        Value::Object(external) => Ok(external),
        _ => unreachable!("object maps to object"),
    }
}

/// Synthesize one impact per non-empty category from a flat external bag.
///
/// Strict: a key outside the known external schema is an error. The
/// representative magnitudes are `storage_capacity` (climate),
/// `filtering_unit` (water quality) and `construction_cost` (cost), 0.0
/// when absent; units and intensities are fixed placeholders.
pub fn unflatten(bag: &Map<String, Value>) -> Result<Vec<Impact>> {
    let mut climate = ClimateImpact::default();
    let mut water_quality = WaterQualityImpact::default();
    let mut cost = CostImpact::default();
    let mut has_climate = false;
    let mut has_water_quality = false;
    let mut has_cost = false;

    for (key, value) in bag {
        if key.as_str() == FMEAS_AREA {
            continue;
        }
        let number = value
            .as_f64()
            .ok_or_else(|| ImpactNormalizationError::InvalidValue(key.clone()))?;
        match key.as_str() {
            "tempReduction" => climate.temp_reduction = Some(number),
            "coolSpot" => climate.cool_spot = Some(number),
            "evapotranspiration" => climate.evapotranspiration = Some(number),
            "groundwater_recharge" => climate.groundwater_recharge = Some(number),
            "storageCapacity" => climate.storage_capacity = Some(number),
            "captureUnit" => water_quality.capture_unit = Some(number),
            "filteringUnit" => water_quality.filtering_unit = Some(number),
            "settlingUnit" => water_quality.settling_unit = Some(number),
            "constructionCost" => cost.construction_cost = Some(number),
            "maintenanceCost" => cost.maintenance_cost = Some(number),
            unknown => {
                return Err(ImpactNormalizationError::UnknownField(unknown.to_string()));
            }
        }
        match key.as_str() {
            "tempReduction" | "coolSpot" | "evapotranspiration" | "groundwater_recharge"
            | "storageCapacity" => has_climate = true,
            "captureUnit" | "filteringUnit" | "settlingUnit" => has_water_quality = true,
            _ => has_cost = true,
        }
    }

    let mut impacts = Vec::new();
    if has_climate {
        impacts.push(synthesized(
            climate.storage_capacity,
            CLIMATE_UNIT,
            SpecializedImpacts {
                climate: Some(climate),
                ..Default::default()
            },
        ));
    }
    if has_water_quality {
        impacts.push(synthesized(
            water_quality.filtering_unit,
            WATER_QUALITY_UNIT,
            SpecializedImpacts {
                water_quality: Some(water_quality),
                ..Default::default()
            },
        ));
    }
    if has_cost {
        cost.currency = Some(DEFAULT_CURRENCY.to_string());
        impacts.push(synthesized(
            cost.construction_cost,
            COST_UNIT,
            SpecializedImpacts {
                cost: Some(cost),
                ..Default::default()
            },
        ));
    }
    Ok(impacts)
}

fn synthesized(
    magnitude: Option<f64>,
    (unit, description): (&str, &str),
    specialized: SpecializedImpacts,
) -> Impact {
    Impact {
        magnitude: magnitude.unwrap_or(0.0),
        unit: ImpactUnit {
            unit: unit.to_string(),
            description: description.to_string(),
        },
        intensity: ImpactIntensity::new(PLACEHOLDER_INTENSITY),
        specialized: Some(specialized),
    }
}

/// Project an impact down to its v1 shape by dropping the specialized
/// metrics. Never fails, also when `specialized` is already absent.
pub fn to_basic(impact: &Impact) -> Impact {
    Impact {
        specialized: None,
        ..impact.clone()
    }
}
