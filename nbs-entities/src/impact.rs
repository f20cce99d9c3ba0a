/// Unit of measurement for an impact magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactUnit {
    pub unit: String,
    pub description: String,
}

/// Free-form intensity label, e.g. "low", "medium" or "high".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactIntensity {
    pub intensity: String,
}

impl ImpactIntensity {
    pub fn new(intensity: impl Into<String>) -> Self {
        Self {
            intensity: intensity.into(),
        }
    }
}

/// A measured or estimated effect of a solution.
///
/// The basic fields are always present (the v1 shape). `specialized`
/// carries the v2 per-category metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Impact {
    pub magnitude: f64,
    pub unit: ImpactUnit,
    pub intensity: ImpactIntensity,
    pub specialized: Option<SpecializedImpacts>,
}

/// Container for the categorized v2 metrics.
///
/// Categories are independent: any subset may be populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecializedImpacts {
    pub climate: Option<ClimateImpact>,
    pub water_quality: Option<WaterQualityImpact>,
    pub cost: Option<CostImpact>,
}

impl SpecializedImpacts {
    pub fn is_empty(&self) -> bool {
        self.climate.is_none() && self.water_quality.is_none() && self.cost.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClimateImpact {
    /// Temperature reduction in degrees Celsius.
    pub temp_reduction: Option<f64>,
    /// Cool spot presence (0 or 1).
    pub cool_spot: Option<f64>,
    /// Evapotranspiration in mm/day.
    pub evapotranspiration: Option<f64>,
    /// Groundwater recharge in mm/day, negative values indicate loss.
    pub groundwater_recharge: Option<f64>,
    /// Water storage capacity in cubic meters.
    pub storage_capacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaterQualityImpact {
    pub capture_unit: Option<f64>,
    pub filtering_unit: Option<f64>,
    pub settling_unit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostImpact {
    pub construction_cost: Option<f64>,
    pub maintenance_cost: Option<f64>,
    /// Currency code, e.g. "EUR". Not part of the external exchange format.
    pub currency: Option<String>,
}
