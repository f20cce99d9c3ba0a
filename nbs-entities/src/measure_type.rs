/// A predefined solution category supplying default physical properties.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureType {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Default hex color for rendering.
    pub default_color: Option<String>,
    /// Default inflow rate in liters per second.
    pub default_inflow: Option<f64>,
    /// Default depth in meters.
    pub default_depth: Option<f64>,
    /// Default width in meters.
    pub default_width: Option<f64>,
    /// Default radius in meters.
    pub default_radius: Option<f64>,
}
