use crate::{
    adaptation::Adaptation, geometry::Geometry, impact::Impact,
    physical_properties::PhysicalProperties, styling::Styling,
};

/// A nature-based solution: a geographic intervention with descriptive and
/// quantitative metadata.
///
/// `impacts` are owned by the solution and share its lifetime. The v1
/// `adaptations` scoring and the v2 specialized impacts are independent
/// fields and may coexist on the same record.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: i64,
    pub name: String,
    pub definition: String,
    pub cobenefits: String,
    pub specificdetails: String,
    pub location: String,
    pub geometry: Option<Geometry>,
    pub styling: Option<Styling>,
    pub physical_properties: Option<PhysicalProperties>,
    /// Derived, m². Present only for polygon geometries; the
    /// geometry-derived value is authoritative on export.
    pub area: Option<f64>,
    /// Derived, m. Present only for line geometries; same authority rule.
    pub length: Option<f64>,
    pub measure_id: Option<String>,
    pub impacts: Vec<Impact>,
    pub adaptations: Vec<Adaptation>,
}

impl Solution {
    pub fn styling_or_default(&self) -> Styling {
        self.styling.clone().unwrap_or_default()
    }

    pub fn physical_properties_or_default(&self) -> PhysicalProperties {
        self.physical_properties.unwrap_or_default()
    }
}
