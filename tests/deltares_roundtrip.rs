//! End-to-end round-trip properties of the Deltares conversion.

use std::collections::HashMap;

use nbsapi::boundary::deltares::{feature_to_solution, solution_to_feature};
use nbsapi::entities::{
    builders::Builder,
    geometry::{Geometry, Position},
    impact::{ClimateImpact, CostImpact, Impact, WaterQualityImpact},
    measure_type::MeasureType,
    physical_properties::PhysicalProperties,
    solution::Solution,
};

const REL_TOLERANCE: f64 = 1e-6;

fn measure_types() -> HashMap<String, MeasureType> {
    let measure = MeasureType {
        id: "26".into(),
        name: "Rain Garden".into(),
        description: Some("Planted depression".into()),
        default_color: Some("#cfdd20".into()),
        default_inflow: Some(10.0),
        default_depth: Some(0.35),
        default_width: Some(1.0),
        default_radius: Some(0.0001),
    };
    [(measure.id.clone(), measure)].into()
}

/// A schema-complete solution: every optional scalar set, so the
/// round-trip is exact up to recomputed area/length.
fn complete_solution(geometry: Option<Geometry>) -> Solution {
    let mut solution = Solution::build()
        .id(42)
        .name("Bioswale strip")
        .definition("Vegetated channel")
        .location("Amsterdam")
        .geometry(geometry)
        .styling("#ff8800", true)
        .measure_id("26")
        .physical_properties(PhysicalProperties {
            default_inflow: Some(7.2),
            default_depth: Some(0.35),
            default_width: Some(1.0),
            default_radius: Some(0.0001),
            area_inflow: Some(7.2),
            area_depth: Some(2.1),
            area_width: Some(3.8),
            area_radius: Some(5.0),
        })
        .impact(
            Impact::build()
                .magnitude(937.39)
                .unit("m3", "storage capacity")
                .intensity("high")
                .climate(ClimateImpact {
                    temp_reduction: Some(0.094),
                    cool_spot: Some(1.0),
                    evapotranspiration: Some(0.067),
                    groundwater_recharge: Some(-0.071),
                    storage_capacity: Some(937.39),
                })
                .finish(),
        )
        .impact(
            Impact::build()
                .magnitude(1.49)
                .unit("units", "water quality improvement")
                .intensity("medium")
                .water_quality(WaterQualityImpact {
                    capture_unit: Some(1.32),
                    filtering_unit: Some(1.49),
                    settling_unit: Some(1.49),
                })
                .finish(),
        )
        .impact(
            Impact::build()
                .magnitude(211526.67)
                .unit("EUR", "construction cost")
                .intensity("high")
                .cost(CostImpact {
                    construction_cost: Some(211526.67),
                    maintenance_cost: Some(12691.60),
                    currency: Some("EUR".into()),
                })
                .finish(),
        )
        .finish();
    solution.cobenefits = "Biodiversity".into();
    solution.specificdetails = "Roadside retrofit".into();
    solution
}

fn assert_close(a: Option<f64>, b: Option<f64>) {
    match (a, b) {
        (None, None) => {}
        (Some(a), Some(b)) => {
            let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
            assert!((a - b).abs() / scale < REL_TOLERANCE, "{a} != {b}");
        }
        (a, b) => panic!("presence mismatch: {a:?} vs {b:?}"),
    }
}

fn assert_round_trips(geometry: Option<Geometry>) {
    let original = complete_solution(geometry);
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
    assert_eq!(restored.physical_properties, original.physical_properties);
    assert_eq!(restored.measure_id, original.measure_id);
    assert_close(restored.area, feature.properties.area);
    assert_close(restored.length, feature.properties.length);

    // every specialized metric survives, regrouped per category
    let original_bag = nbsapi::impact::flatten(&original.impacts).unwrap();
    let restored_bag = nbsapi::impact::flatten(&restored.impacts).unwrap();
    assert_eq!(original_bag, restored_bag);
}

#[test]
fn round_trip_point() {
    let _ = env_logger::try_init();
    assert_round_trips(Some(Geometry::Point(Position::new(4.90, 52.37))));
}

#[test]
fn round_trip_linestring() {
    assert_round_trips(Some(Geometry::LineString(vec![
        Position::new(4.90, 52.36),
        Position::new(4.91, 52.37),
        Position::new(4.92, 52.37),
    ])));
}

#[test]
fn round_trip_polygon() {
    assert_round_trips(Some(Geometry::Polygon(vec![vec![
        Position::new(23.71, 38.00),
        Position::new(23.71, 38.01),
        Position::new(23.72, 38.01),
        Position::new(23.72, 38.00),
        Position::new(23.71, 38.00),
    ]])));
}

#[test]
fn round_trip_geometry_collection() {
    assert_round_trips(Some(Geometry::GeometryCollection(vec![
        Geometry::Point(Position::new(4.90, 52.37)),
        Geometry::LineString(vec![Position::new(4.90, 52.36), Position::new(4.91, 52.37)]),
    ])));
}

#[test]
fn round_trip_without_geometry() {
    assert_round_trips(None);
}

#[test]
fn derived_values_match_recomputation_within_tolerance() {
    let ring = vec![
        Position::new(0.0, 0.0),
        Position::new(0.0, 0.01),
        Position::new(0.01, 0.01),
        Position::new(0.01, 0.0),
        Position::new(0.0, 0.0),
    ];
    let solution = complete_solution(Some(Geometry::Polygon(vec![ring.clone()])));
    let feature = solution_to_feature(&solution).unwrap();
    let expected = nbsapi::geometry::compute_area(&[ring]).unwrap();
    assert_close(feature.properties.area, Some(expected));
    assert_eq!(feature.properties.length, None);
}

#[test]
fn measure_defaults_fill_only_unset_fields() {
    // unset depth is filled from the measure type on import
    let mut sparse = complete_solution(None);
    sparse.physical_properties = Some(PhysicalProperties::default());
    let feature = solution_to_feature(&sparse).unwrap();
    // the export materializes the format's own defaults, so the measure
    // overlay never overrides what the feature carries
    let restored = feature_to_solution(&feature, &measure_types()).unwrap();
    let props = restored.physical_properties.unwrap();
    assert_eq!(props.default_inflow, Some(1.0));
    assert_eq!(props.default_depth, Some(0.1));

    // the overlay itself: explicit wins, unset is filled
    let measure_types = measure_types();
    let measure = &measure_types["26"];
    let explicit = PhysicalProperties {
        default_depth: Some(0.10),
        ..Default::default()
    };
    let resolved = explicit.overlay_defaults(measure);
    assert_eq!(resolved.default_depth, Some(0.10));
    assert_eq!(resolved.default_inflow, Some(10.0));
    assert_eq!(resolved.default_radius, Some(0.0001));
}
