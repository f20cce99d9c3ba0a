//! Geometry derivations and structural validation.
//!
//! All metric computations use a planar equirectangular approximation:
//! coordinates are treated as points on a plane and degrees are scaled
//! with [`METERS_PER_DEGREE`]. Polygon area is the shoelace area of the
//! exterior ring minus the hole rings, line length the sum of the
//! Euclidean segment lengths. This matches the precision of the data
//! exchanged with partner systems; it is not a geodesic computation.

use itertools::Itertools;
use serde_json::{json, Value};
use thiserror::Error;

use crate::entities::geometry::{Geometry, Position};

/// Approximate meters per degree on the WGS84 ellipsoid.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("Unsupported geometry type: {0}")]
    InvalidType(String),
    #[error("Malformed coordinates: {0}")]
    MalformedCoordinates(String),
    #[error("A polygon ring must have at least 4 positions, got {0}")]
    TooFewRingCoordinates(usize),
    #[error("Polygon rings must be closed (first position equals last)")]
    RingNotClosed,
    #[error("A line string must have at least 2 positions, got {0}")]
    TooFewLineCoordinates(usize),
    #[error("Coordinate out of range: lon {lon}, lat {lat}")]
    CoordinateOutOfRange { lon: f64, lat: f64 },
}

type Result<T> = std::result::Result<T, GeometryError>;

/// Shoelace area of a single closed ring in square degrees.
pub fn planar_ring_area(ring: &[Position]) -> Result<f64> {
    if ring.len() < 4 {
        return Err(GeometryError::TooFewRingCoordinates(ring.len()));
    }
    if ring.first() != ring.last() {
        return Err(GeometryError::RingNotClosed);
    }
    let twice_area: f64 = ring
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.lon * b.lat - b.lon * a.lat)
        .sum();
    Ok((twice_area / 2.0).abs())
}

/// Planar polygon area in square meters, holes subtracted.
pub fn compute_area(rings: &[Vec<Position>]) -> Result<f64> {
    let Some((exterior, holes)) = rings.split_first() else {
        return Err(GeometryError::TooFewRingCoordinates(0));
    };
    let mut area = planar_ring_area(exterior)?;
    for hole in holes {
        area -= planar_ring_area(hole)?;
    }
    Ok(area * METERS_PER_DEGREE * METERS_PER_DEGREE)
}

/// Planar line length in meters.
pub fn compute_length(line: &[Position]) -> Result<f64> {
    if line.len() < 2 {
        return Err(GeometryError::TooFewLineCoordinates(line.len()));
    }
    let degrees: f64 = line
        .iter()
        .tuple_windows()
        .map(|(a, b)| ((b.lon - a.lon).powi(2) + (b.lat - a.lat).powi(2)).sqrt())
        .sum();
    Ok(degrees * METERS_PER_DEGREE)
}

/// Check coordinate ranges and per-type structural invariants.
pub fn validate_geometry(geometry: &Geometry) -> Result<()> {
    match geometry {
        Geometry::Point(pos) => validate_position(pos),
        Geometry::LineString(line) => {
            if line.len() < 2 {
                return Err(GeometryError::TooFewLineCoordinates(line.len()));
            }
            line.iter().try_for_each(validate_position)
        }
        Geometry::Polygon(rings) => {
            if rings.is_empty() {
                return Err(GeometryError::TooFewRingCoordinates(0));
            }
            for ring in rings {
                if ring.len() < 4 {
                    return Err(GeometryError::TooFewRingCoordinates(ring.len()));
                }
                if ring.first() != ring.last() {
                    return Err(GeometryError::RingNotClosed);
                }
                ring.iter().try_for_each(validate_position)?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(geometries) => {
            geometries.iter().try_for_each(validate_geometry)
        }
    }
}

fn validate_position(pos: &Position) -> Result<()> {
    if !pos.is_in_range() {
        return Err(GeometryError::CoordinateOutOfRange {
            lon: pos.lon,
            lat: pos.lat,
        });
    }
    Ok(())
}

/// Area derived from a geometry, `Some` only for polygons.
pub fn derived_area(geometry: &Geometry) -> Result<Option<f64>> {
    match geometry {
        Geometry::Polygon(rings) => compute_area(rings).map(Some),
        _ => Ok(None),
    }
}

/// Length derived from a geometry, `Some` only for line strings.
pub fn derived_length(geometry: &Geometry) -> Result<Option<f64>> {
    match geometry {
        Geometry::LineString(line) => compute_length(line).map(Some),
        _ => Ok(None),
    }
}

/// Parse a GeoJSON geometry object, dispatching on its `type` field.
///
/// The parsed geometry is structurally validated before it is returned.
/// A third (altitude) coordinate element is accepted and dropped.
pub fn from_value(value: &Value) -> Result<Geometry> {
    let obj = value
        .as_object()
        .ok_or_else(|| GeometryError::MalformedCoordinates("geometry is not an object".into()))?;
    let type_name = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| GeometryError::MalformedCoordinates("missing \"type\" field".into()))?;
    let geometry = match type_name {
        "Point" => Geometry::Point(position_from_value(coordinates(obj)?)?),
        "LineString" => Geometry::LineString(positions_from_value(coordinates(obj)?)?),
        "Polygon" => {
            let rings = coordinates(obj)?
                .as_array()
                .ok_or_else(|| malformed("polygon coordinates must be an array of rings"))?
                .iter()
                .map(positions_from_value)
                .collect::<Result<Vec<_>>>()?;
            Geometry::Polygon(rings)
        }
        "GeometryCollection" => {
            let geometries = obj
                .get("geometries")
                .and_then(Value::as_array)
                .ok_or_else(|| malformed("missing \"geometries\" array"))?
                .iter()
                .map(from_value)
                .collect::<Result<Vec<_>>>()?;
            Geometry::GeometryCollection(geometries)
        }
        other => return Err(GeometryError::InvalidType(other.into())),
    };
    validate_geometry(&geometry)?;
    Ok(geometry)
}

/// Render a geometry as a GeoJSON object.
pub fn to_value(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Point(pos) => json!({
            "type": "Point",
            "coordinates": [pos.lon, pos.lat],
        }),
        Geometry::LineString(line) => json!({
            "type": "LineString",
            "coordinates": line.iter().map(|p| [p.lon, p.lat]).collect::<Vec<_>>(),
        }),
        Geometry::Polygon(rings) => json!({
            "type": "Polygon",
            "coordinates": rings
                .iter()
                .map(|ring| ring.iter().map(|p| [p.lon, p.lat]).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
        }),
        Geometry::GeometryCollection(geometries) => json!({
            "type": "GeometryCollection",
            "geometries": geometries.iter().map(to_value).collect::<Vec<_>>(),
        }),
    }
}

fn coordinates<'a>(obj: &'a serde_json::Map<String, Value>) -> Result<&'a Value> {
    obj.get("coordinates")
        .ok_or_else(|| malformed("missing \"coordinates\" field"))
}

fn position_from_value(value: &Value) -> Result<Position> {
    let elements = value
        .as_array()
        .ok_or_else(|| malformed("position must be an array"))?;
    if !(2..=3).contains(&elements.len()) {
        return Err(malformed("position must have 2 or 3 elements"));
    }
    let number = |v: &Value| {
        v.as_f64()
            .ok_or_else(|| malformed("position elements must be numbers"))
    };
    Ok(Position::new(number(&elements[0])?, number(&elements[1])?))
}

fn positions_from_value(value: &Value) -> Result<Vec<Position>> {
    value
        .as_array()
        .ok_or_else(|| malformed("coordinates must be an array of positions"))?
        .iter()
        .map(position_from_value)
        .collect()
}

fn malformed(msg: &str) -> GeometryError {
    GeometryError::MalformedCoordinates(msg.into())
}
