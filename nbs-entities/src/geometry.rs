/// A single coordinate, GeoJSON order: longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Position> for (f64, f64) {
    fn from(from: Position) -> Self {
        (from.lon, from.lat)
    }
}

/// Closed set of geometry shapes accepted by the API.
///
/// Structural validation (ring closure, arity, coordinate ranges) is
/// performed once at the system boundary, see `nbs_core::geometry`.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    /// Linear rings, the first one is the exterior. Rings are closed:
    /// first and last position are identical.
    Polygon(Vec<Vec<Position>>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
            Self::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Visit every position of the geometry, depth-first.
    pub fn for_each_position<F: FnMut(&Position)>(&self, f: &mut F) {
        match self {
            Self::Point(pos) => f(pos),
            Self::LineString(line) => line.iter().for_each(f),
            Self::Polygon(rings) => rings.iter().flatten().for_each(f),
            Self::GeometryCollection(geometries) => {
                for geometry in geometries {
                    geometry.for_each_position(f);
                }
            }
        }
    }

    /// All positions of the geometry in document order.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        self.for_each_position(&mut |pos| positions.push(*pos));
        positions
    }
}

/// Axis-aligned bounding box, south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub sw: Position,
    pub ne: Position,
}

impl Bbox {
    pub const fn new(sw: Position, ne: Position) -> Self {
        Self { sw, ne }
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_in_range()
            && self.ne.is_in_range()
            && self.sw.lon <= self.ne.lon
            && self.sw.lat <= self.ne.lat
    }

    pub fn contains(&self, pos: &Position) -> bool {
        (self.sw.lon..=self.ne.lon).contains(&pos.lon)
            && (self.sw.lat..=self.ne.lat).contains(&pos.lat)
    }

    /// Whether any position of the geometry lies inside the box.
    pub fn intersects(&self, geometry: &Geometry) -> bool {
        geometry.positions().iter().any(|pos| self.contains(pos))
    }
}
