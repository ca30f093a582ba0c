use super::core::{GeometricObject, display_for_geom};
use super::{LineString, MultiPoint, Point, Polygon};

/// Any geometry a feature can carry
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    Polygon(Polygon),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Upper-case WKT tag of the geometry type
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "POINT",
            Geometry::MultiPoint(_) => "MULTIPOINT",
            Geometry::LineString(_) => "LINESTRING",
            Geometry::Polygon(_) => "POLYGON",
            Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        }
    }

    /// Total number of coordinate pairs stored in the geometry
    pub fn total_vertices(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(mp) => mp.points.len(),
            Geometry::LineString(ls) => ls.total_vertices(),
            Geometry::Polygon(poly) => poly.total_vertices(),
            Geometry::GeometryCollection(geoms) => geoms.iter().map(Geometry::total_vertices).sum(),
        }
    }

    /// Copy of the geometry with every coordinate rounded to `decimals` places
    pub fn round(&self, decimals: u32) -> Geometry {
        let round_all = |pts: &[Point]| -> Vec<Point> { pts.iter().map(|p| p.round(decimals)).collect() };
        match self {
            Geometry::Point(pt) => Geometry::Point(pt.round(decimals)),
            Geometry::MultiPoint(mp) => Geometry::MultiPoint(MultiPoint::new(round_all(&mp.points))),
            Geometry::LineString(ls) => Geometry::LineString(LineString {
                points: round_all(&ls.points),
            }),
            Geometry::Polygon(poly) => Geometry::Polygon(Polygon {
                outer: round_all(&poly.outer),
                inner: poly.inner.iter().map(|r| round_all(r)).collect(),
            }),
            Geometry::GeometryCollection(geoms) => {
                Geometry::GeometryCollection(geoms.iter().map(|g| g.round(decimals)).collect())
            }
        }
    }
}

impl GeometricObject for Geometry {
    fn wkt(&self) -> String {
        match self {
            Geometry::Point(pt) => pt.wkt(),
            Geometry::MultiPoint(mp) => mp.wkt(),
            Geometry::LineString(ls) => ls.wkt(),
            Geometry::Polygon(poly) => poly.wkt(),
            Geometry::GeometryCollection(geoms) => {
                let members: Vec<String> = geoms.iter().map(Geometry::wkt).collect();
                format!("GEOMETRYCOLLECTION({})", members.join(","))
            }
        }
    }
}

display_for_geom!(Geometry);

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}
