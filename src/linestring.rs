use super::Point;
use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::points::coord_list;

/// Represents a sequence of line segments in 2D
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    pub points: Vec<Point>,
}

impl GeometricObject for LineString {
    /// WKT representation of the LineString
    fn wkt(&self) -> String {
        format!("LINESTRING({})", coord_list(&self.points))
    }
}

display_for_geom!(LineString);

impl LineString {
    /// Instantiate a new LineString from a vector of points
    pub fn new(points: Vec<Point>) -> GeomResult<Self> {
        if points.len() < 2 {
            Err(GeometryError::ParameterError(String::from(
                "A Line String must have at least 2 vertices",
            )))
        } else {
            Ok(Self { points })
        }
    }

    /// Get the total number of vertices in the linestring.
    pub fn total_vertices(&self) -> usize {
        self.points.len()
    }
}
