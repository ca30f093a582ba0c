use super::core::{self, GeometricObject, display_for_geom};

/// A single Point on the Plane (2D)
///
/// Examples
/// ```rust
/// use geoformat::Point;
/// let my_point = Point::new(0.2, -7.9);
/// let (x, y) = my_point.coords();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

/// A simple collection of points
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

impl Point {
    /// Instantiate a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return true if the point is approximately equal to other.
    pub fn is_close(&self, other: &Point) -> bool {
        core::approx(self.x, other.x) && core::approx(self.y, other.y)
    }

    /// Get coordinates as a tuple
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Copy of the point with both coordinates rounded to `decimals` places
    pub fn round(&self, decimals: u32) -> Point {
        Point::new(
            core::round_to(self.x, decimals),
            core::round_to(self.y, decimals),
        )
    }

    /// Coordinate pair as written inside WKT parentheses
    pub(crate) fn wkt_coords(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

impl GeometricObject for Point {
    /// WKT representation of the point
    fn wkt(&self) -> String {
        format!("POINT({})", self.wkt_coords())
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use geoformat::{MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)]);
    /// ```
    pub fn new(pts: Vec<Point>) -> Self {
        Self { points: pts }
    }
}

impl GeometricObject for MultiPoint {
    /// WKT representation of the multipoint collection
    fn wkt(&self) -> String {
        format!("MULTIPOINT({})", coord_list(&self.points))
    }
}

display_for_geom!(MultiPoint);

/// Comma separated list of coordinate pairs, without surrounding parentheses
pub(crate) fn coord_list(pts: &[Point]) -> String {
    pts.iter()
        .map(Point::wkt_coords)
        .collect::<Vec<String>>()
        .join(",")
}
