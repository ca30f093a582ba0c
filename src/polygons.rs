use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::points::*;

/// Represents a polygon on the Plane, with optional holes
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub outer: Vec<Point>,
    pub inner: Vec<Vec<Point>>,
}

impl Polygon {
    /// Instantiate a polygon without holes from a closed ring of points
    pub fn new(outer: Vec<Point>) -> GeomResult<Self> {
        Self::with_holes(outer, Vec::new())
    }

    /// Instantiate a polygon from an outer ring and any number of interior rings
    pub fn with_holes(outer: Vec<Point>, inner: Vec<Vec<Point>>) -> GeomResult<Self> {
        check_ring(&outer)?;
        for ring in &inner {
            check_ring(ring)?;
        }
        Ok(Self { outer, inner })
    }

    /// Iterate over all rings, outer ring first
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Point>> {
        std::iter::once(&self.outer).chain(self.inner.iter())
    }

    /// Total number of stored vertices over all rings
    pub fn total_vertices(&self) -> usize {
        self.rings().map(Vec::len).sum()
    }
}

// A ring needs at least 4 vertices and must end where it started
fn check_ring(pts: &[Point]) -> GeomResult<()> {
    if pts.len() < 4 {
        return Err(GeometryError::ParameterError(format!(
            "Too few points to create a polygon ring: {}!",
            pts.len()
        )));
    }
    let (first, last) = (&pts[0], &pts[pts.len() - 1]);
    if !first.is_close(last) {
        return Err(GeometryError::ParameterError(format!(
            "To make a polygon ring, the first and last points must match! got {:?} and {:?}",
            first.coords(),
            last.coords(),
        )));
    }
    Ok(())
}

impl GeometricObject for Polygon {
    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        let rings: Vec<String> = self
            .rings()
            .map(|ring| format!("({})", coord_list(ring)))
            .collect();
        format!("POLYGON({})", rings.join(","))
    }
}

display_for_geom!(Polygon);
