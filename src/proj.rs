/// Units a projection's coordinates are expressed in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Units {
    Degrees,
    Meters,
}

/// Identifies the coordinate reference system of a set of coordinates
///
/// This is a label only, coordinates are never transformed between projections.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Projection {
    code: String,
    units: Units,
}

const EPSG_4326_ALIASES: [&str; 3] = ["EPSG:4326", "CRS:84", "urn:ogc:def:crs:EPSG::4326"];
const EPSG_3857_ALIASES: [&str; 3] = ["EPSG:3857", "EPSG:900913", "EPSG:102100"];

impl Projection {
    pub fn new(code: impl Into<String>, units: Units) -> Self {
        Self {
            code: code.into(),
            units,
        }
    }

    /// Geographic WGS 84 (longitude/latitude in degrees)
    pub fn epsg_4326() -> Self {
        Self::new("EPSG:4326", Units::Degrees)
    }

    /// Spherical Mercator
    pub fn epsg_3857() -> Self {
        Self::new("EPSG:3857", Units::Meters)
    }

    /// Look up a well-known projection by code or alias
    pub fn get(code: &str) -> Option<Self> {
        if EPSG_4326_ALIASES.contains(&code) {
            Some(Self::epsg_4326())
        } else if EPSG_3857_ALIASES.contains(&code) {
            Some(Self::epsg_3857())
        } else {
            None
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn units(&self) -> Units {
        self.units
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
