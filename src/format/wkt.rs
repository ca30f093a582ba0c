use super::text_feature::TextFeatureFormat;
use super::{ReadOptions, WriteOptions};
use crate::core::{GeomResult, GeometricObject, GeometryError};
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::proj::Projection;
use crate::{LineString, MultiPoint, Point, Polygon};
use regex::Regex;
use std::sync::OnceLock;

const NUMBER: &str = r"-?\d+(?:\.\d*)?(?:[eE][-+]?\d+)?";
const GEOM_TYPE: &str = r"^\s*[A-Z]+\s*";
const MAX_DEPTH: usize = 64;

static COORD_PAIR_RE: OnceLock<Regex> = OnceLock::new();
static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();

type ParserResult<'a, T> = GeomResult<(T, &'a str)>;

#[derive(Debug)]
enum GeomType {
    Point,
    MultiPoint,
    LineString,
    Polygon,
    GeometryCollection,
}

/// Get coordinate pair regex once to avoid recompilation (thread-safe)
fn coord_pair_re() -> &'static Regex {
    COORD_PAIR_RE.get_or_init(|| {
        Regex::new(&format!(r"^\s*({NUMBER})\s+({NUMBER})")).unwrap()
    })
}

/// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).unwrap())
}

/// Well-known text encoding of geometries
///
/// Reads and writes `POINT`, `MULTIPOINT`, `LINESTRING`, `POLYGON` and
/// `GEOMETRYCOLLECTION` in two dimensions. Keywords are upper case.
/// Feature ids and properties have no WKT representation and are dropped on write.
///
/// Examples
/// ```rust
/// use geoformat::format::{FeatureFormat, TextFeature, Wkt};
///
/// let format = TextFeature::new(Wkt::new().with_split_collection(true));
/// let text = "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,3 4))";
/// let features = format.read_features(text.into(), None).unwrap();
/// assert_eq!(features.len(), 2);
/// assert_eq!(format.write_features(&features, None).unwrap(), text);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Wkt {
    split_collection: bool,
    data_projection: Option<Projection>,
}

impl Wkt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the members of a top level `GEOMETRYCOLLECTION` as separate features
    pub fn with_split_collection(mut self, split: bool) -> Self {
        self.split_collection = split;
        self
    }

    /// Projection reported for text read by this format
    pub fn with_data_projection(mut self, proj: Projection) -> Self {
        self.data_projection = Some(proj);
        self
    }
}

impl TextFeatureFormat for Wkt {
    fn default_data_projection(&self) -> Option<Projection> {
        self.data_projection.clone()
    }

    fn read_feature_from_text(
        &self,
        text: &str,
        options: &ReadOptions,
    ) -> GeomResult<Option<Feature>> {
        Ok(self
            .read_geometry_from_text(text, options)?
            .map(Feature::new))
    }

    fn read_features_from_text(
        &self,
        text: &str,
        options: &ReadOptions,
    ) -> GeomResult<Vec<Feature>> {
        let features = match self.read_geometry_from_text(text, options)? {
            None => Vec::new(),
            Some(Geometry::GeometryCollection(members)) if self.split_collection => {
                members.into_iter().map(Feature::new).collect()
            }
            Some(geom) => vec![Feature::new(geom)],
        };
        log::debug!("Read {} features from WKT", features.len());
        Ok(features)
    }

    fn read_geometry_from_text(
        &self,
        text: &str,
        _options: &ReadOptions,
    ) -> GeomResult<Option<Geometry>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        parse_wkt(text).map(Some)
    }

    fn write_feature_text(&self, feature: &Feature, options: &WriteOptions) -> GeomResult<String> {
        match &feature.geometry {
            Some(geom) => self.write_geometry_text(geom, options),
            None => Ok(String::new()),
        }
    }

    fn write_features_text(
        &self,
        features: &[Feature],
        options: &WriteOptions,
    ) -> GeomResult<String> {
        let geoms: Vec<Geometry> = features
            .iter()
            .filter_map(|f| f.geometry.clone())
            .collect();
        match geoms.len() {
            0 => Ok(String::new()),
            1 => self.write_geometry_text(&geoms[0], options),
            _ => self.write_geometry_text(&Geometry::GeometryCollection(geoms), options),
        }
    }

    fn write_geometry_text(
        &self,
        geometry: &Geometry,
        options: &WriteOptions,
    ) -> GeomResult<String> {
        Ok(match options.decimals {
            Some(decimals) => geometry.round(decimals).wkt(),
            None => geometry.wkt(),
        })
    }
}

/// Parse a WKT string and return the parsed geometry
///
/// Returns an error if the text is not valid WKT or has trailing characters.
///
/// Examples
/// ```rust
/// use geoformat::Geometry;
/// use geoformat::format::wkt::parse_wkt;
///
/// match parse_wkt("POLYGON((0 0, 0 1, 1 1, 0 0))") {
///     Ok(Geometry::Polygon(poly)) => assert_eq!(poly.outer.len(), 4),
///     other => panic!("Expected a polygon, got {other:?}"),
/// }
/// ```
pub fn parse_wkt(raw_str: &str) -> GeomResult<Geometry> {
    let (geom, trailing) = parse_geometry(raw_str, 0)?;
    if !trailing.trim().is_empty() {
        Err(GeometryError::ParsingError(String::from(
            "Trailing characters after geometry!",
        )))
    } else {
        Ok(geom)
    }
}

// Parse one tagged geometry from the start of the string, `depth` collections deep
fn parse_geometry(raw_str: &str, depth: usize) -> ParserResult<'_, Geometry> {
    if depth > MAX_DEPTH {
        return Err(GeometryError::ParsingError(format!(
            "Geometry collections nested deeper than {MAX_DEPTH} levels"
        )));
    }
    let (kind, rest) = identify_type(raw_str)?;
    if rest.starts_with("EMPTY") {
        return Err(GeometryError::Unsupported(format!("Empty {kind:?} geometry")));
    }
    match kind {
        GeomType::Point => {
            let (pt, tail) = parse_point(rest)?;
            Ok((pt.into(), tail))
        }
        GeomType::MultiPoint => {
            let (mp, tail) = parse_multipoint(rest)?;
            Ok((mp.into(), tail))
        }
        GeomType::LineString => {
            let (pts, tail) = parse_coordinate_list(rest)?;
            Ok((LineString::new(pts)?.into(), tail))
        }
        GeomType::Polygon => {
            let (poly, tail) = parse_polygon(rest)?;
            Ok((poly.into(), tail))
        }
        GeomType::GeometryCollection => {
            let (members, tail) = parse_list(rest, |s| parse_geometry(s, depth + 1))?;
            Ok((Geometry::GeometryCollection(members), tail))
        }
    }
}

/// Identifies the type of geometry at the start of a WKT string
fn identify_type(raw_str: &str) -> ParserResult<'_, GeomType> {
    let re = geom_type_re();
    if let Some(m) = re.find(raw_str) {
        let rest = &raw_str[m.end()..];
        match m.as_str().trim() {
            "POINT" => Ok((GeomType::Point, rest)),
            "MULTIPOINT" => Ok((GeomType::MultiPoint, rest)),
            "LINESTRING" => Ok((GeomType::LineString, rest)),
            "POLYGON" => Ok((GeomType::Polygon, rest)),
            "GEOMETRYCOLLECTION" => Ok((GeomType::GeometryCollection, rest)),
            other => Err(GeometryError::Unsupported(format!(
                "Unsupported Geometry: {other}"
            ))),
        }
    } else {
        Err(GeometryError::ParsingError(String::from(
            "Could not parse shape type",
        )))
    }
}

// Strip the expected token, ignoring leading whitespace
fn expect(raw_str: &str, token: char) -> GeomResult<&str> {
    raw_str
        .trim_start()
        .strip_prefix(token)
        .ok_or_else(|| GeometryError::ParsingError(format!("Expected '{token}'")))
}

/// Parse `(item, item, ...)` with at least one item
fn parse_list<'a, T>(
    raw_str: &'a str,
    item: impl Fn(&'a str) -> ParserResult<'a, T>,
) -> ParserResult<'a, Vec<T>> {
    let mut rest = expect(raw_str, '(')?;
    let mut items = Vec::new();
    loop {
        let (value, tail) = item(rest)?;
        items.push(value);
        let tail = tail.trim_start();
        if let Some(s) = tail.strip_prefix(',') {
            rest = s;
        } else if let Some(s) = tail.strip_prefix(')') {
            return Ok((items, s));
        } else {
            return Err(GeometryError::ParsingError(String::from(
                "Expected ',' or ')' in list",
            )));
        }
    }
}

/// Parse a single coordinate pair from the start of a string
fn parse_coord_pair(raw_str: &str) -> ParserResult<'_, Point> {
    let cap = coord_pair_re().captures(raw_str).ok_or_else(|| {
        GeometryError::ParsingError(String::from("Could not parse coordinates"))
    })?;
    let pt = Point::new(parse_number(&cap[1])?, parse_number(&cap[2])?);
    Ok((pt, &raw_str[cap.get_match().end()..]))
}

fn parse_number(raw: &str) -> GeomResult<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| GeometryError::ParsingError(format!("Invalid number '{raw}': {e}")))?;
    if !value.is_finite() {
        return Err(GeometryError::ParsingError(format!(
            "Number out of range: '{raw}'"
        )));
    }
    Ok(value)
}

/// Parse a point coordinates (after removing the type prefix from the string)
fn parse_point(raw_str: &str) -> ParserResult<'_, Point> {
    let (mut pts, rest) = parse_coordinate_list(raw_str)?;
    if pts.len() != 1 {
        return Err(GeometryError::ParsingError(format!(
            "A point needs exactly one coordinate pair, got {}",
            pts.len()
        )));
    }
    Ok((pts.remove(0), rest))
}

/// Parse a list of coordinate pairs (points) from the start of a string
fn parse_coordinate_list(raw_str: &str) -> ParserResult<'_, Vec<Point>> {
    parse_list(raw_str, parse_coord_pair)
}

/// Parse a multipoint, either as `(x y, x y)` or `((x y), (x y))`
fn parse_multipoint(raw_str: &str) -> ParserResult<'_, MultiPoint> {
    let nested = expect(raw_str, '(')?.trim_start().starts_with('(');
    let (pts, rest) = if nested {
        parse_list(raw_str, parse_point)?
    } else {
        parse_coordinate_list(raw_str)?
    };
    Ok((MultiPoint::new(pts), rest))
}

// Parse a polygon from the given wkt string with type prefix removed
fn parse_polygon(raw_str: &str) -> ParserResult<'_, Polygon> {
    let (mut rings, rest) = parse_list(raw_str, parse_coordinate_list)?;
    let outer = rings.remove(0);
    Ok((Polygon::with_holes(outer, rings)?, rest))
}
