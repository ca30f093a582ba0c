//! Generic feature format capability shared by all encodings.
//!
//! A format reads features, geometries and projections from some source and
//! writes them back out. [`FeatureFormat`] is the contract every format
//! exposes: the kind of source it consumes, the read and write operations and
//! the normalisation of caller supplied options. Text based encodings only
//! implement the [`TextFeatureFormat`] hooks and are wrapped in [`TextFeature`].
use super::core::GeomResult;
use super::feature::Feature;
use super::geometry::Geometry;
use super::proj::Projection;
use std::any::Any;
use std::fmt;

pub mod text_feature;
pub mod wkt;

pub use text_feature::{TextFeature, TextFeatureFormat, get_text};
pub use wkt::Wkt;

/// Kind of source a format consumes, used when dispatching on sniffed content
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormatType {
    ArrayBuffer,
    Json,
    Text,
    Xml,
}

/// Caller supplied input to a read operation
#[derive(Clone, Copy)]
pub enum Source<'a> {
    Text(&'a str),
    /// Raw bytes of a structured document
    Document(&'a [u8]),
    Object(&'a dyn Any),
    Null,
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Source::Document(bytes) => write!(f, "Document({} bytes)", bytes.len()),
            Source::Object(_) => f.write_str("Object(..)"),
            Source::Null => f.write_str("Null"),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Source::Text(value)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(value: &'a String) -> Self {
        Source::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for Source<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Source::Null, Source::Text)
    }
}

/// Options for read operations
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadOptions {
    /// Projection of the data being read
    pub data_projection: Option<Projection>,
    /// Projection the caller wants the resulting geometries in
    pub feature_projection: Option<Projection>,
}

impl ReadOptions {
    pub fn with_data_projection(mut self, proj: Projection) -> Self {
        self.data_projection = Some(proj);
        self
    }

    pub fn with_feature_projection(mut self, proj: Projection) -> Self {
        self.feature_projection = Some(proj);
        self
    }
}

/// Options for write operations
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteOptions {
    /// Projection of the data being written
    pub data_projection: Option<Projection>,
    /// Projection the geometries handed to the writer are in
    pub feature_projection: Option<Projection>,
    /// Round coordinates to this many decimal places
    pub decimals: Option<u32>,
}

impl WriteOptions {
    pub fn with_data_projection(mut self, proj: Projection) -> Self {
        self.data_projection = Some(proj);
        self
    }

    pub fn with_feature_projection(mut self, proj: Projection) -> Self {
        self.feature_projection = Some(proj);
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }
}

/// Public contract of every feature format
///
/// Read operations take a [`Source`] and optional [`ReadOptions`], write operations
/// take domain objects and optional [`WriteOptions`]. Options are normalised through
/// [`FeatureFormat::adapt_read_options`] / [`FeatureFormat::adapt_write_options`]
/// before a format looks at them.
pub trait FeatureFormat {
    /// Kind of source this format consumes
    fn get_type(&self) -> FormatType;

    /// Projection assumed for data that does not declare one
    fn default_data_projection(&self) -> Option<Projection> {
        None
    }

    fn read_feature(
        &self,
        source: Source<'_>,
        options: Option<&ReadOptions>,
    ) -> GeomResult<Option<Feature>>;

    fn read_features(
        &self,
        source: Source<'_>,
        options: Option<&ReadOptions>,
    ) -> GeomResult<Vec<Feature>>;

    fn read_geometry(
        &self,
        source: Source<'_>,
        options: Option<&ReadOptions>,
    ) -> GeomResult<Option<Geometry>>;

    /// Projection of the data in the source, if the format can tell
    fn read_projection(&self, source: Source<'_>) -> Option<Projection>;

    fn write_feature(&self, feature: &Feature, options: Option<&WriteOptions>) -> GeomResult<String>;

    fn write_features(
        &self,
        features: &[Feature],
        options: Option<&WriteOptions>,
    ) -> GeomResult<String>;

    fn write_geometry(
        &self,
        geometry: &Geometry,
        options: Option<&WriteOptions>,
    ) -> GeomResult<String>;

    /// Normalise read options: the data projection falls back to the
    /// format's default, everything else is passed through.
    fn adapt_read_options(&self, options: Option<&ReadOptions>) -> ReadOptions {
        let mut adapted = options.cloned().unwrap_or_default();
        if adapted.data_projection.is_none() {
            adapted.data_projection = self.default_data_projection();
        }
        adapted
    }

    /// Normalise write options the same way as [`FeatureFormat::adapt_read_options`]
    fn adapt_write_options(&self, options: Option<&WriteOptions>) -> WriteOptions {
        let mut adapted = options.cloned().unwrap_or_default();
        if adapted.data_projection.is_none() {
            adapted.data_projection = self.default_data_projection();
        }
        adapted
    }
}
