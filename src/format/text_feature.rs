//! Adapter turning plain-text encoders/decoders into a [`FeatureFormat`].
//!
//! A text format implements the [`TextFeatureFormat`] hooks, which only ever see
//! a `&str`. Wrapping it in [`TextFeature`] provides the public read and write
//! operations: the source is coerced to text with [`get_text`], options go through
//! the generic adaptation step, and the result of the hook is returned as is.
//!
//! Hooks a format leaves out fall back to an empty result (`None`, an empty
//! vector or an empty string) instead of an error, so a read-only or write-only
//! format is legal.
use super::{FeatureFormat, FormatType, ReadOptions, Source, WriteOptions};
use crate::core::GeomResult;
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::proj::Projection;

/// Coerce a source to text. Anything that is not already text reads as `""`.
pub fn get_text<'a>(source: &Source<'a>) -> &'a str {
    match *source {
        Source::Text(text) => text,
        _ => "",
    }
}

/// Encoding and decoding hooks of a text based format
pub trait TextFeatureFormat {
    /// Projection assumed for text that does not declare one
    fn default_data_projection(&self) -> Option<Projection> {
        None
    }

    fn read_feature_from_text(
        &self,
        _text: &str,
        _options: &ReadOptions,
    ) -> GeomResult<Option<Feature>> {
        log::debug!("read_feature_from_text not implemented, returning nothing");
        Ok(None)
    }

    fn read_features_from_text(
        &self,
        _text: &str,
        _options: &ReadOptions,
    ) -> GeomResult<Vec<Feature>> {
        log::debug!("read_features_from_text not implemented, returning nothing");
        Ok(Vec::new())
    }

    fn read_geometry_from_text(
        &self,
        _text: &str,
        _options: &ReadOptions,
    ) -> GeomResult<Option<Geometry>> {
        log::debug!("read_geometry_from_text not implemented, returning nothing");
        Ok(None)
    }

    fn read_projection_from_text(&self, _text: &str) -> Option<Projection> {
        self.default_data_projection()
    }

    fn write_feature_text(&self, _feature: &Feature, _options: &WriteOptions) -> GeomResult<String> {
        log::debug!("write_feature_text not implemented, returning empty text");
        Ok(String::new())
    }

    fn write_features_text(
        &self,
        _features: &[Feature],
        _options: &WriteOptions,
    ) -> GeomResult<String> {
        log::debug!("write_features_text not implemented, returning empty text");
        Ok(String::new())
    }

    fn write_geometry_text(
        &self,
        _geometry: &Geometry,
        _options: &WriteOptions,
    ) -> GeomResult<String> {
        log::debug!("write_geometry_text not implemented, returning empty text");
        Ok(String::new())
    }
}

/// A text format exposed through the generic [`FeatureFormat`] contract
///
/// Example
/// ```rust
/// use geoformat::format::{FeatureFormat, FormatType, TextFeature, Wkt};
///
/// let format = TextFeature::new(Wkt::default());
/// assert_eq!(format.get_type(), FormatType::Text);
///
/// let geom = format.read_geometry("POINT(1 2)".into(), None).unwrap().unwrap();
/// assert_eq!(format.write_geometry(&geom, None).unwrap(), "POINT(1 2)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextFeature<F> {
    inner: F,
}

impl<F: TextFeatureFormat> TextFeature<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    /// The wrapped format
    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: TextFeatureFormat> From<F> for TextFeature<F> {
    fn from(inner: F) -> Self {
        Self::new(inner)
    }
}

impl<F: TextFeatureFormat> FeatureFormat for TextFeature<F> {
    fn get_type(&self) -> FormatType {
        FormatType::Text
    }

    fn default_data_projection(&self) -> Option<Projection> {
        self.inner.default_data_projection()
    }

    fn read_feature(
        &self,
        source: Source<'_>,
        options: Option<&ReadOptions>,
    ) -> GeomResult<Option<Feature>> {
        log::trace!("read_feature from {source:?}");
        self.inner
            .read_feature_from_text(get_text(&source), &self.adapt_read_options(options))
    }

    fn read_features(
        &self,
        source: Source<'_>,
        options: Option<&ReadOptions>,
    ) -> GeomResult<Vec<Feature>> {
        log::trace!("read_features from {source:?}");
        self.inner
            .read_features_from_text(get_text(&source), &self.adapt_read_options(options))
    }

    fn read_geometry(
        &self,
        source: Source<'_>,
        options: Option<&ReadOptions>,
    ) -> GeomResult<Option<Geometry>> {
        log::trace!("read_geometry from {source:?}");
        self.inner
            .read_geometry_from_text(get_text(&source), &self.adapt_read_options(options))
    }

    fn read_projection(&self, source: Source<'_>) -> Option<Projection> {
        log::trace!("read_projection from {source:?}");
        self.inner.read_projection_from_text(get_text(&source))
    }

    fn write_feature(&self, feature: &Feature, options: Option<&WriteOptions>) -> GeomResult<String> {
        log::trace!("write_feature: {:?}", feature.id);
        self.inner
            .write_feature_text(feature, &self.adapt_write_options(options))
    }

    fn write_features(
        &self,
        features: &[Feature],
        options: Option<&WriteOptions>,
    ) -> GeomResult<String> {
        log::trace!("write_features: {} features", features.len());
        self.inner
            .write_features_text(features, &self.adapt_write_options(options))
    }

    fn write_geometry(
        &self,
        geometry: &Geometry,
        options: Option<&WriteOptions>,
    ) -> GeomResult<String> {
        log::trace!("write_geometry: {}", geometry.kind());
        self.inner
            .write_geometry_text(geometry, &self.adapt_write_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use crate::core::GeometryError;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Keeps every trace record so tests can look for the dispatch they made
    struct TraceRecorder {
        lines: Mutex<Vec<String>>,
    }

    impl Log for TraceRecorder {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Trace
        }

        fn log(&self, record: &Record) {
            if record.level() == Level::Trace {
                if let Ok(mut lines) = self.lines.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static RECORDER: TraceRecorder = TraceRecorder {
        lines: Mutex::new(Vec::new()),
    };

    // Implements none of the hooks
    struct Bare;

    impl TextFeatureFormat for Bare {}

    // Records what the hooks were handed by echoing it back
    struct Echo;

    impl TextFeatureFormat for Echo {
        fn default_data_projection(&self) -> Option<Projection> {
            Some(Projection::epsg_3857())
        }

        fn read_feature_from_text(
            &self,
            text: &str,
            options: &ReadOptions,
        ) -> GeomResult<Option<Feature>> {
            let proj = options.data_projection.as_ref().map_or("", Projection::code);
            Ok(Some(
                Feature::default()
                    .with_property("text", text)
                    .with_property("proj", proj),
            ))
        }

        fn read_geometry_from_text(
            &self,
            text: &str,
            _options: &ReadOptions,
        ) -> GeomResult<Option<Geometry>> {
            Err(GeometryError::ParsingError(format!("bad input: {text:?}")))
        }

        fn write_geometry_text(
            &self,
            _geometry: &Geometry,
            options: &WriteOptions,
        ) -> GeomResult<String> {
            Ok(format!("{:?}", options.decimals))
        }
    }

    #[test]
    fn test_get_text() {
        assert_eq!(get_text(&Source::Text("POINT(0 0)")), "POINT(0 0)");
        assert_eq!(get_text(&Source::Text("")), "");
        assert_eq!(get_text(&Source::Document(b"<kml/>")), "");
        assert_eq!(get_text(&Source::Object(&HashMap::<String, String>::new())), "");
        assert_eq!(get_text(&Source::Null), "");
    }

    #[test]
    fn test_type_is_text() {
        assert_eq!(TextFeature::new(Bare).get_type(), FormatType::Text);
        assert_eq!(TextFeature::new(Echo).get_type(), FormatType::Text);
    }

    #[test]
    fn test_unimplemented_hooks_are_empty() {
        let format = TextFeature::new(Bare);
        let feature = Feature::new(Point::new(0.0, 0.0));

        assert!(format.read_feature("x".into(), None).unwrap().is_none());
        assert!(format.read_features("x".into(), None).unwrap().is_empty());
        assert!(format.read_geometry("x".into(), None).unwrap().is_none());
        assert!(format.read_projection("x".into()).is_none());
        assert_eq!(format.write_feature(&feature, None).unwrap(), "");
        assert_eq!(format.write_features(&[feature.clone()], None).unwrap(), "");
        let geom = feature.geometry.unwrap();
        assert_eq!(format.write_geometry(&geom, None).unwrap(), "");
    }

    #[test]
    fn test_hooks_receive_coerced_text_and_adapted_options() {
        let format = TextFeature::new(Echo);

        let feature = format.read_feature("abc".into(), None).unwrap().unwrap();
        assert_eq!(feature.property("text"), Some("abc"));
        assert_eq!(feature.property("proj"), Some("EPSG:3857"));

        let feature = format
            .read_feature(Source::Document(b"abc"), None)
            .unwrap()
            .unwrap();
        assert_eq!(feature.property("text"), Some(""));

        let opts = ReadOptions::default().with_data_projection(Projection::epsg_4326());
        let feature = format.read_feature(Source::Null, Some(&opts)).unwrap().unwrap();
        assert_eq!(feature.property("proj"), Some("EPSG:4326"));

        let geom = Geometry::Point(Point::new(1.0, 1.0));
        let opts = WriteOptions::default().with_decimals(4);
        assert_eq!(format.write_geometry(&geom, Some(&opts)).unwrap(), "Some(4)");
        assert_eq!(format.write_geometry(&geom, None).unwrap(), "None");
    }

    #[test]
    fn test_hook_errors_pass_through() {
        let format = TextFeature::new(Echo);
        match format.read_geometry("POINT(".into(), None) {
            Err(GeometryError::ParsingError(msg)) => assert_eq!(msg, "bad input: \"POINT(\""),
            other => panic!("Expected the hook's parsing error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_projection_for_any_source() {
        let format = TextFeature::new(Echo);
        let sources = [
            Source::Text("POINT(1 1)"),
            Source::Text(""),
            Source::Document(b"{}"),
            Source::Object(&3.5f64),
            Source::Null,
        ];
        for source in sources {
            assert_eq!(format.read_projection(source), Some(Projection::epsg_3857()));
        }
    }

    #[test]
    fn test_every_dispatch_traces() {
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(LevelFilter::Trace);

        let format = TextFeature::new(Bare);
        let feature = Feature::new(Point::new(0.0, 0.0)).with_id("traced");
        let geom = Geometry::Point(Point::new(0.0, 0.0));
        let _ = format.read_feature("x".into(), None);
        let _ = format.read_features("x".into(), None);
        let _ = format.read_geometry("x".into(), None);
        let _ = format.read_projection("x".into());
        let _ = format.write_feature(&feature, None);
        let _ = format.write_features(&[], None);
        let _ = format.write_geometry(&geom, None);

        let lines = RECORDER.lines.lock().unwrap();
        for op in [
            "read_feature ",
            "read_features ",
            "read_geometry ",
            "read_projection ",
            "write_feature:",
            "write_features:",
            "write_geometry:",
        ] {
            assert!(
                lines.iter().any(|line| line.starts_with(op)),
                "No trace record for {op}"
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let format = TextFeature::new(Echo);
        let first = format.read_feature("same".into(), None).unwrap();
        let second = format.read_feature("same".into(), None).unwrap();
        assert_eq!(first, second);
    }
}
