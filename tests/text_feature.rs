use geoformat::format::{
    FeatureFormat, FormatType, ReadOptions, Source, TextFeature, TextFeatureFormat, Wkt,
    WriteOptions, get_text,
};
use geoformat::proj::Projection;
use geoformat::{Feature, GeomResult, Geometry, GeometryError, LineString, Point};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

// Writes every feature as the same literal
struct Literal;

impl TextFeatureFormat for Literal {
    fn write_feature_text(&self, _feature: &Feature, _options: &WriteOptions) -> GeomResult<String> {
        Ok(String::from("POINT"))
    }
}

// One placeholder feature per comma separated token, nothing for empty text
struct CommaSplit;

impl TextFeatureFormat for CommaSplit {
    fn default_data_projection(&self) -> Option<Projection> {
        Some(Projection::epsg_4326())
    }

    fn read_features_from_text(
        &self,
        text: &str,
        _options: &ReadOptions,
    ) -> GeomResult<Vec<Feature>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(text
            .split(',')
            .map(|token| Feature::default().with_id(token))
            .collect())
    }
}

fn random_text(len: usize) -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[test]
fn test_coercion_keeps_text() {
    for len in [0, 1, 17, 256] {
        let text = random_text(len);
        assert_eq!(get_text(&Source::from(&text)), text);
    }
}

#[test]
fn test_coercion_empties_everything_else() {
    let object: BTreeMap<String, String> = BTreeMap::new();
    assert_eq!(get_text(&Source::Object(&object)), "");
    assert_eq!(get_text(&Source::Document(b"<wkt>POINT(1 1)</wkt>")), "");
    assert_eq!(get_text(&Source::from(None::<&str>)), "");
}

#[test]
fn test_type_is_always_text() {
    let format = TextFeature::new(Wkt::new());
    let before = format.get_type();
    let _ = format.read_features("POINT(0 0)".into(), None);
    assert_eq!(before, FormatType::Text);
    assert_eq!(format.get_type(), FormatType::Text);
    assert_eq!(TextFeature::new(Literal).get_type(), FormatType::Text);
}

#[test]
fn test_missing_hooks_do_not_fail() {
    let format = TextFeature::new(Literal);
    assert!(format.read_feature("POINT(0 0)".into(), None).unwrap().is_none());
    assert!(format.read_features("POINT(0 0)".into(), None).unwrap().is_empty());
    assert!(format.read_geometry("POINT(0 0)".into(), None).unwrap().is_none());

    let geom = Geometry::Point(Point::new(0.0, 0.0));
    assert_eq!(format.write_geometry(&geom, None).unwrap(), "");
    assert_eq!(format.write_features(&[], None).unwrap(), "");
}

#[test]
fn test_projection_falls_back_to_default() {
    let format = TextFeature::new(CommaSplit);
    let object = 7i32;
    for source in [
        Source::Text("a,b"),
        Source::Object(&object),
        Source::Document(b""),
        Source::Null,
    ] {
        assert_eq!(format.read_projection(source), Some(Projection::epsg_4326()));
    }

    let wkt = TextFeature::new(Wkt::new().with_data_projection(Projection::epsg_3857()));
    assert_eq!(wkt.read_projection("POINT(1 1)".into()), Some(Projection::epsg_3857()));
    assert!(TextFeature::new(Wkt::new()).read_projection(Source::Null).is_none());
}

#[test]
fn test_repeated_reads_match() {
    let format = TextFeature::new(Wkt::new());
    let text = "POLYGON((0 0, 0 3, 3 3, 3 0, 0 0))";
    let first = format.read_geometry(text.into(), None).unwrap();
    let second = format.read_geometry(text.into(), None).unwrap();
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn test_write_feature_literal() {
    let format = TextFeature::new(Literal);
    let line = LineString::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]).unwrap();
    for feature in [
        Feature::default(),
        Feature::new(Point::new(2.0, 3.0)),
        Feature::new(line).with_property("name", "road"),
    ] {
        assert_eq!(format.write_feature(&feature, None).unwrap(), "POINT");
    }
}

#[test]
fn test_read_features_comma_split() {
    let format = TextFeature::new(CommaSplit);
    let features = format.read_features("a,b,c".into(), None).unwrap();
    let ids: Vec<_> = features.iter().filter_map(|f| f.id.as_deref()).collect();
    assert_eq!(ids, ["a", "b", "c"]);

    let object: BTreeMap<String, String> = BTreeMap::new();
    let features = format.read_features(Source::Object(&object), None).unwrap();
    assert!(features.is_empty());
}

#[test]
fn test_shared_across_threads() {
    let format = Arc::new(TextFeature::new(Wkt::new()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let format = Arc::clone(&format);
            thread::spawn(move || {
                let text = format!("POINT({i} {i})");
                let geom = format.read_geometry(text.as_str().into(), None).unwrap();
                format.write_geometry(&geom.unwrap(), None).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("POINT({i} {i})"));
    }
}

#[test]
fn test_wkt_errors_propagate() {
    let format = TextFeature::new(Wkt::new());
    match format.read_features("POLYGON((0 0, 1 0, 1 1, 0 1))".into(), None) {
        Err(GeometryError::ParameterError(_)) => (),
        other => panic!("Expected the unclosed ring to be rejected, got {other:?}"),
    }
    match format.read_geometry("CIRCULARSTRING(0 0, 1 1, 2 0)".into(), None) {
        Err(GeometryError::Unsupported(_)) => (),
        other => panic!("Expected an unsupported geometry error, got {other:?}"),
    }
}

#[test]
fn test_wkt_roundtrip_with_decimals() {
    let format = TextFeature::new(Wkt::new());
    let text = "LINESTRING(0.123456 1.987654, 2.5 3.25)";
    let feature = format.read_feature(text.into(), None).unwrap().unwrap();
    let opts = WriteOptions::default().with_decimals(2);
    assert_eq!(
        format.write_feature(&feature, Some(&opts)).unwrap(),
        "LINESTRING(0.12 1.99,2.5 3.25)"
    );
    assert!(format.read_feature(Source::Null, None).unwrap().is_none());
}
