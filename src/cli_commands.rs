use geoformat::format::{FeatureFormat, TextFeature, Wkt, WriteOptions};
use geoformat::proj::Projection;
use geoformat::{GeomResult, GeometryError};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Get the input text from the command line, a file, or stdin
pub fn load_input(wkt: Option<String>, file: Option<&Path>) -> GeomResult<String> {
    match (wkt, file) {
        (Some(text), _) => Ok(text),
        (None, Some(fp)) => {
            log::debug!("Reading WKT from '{}'", fp.display());
            Ok(fs::read_to_string(fp)?)
        }
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Parse an input string and print some details about each feature
pub fn show_features(input: &str, split: bool, projection: Option<&str>) -> GeomResult<()> {
    let mut wkt = Wkt::new().with_split_collection(split);
    if let Some(code) = projection {
        let proj = Projection::get(code).ok_or_else(|| {
            GeometryError::ParameterError(format!("Unknown projection: {code}"))
        })?;
        wkt = wkt.with_data_projection(proj);
    }
    let format = TextFeature::new(wkt);

    let features = format.read_features(input.into(), None)?;
    if features.is_empty() {
        println!("No features found in input");
        return Ok(());
    }
    match format.read_projection(input.into()) {
        Some(proj) => println!("Projection: {proj} ({:?})", proj.units()),
        None => println!("Projection: unknown"),
    }
    println!("Read {} feature(s)", features.len());
    for (i, feature) in features.iter().enumerate() {
        match &feature.geometry {
            Some(geom) => println!(
                "[{i}] {} with {} total vertices",
                geom.kind(),
                geom.total_vertices()
            ),
            None => println!("[{i}] Feature without geometry"),
        }
    }
    Ok(())
}

/// Rewrite WKT in canonical form, keeping the top level geometry as it is
pub fn normalize_text(input: &str, decimals: Option<u32>) -> GeomResult<String> {
    let format = TextFeature::new(Wkt::new());
    let features = format.read_features(input.into(), None)?;

    let mut options = WriteOptions::default();
    if let Some(decimals) = decimals {
        options = options.with_decimals(decimals);
    }
    format.write_features(&features, Some(&options))
}

/// Parse the given input and write it back as canonical WKT, optionally saving the result
pub fn normalize(input: &str, output_path: Option<&Path>, decimals: Option<u32>) -> GeomResult<()> {
    let text = normalize_text(input, decimals)?;

    match output_path {
        None => println!("{text}"),
        Some(fp) => {
            let mut file = File::create(fp)?;
            file.write_all(text.as_bytes())?;
            println!("Geometry saved to file: '{}'", fp.display());
        }
    }
    Ok(())
}
