use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::bufread::GzDecoder;
use geojson::GeoJson;

use crate::error::{Result, TidyError};


/// Reads the whole GeoJSON document at `path`. Files ending in `.gz` are
/// decompressed on the fly.
pub fn read_geo_json(path: &Path) -> Result<GeoJson> {
    let file = File::open(path).map_err(|e| TidyError::io(format!("Couldn't open {}", path.display()), e))?;
    let mut buf = BufReader::new(file);

    let mut text = String::new();
    let read = if is_gzipped(path) {
        GzDecoder::new(buf).read_to_string(&mut text)
    } else {
        buf.read_to_string(&mut text)
    };
    read.map_err(|e| TidyError::io(format!("Couldn't read {}", path.display()), e))?;

    parse_geo_json(&text)
}

pub fn parse_geo_json(text: &str) -> Result<GeoJson> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    Ok(GeoJson::from_json_value(value)?)
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
