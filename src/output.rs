use geojson::{Feature, GeoJson};
use serde_json::Value;

use crate::error::{Result, TidyError};


// integers beyond this are not exactly representable as f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serializes `doc` as a single line of JSON.
///
/// Features without properties are written with `"properties":null`, and
/// whole-numbered coordinates are written as integers (`-0` as `0`).
pub fn to_compact_json(doc: &GeoJson) -> Result<String> {
    let mut value = serde_json::to_value(doc).map_err(TidyError::Output)?;

    restore_null_properties(doc, &mut value);
    normalize_geometries(&mut value);

    serde_json::to_string(&value).map_err(TidyError::Output)
}

fn restore_null_properties(doc: &GeoJson, value: &mut Value) {
    match doc {
        GeoJson::Feature(feature) => null_properties(feature, value),
        GeoJson::FeatureCollection(collection) => {
            if let Some(Value::Array(features)) = value.get_mut("features") {
                collection
                    .features
                    .iter()
                    .zip(features.iter_mut())
                    .for_each(|(feature, value)| null_properties(feature, value));
            }
        }
        GeoJson::Geometry(_) => {}
    }
}

fn null_properties(feature: &Feature, value: &mut Value) {
    if feature.properties.is_some() {
        return;
    }
    if let Some(object) = value.as_object_mut() {
        object.insert("properties".to_string(), Value::Null);
    }
}

fn normalize_geometries(value: &mut Value) {
    match value {
        Value::Object(object) => {
            for (key, member) in object.iter_mut() {
                match key.as_str() {
                    "coordinates" => normalize_numbers(member),
                    "properties" => {}
                    _ => normalize_geometries(member),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_geometries),
        _ => {}
    }
}

fn normalize_numbers(value: &mut Value) {
    if let Value::Array(items) = value {
        items.iter_mut().for_each(normalize_numbers);
        return;
    }

    let whole = match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.trunc() == *f && f.abs() < MAX_EXACT_INTEGER),
        _ => None,
    };
    if let Some(f) = whole {
        *value = Value::from(f as i64);
    }
}
