mod callbacks;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Position, Value};

use crate::error::{Result, TidyError};
pub use callbacks::Callbacks;


/// Depth-first walk over a GeoJSON tree.
///
/// Every construct is handed to its callback before anything nested inside it
/// is visited, so a polygon callback sees the rings before their coordinates
/// are touched and a feature callback runs before its geometry.
pub struct Walker<'a> {
    callbacks: Callbacks<'a>,
}

impl<'a> Walker<'a> {
    pub fn new(callbacks: Callbacks<'a>) -> Self {
        Walker { callbacks }
    }

    pub fn walk(&mut self, root: &mut GeoJson) -> Result<()> {
        match root {
            GeoJson::FeatureCollection(collection) => self.walk_feature_collection(collection),
            GeoJson::Feature(feature) => self.walk_feature(feature),
            GeoJson::Geometry(geometry) => self.walk_geometry(geometry),
        }
    }

    fn walk_feature_collection(&mut self, collection: &mut FeatureCollection) -> Result<()> {
        if let Some(cb) = self.callbacks.feature_collection.as_mut() {
            cb(collection);
        }

        for feature in collection.features.iter_mut() {
            self.walk_feature(feature)?;
        }

        Ok(())
    }

    fn walk_feature(&mut self, feature: &mut Feature) -> Result<()> {
        if let Some(cb) = self.callbacks.feature.as_mut() {
            cb(feature);
        }

        match feature.geometry.as_mut() {
            Some(geometry) => self.walk_geometry(geometry),
            None => Ok(()),
        }
    }

    pub fn walk_geometry(&mut self, geometry: &mut Geometry) -> Result<()> {
        check_positions(&geometry.value)?;

        let cbs = &mut self.callbacks;
        match &mut geometry.value {
            Value::Point(position) => {
                if let Some(cb) = cbs.point.as_mut() {
                    cb(position);
                }
                self.visit_coordinate(position);
            }
            Value::MultiPoint(positions) => {
                if let Some(cb) = cbs.multi_point.as_mut() {
                    cb(positions);
                }
                self.visit_coordinates(positions);
            }
            Value::LineString(line) => {
                if let Some(cb) = cbs.line_string.as_mut() {
                    cb(line);
                }
                self.visit_coordinates(line);
            }
            Value::MultiLineString(lines) => {
                if let Some(cb) = cbs.multi_line_string.as_mut() {
                    cb(lines);
                }
                lines.iter_mut().for_each(|line| self.visit_coordinates(line));
            }
            Value::Polygon(rings) => {
                if let Some(cb) = cbs.polygon.as_mut() {
                    cb(rings);
                }
                rings.iter_mut().for_each(|ring| self.visit_coordinates(ring));
            }
            Value::MultiPolygon(polygons) => {
                if let Some(cb) = cbs.multi_polygon.as_mut() {
                    cb(polygons);
                }
                polygons
                    .iter_mut()
                    .flatten()
                    .for_each(|ring| self.visit_coordinates(ring));
            }
            Value::GeometryCollection(geometries) => {
                if let Some(cb) = cbs.geometry_collection.as_mut() {
                    cb(geometries);
                }
                for member in geometries.iter_mut() {
                    self.walk_geometry(member)?;
                }
            }
        }

        Ok(())
    }

    fn visit_coordinates(&mut self, positions: &mut [Position]) {
        positions.iter_mut().for_each(|p| self.visit_coordinate(p));
    }

    fn visit_coordinate(&mut self, position: &mut Position) {
        if let Some(cb) = self.callbacks.coordinate.as_mut() {
            cb(position);
        }
    }
}

// callbacks index longitude and latitude directly, so reject anything shorter
// before the first callback sees the geometry
fn check_positions(value: &Value) -> Result<()> {
    let kind = kind_name(value);
    match value {
        Value::Point(position) => check(kind, std::slice::from_ref(position)),
        Value::MultiPoint(positions) | Value::LineString(positions) => check(kind, positions),
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().try_for_each(|line| check(kind, line))
        }
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .flatten()
            .try_for_each(|ring| check(kind, ring)),
        // members are checked when the walk reaches them
        Value::GeometryCollection(_) => Ok(()),
    }
}

fn check(kind: &str, positions: &[Position]) -> Result<()> {
    match positions.iter().find(|p| p.len() < 2) {
        Some(p) => Err(TidyError::MalformedInput(format!(
            "{} contains a position with {} component(s), expected at least 2",
            kind,
            p.len()
        ))),
        None => Ok(()),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
