use geojson::{Feature, FeatureCollection, Geometry, LineStringType, PointType, PolygonType, Position};

type Callback<'a, T> = Option<Box<dyn FnMut(&mut T) + 'a>>;

/// One optional callback per GeoJSON construct the [`Walker`](super::Walker) knows.
/// Kinds without a callback are still descended into.
#[derive(Default)]
pub struct Callbacks<'a> {
    pub coordinate: Callback<'a, Position>,
    pub feature: Callback<'a, Feature>,
    pub feature_collection: Callback<'a, FeatureCollection>,
    pub point: Callback<'a, PointType>,
    pub line_string: Callback<'a, LineStringType>,
    pub polygon: Callback<'a, PolygonType>,
    pub multi_point: Callback<'a, Vec<PointType>>,
    pub multi_line_string: Callback<'a, Vec<LineStringType>>,
    pub multi_polygon: Callback<'a, Vec<PolygonType>>,
    pub geometry_collection: Callback<'a, Vec<Geometry>>,
}

#[allow(dead_code)]
impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_coordinate(mut self, f: impl FnMut(&mut Position) + 'a) -> Self {
        self.coordinate = Some(Box::new(f));
        self
    }

    pub fn on_feature(mut self, f: impl FnMut(&mut Feature) + 'a) -> Self {
        self.feature = Some(Box::new(f));
        self
    }

    pub fn on_feature_collection(mut self, f: impl FnMut(&mut FeatureCollection) + 'a) -> Self {
        self.feature_collection = Some(Box::new(f));
        self
    }

    pub fn on_point(mut self, f: impl FnMut(&mut PointType) + 'a) -> Self {
        self.point = Some(Box::new(f));
        self
    }

    pub fn on_line_string(mut self, f: impl FnMut(&mut LineStringType) + 'a) -> Self {
        self.line_string = Some(Box::new(f));
        self
    }

    pub fn on_polygon(mut self, f: impl FnMut(&mut PolygonType) + 'a) -> Self {
        self.polygon = Some(Box::new(f));
        self
    }

    pub fn on_multi_point(mut self, f: impl FnMut(&mut Vec<PointType>) + 'a) -> Self {
        self.multi_point = Some(Box::new(f));
        self
    }

    pub fn on_multi_line_string(mut self, f: impl FnMut(&mut Vec<LineStringType>) + 'a) -> Self {
        self.multi_line_string = Some(Box::new(f));
        self
    }

    pub fn on_multi_polygon(mut self, f: impl FnMut(&mut Vec<PolygonType>) + 'a) -> Self {
        self.multi_polygon = Some(Box::new(f));
        self
    }

    pub fn on_geometry_collection(mut self, f: impl FnMut(&mut Vec<Geometry>) + 'a) -> Self {
        self.geometry_collection = Some(Box::new(f));
        self
    }
}
