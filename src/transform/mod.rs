mod precision;
mod properties;
mod rewind;

pub use precision::limit_precision;
pub use properties::limit_properties;
pub use rewind::{rewind_multi_polygon, rewind_polygon};

use crate::error::Result;
use crate::walk::Callbacks;


/// The callbacks applied by the `tidy` command: rings are rewound on polygons
/// and multi polygons, every coordinate is limited to `precision` decimal
/// digits and feature properties are filtered if a list is given.
pub fn tidy_callbacks(precision: i32, properties: Option<&str>) -> Result<Callbacks<'static>> {
    let mut callbacks = Callbacks::new()
        .on_coordinate(limit_precision(precision)?)
        .on_polygon(rewind_polygon)
        .on_multi_polygon(rewind_multi_polygon);

    if let Some(limit) = limit_properties(properties) {
        callbacks = callbacks.on_feature(limit);
    }

    Ok(callbacks)
}
