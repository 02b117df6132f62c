use geojson::Position;

use crate::error::{Result, TidyError};


/// Rounds `value` to the grid given by `factor` (`10^decimals`), ties to even.
/// Values whose scaled form is not finite are returned unchanged.
pub fn to_fixed(value: f64, factor: f64) -> f64 {
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round_ties_even() / factor
}

/// Coordinate callback keeping `decimals` decimal digits of longitude and
/// latitude. Any further components (altitude) are not touched.
pub fn limit_precision(decimals: i32) -> Result<impl FnMut(&mut Position)> {
    if decimals < 0 {
        return Err(TidyError::invalid_argument(
            "precision",
            decimals,
            "must not be negative",
        ));
    }

    let factor = 10_f64.powi(decimals);

    Ok(move |coordinate: &mut Position| {
        if let [x, y, ..] = coordinate.as_mut_slice() {
            *x = to_fixed(*x, factor);
            *y = to_fixed(*y, factor);
        }
    })
}
