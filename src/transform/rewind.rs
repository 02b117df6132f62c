use geojson::{PolygonType, Position};


/// Twice the signed area of `ring`, positive when it winds clockwise.
///
/// The shoelace terms are summed with Neumaier's compensated summation, the
/// running error is folded back in at the end.
pub fn signed_area(ring: &[Position]) -> f64 {
    let mut area = 0.0_f64;
    let mut err = 0.0_f64;

    let len = ring.len();
    for i in 0..len {
        let j = if i == 0 { len - 1 } else { i - 1 };
        let (xi, yi, xj, yj) = match (&ring[i][..], &ring[j][..]) {
            ([xi, yi, ..], [xj, yj, ..]) => (*xi, *yi, *xj, *yj),
            _ => continue,
        };

        let k = (xi - xj) * (yj + yi);
        let m = area + k;
        err += if area.abs() >= k.abs() { area - m + k } else { k - m + area };
        area = m;
    }

    area + err
}

/// Reverses `ring` in place unless it already winds in the requested direction.
/// Degenerate rings (zero area) count as clockwise.
pub fn rewind_ring(ring: &mut [Position], clockwise: bool) {
    if (signed_area(ring) >= 0.0) != clockwise {
        ring.reverse();
    }
}

/// Exterior ring counter-clockwise, every hole clockwise.
pub fn rewind_rings(rings: &mut [Vec<Position>]) {
    if let Some((exterior, holes)) = rings.split_first_mut() {
        rewind_ring(exterior, false);
        holes.iter_mut().for_each(|hole| rewind_ring(hole, true));
    }
}

pub fn rewind_polygon(polygon: &mut PolygonType) {
    rewind_rings(polygon);
}

pub fn rewind_multi_polygon(polygons: &mut Vec<PolygonType>) {
    polygons.iter_mut().for_each(|polygon| rewind_rings(polygon));
}
