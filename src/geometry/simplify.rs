use super::exaggerate::ExaggeratedPoint;

/// Drop near-duplicate consecutive points
///
/// Walks the route once, keeping a point only when it is at least
/// `min_distance` (3-D) away from the last kept point. The first point is
/// always kept; the original last point is force-kept even when too close,
/// so the ribbon always ends where the route ends.
///
/// This is the only thinning the pipeline does. Its job is not to reduce
/// triangle count but to remove the zero-length segments that would break
/// the ribbon's direction math.
pub fn simplify_points(points: &[ExaggeratedPoint], min_distance: f64) -> Vec<ExaggeratedPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut kept = Vec::with_capacity(points.len());
    let mut last = points[0];
    kept.push(last);

    for p in &points[1..points.len() - 1] {
        if distance(&last, p) >= min_distance {
            kept.push(*p);
            last = *p;
        }
    }

    kept.push(points[points.len() - 1]);

    kept
}

fn distance(a: &ExaggeratedPoint, b: &ExaggeratedPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}
