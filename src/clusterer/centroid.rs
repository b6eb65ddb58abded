use crate::clusterer::Point;

/// Componentwise arithmetic mean of `points`.
///
/// Dimensionality follows the first point. Returns `None` for an empty slice.
pub fn compute_mean(points: &[Point]) -> Option<Point> {
    let first = points.first()?;
    let mut out = vec![0.0; first.len()];

    for p in points {
        for (total, value) in out.iter_mut().zip(p) {
            *total += value;
        }
    }

    let n = points.len() as f64;
    for total in &mut out {
        *total /= n;
    }

    Some(out)
}
