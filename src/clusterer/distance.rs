/// Euclidean distance between two points.
///
/// Only the overlapping prefix is compared when the lengths differ; callers that
/// need strict dimensionality checks must do them before calling.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;

    for (x, y) in a.iter().zip(b) {
        let d = y - x;
        sum += d * d;
    }

    sum.sqrt()
}
