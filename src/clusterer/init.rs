use crate::clusterer::{KMeansError, Point};
use rand::Rng;

/// Draw `count` distinct-valued starting means from `data`.
///
/// Positions are sampled uniformly without replacement from a working copy, so the
/// input is never touched and the output follows draw order. A draw equal in value
/// to a mean already chosen is discarded from the pool and redrawn.
pub fn pick_initial_means<R: Rng + ?Sized>(
    data: &[Point],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Point>, KMeansError> {
    let mut pool: Vec<&Point> = data.iter().collect();
    let mut means: Vec<Point> = Vec::with_capacity(count);

    while means.len() < count {
        if pool.is_empty() {
            return Err(KMeansError::InsufficientDistinctPoints {
                requested: count,
                available: means.len(),
            });
        }

        let index = rng.gen_range(0..pool.len());
        let candidate = pool.remove(index);

        if means.iter().any(|existing| existing == candidate) {
            continue;
        }

        means.push(candidate.clone());
    }

    Ok(means)
}
