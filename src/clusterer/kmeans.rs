use crate::clusterer::{
    assign::assign_points,
    centroid::compute_mean,
    config::KMeansConfig,
    error::KMeansError,
    init::pick_initial_means,
    types::{Cluster, ClusterResult, Point},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

/// Lloyd's k-means with best-of-N random restarts
#[derive(Debug, Clone, Default)]
pub struct KMeans {
    config: KMeansConfig,
}

impl KMeans {
    pub fn new(config: KMeansConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Cluster `data`, seeding from `config.seed` or OS entropy
    pub fn run(&self, data: &[Point]) -> Result<Vec<Cluster>, KMeansError> {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.run_with_rng(data, &mut rng)
    }

    /// Cluster `data` drawing initial means from `rng`
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        data: &[Point],
        rng: &mut R,
    ) -> Result<Vec<Cluster>, KMeansError> {
        if data.is_empty() {
            return Err(KMeansError::EmptyInput);
        }

        // Not enough points to partition: every point is its own cluster
        if data.len() <= self.config.cluster_count {
            debug!(
                points = data.len(),
                cluster_count = self.config.cluster_count,
                "too few points, returning one cluster per point"
            );
            return Ok(data.iter().cloned().map(Cluster::singleton).collect());
        }

        let results = run_restarts(data, &self.config, rng)?;
        let best = pick_best(results).ok_or_else(|| {
            KMeansError::InvalidConfig("restarts must be at least 1".to_string())
        })?;

        Ok(best.into_clusters())
    }
}

/// Cluster `data` into `cluster_count` groups, keeping the best of `restarts` attempts
pub fn cluster(
    data: &[Point],
    cluster_count: usize,
    restarts: usize,
) -> Result<Vec<Cluster>, KMeansError> {
    let config = KMeansConfig::new()
        .cluster_count(cluster_count)
        .restarts(restarts);
    KMeans::new(config).run(data)
}

/// Run every restart in order, each from a fresh random initialization
pub fn run_restarts<R: Rng + ?Sized>(
    data: &[Point],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<Vec<ClusterResult>, KMeansError> {
    config.validate()?;

    let mut results = Vec::with_capacity(config.restarts);
    for restart in 0..config.restarts {
        let means = pick_initial_means(data, config.cluster_count, rng)?;
        let result = converge(data, means, config);

        debug!(
            restart,
            iterations = result.iterations,
            converged = result.converged,
            total_error = result.total_error(),
            "restart finished"
        );
        results.push(result);
    }

    Ok(results)
}

/// Iterate assignment and mean updates from `means` until a fixed point
pub fn converge(data: &[Point], mut means: Vec<Point>, config: &KMeansConfig) -> ClusterResult {
    let mut iterations = 0;

    loop {
        iterations += 1;
        let clusters = assign_points(data, &means);

        // An empty cluster keeps its previous mean
        let next: Vec<Point> = clusters
            .iter()
            .map(|c| compute_mean(&c.points).unwrap_or_else(|| c.mean.clone()))
            .collect();

        let converged = config.convergence.is_met(&means, &next);
        trace!(iteration = iterations, converged, "assignment pass");

        if converged {
            return ClusterResult {
                clusters,
                iterations,
                converged: true,
            };
        }

        if config.max_iterations.is_some_and(|max| iterations >= max) {
            warn!(
                iterations,
                "iteration cap reached before centroids settled"
            );
            return ClusterResult {
                clusters,
                iterations,
                converged: false,
            };
        }

        means = next;
    }
}

/// Lowest total error wins; the earliest result wins ties.
///
/// A result with a NaN total error only survives when nothing comparable follows it.
pub fn pick_best(results: Vec<ClusterResult>) -> Option<ClusterResult> {
    let mut best: Option<(usize, ClusterResult)> = None;
    let mut best_error = f64::INFINITY;

    for (restart, result) in results.into_iter().enumerate() {
        let error = result.total_error();
        let replaces_nan = best_error.is_nan() && !error.is_nan();
        if best.is_none() || error < best_error || replaces_nan {
            trace!(restart, total_error = error, "new best restart");
            best_error = error;
            best = Some((restart, result));
        }
    }

    if let Some((restart, _)) = &best {
        debug!(restart = *restart, total_error = best_error, "picked best restart");
    }

    best.map(|(_, result)| result)
}
