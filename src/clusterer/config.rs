use crate::clusterer::KMeansError;
use serde::{Deserialize, Serialize};

/// Cluster count used when the caller does not pick one
pub const DEFAULT_CLUSTER_COUNT: usize = 10;

/// Number of independent random restarts used when the caller does not pick one
pub const DEFAULT_RESTARTS: usize = 10;

/// When a restart's convergence loop stops
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Convergence {
    /// Every centroid component is bit-identical to the previous pass
    #[default]
    Exact,
    /// Every centroid moved by at most this Euclidean distance
    Tolerance(f64),
}

impl Convergence {
    /// Compare two centroid lists of the same cardinality
    pub fn is_met(&self, previous: &[Vec<f64>], next: &[Vec<f64>]) -> bool {
        match *self {
            Convergence::Exact => previous
                .iter()
                .zip(next)
                .all(|(old, new)| old.iter().zip(new).all(|(a, b)| a == b)),
            Convergence::Tolerance(epsilon) => previous
                .iter()
                .zip(next)
                .all(|(old, new)| super::euclidean_distance(old, new) <= epsilon),
        }
    }
}

/// Settings for a k-means run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Number of clusters to produce
    pub cluster_count: usize,
    /// Independent random initializations; the lowest-error one wins
    pub restarts: usize,
    pub convergence: Convergence,
    /// Optional cap on assignment passes per restart
    pub max_iterations: Option<usize>,
    /// Seed for reproducible runs; entropy is used when absent
    pub seed: Option<u64>,
}

impl KMeansConfig {
    /// Create a config with the default cluster and restart counts
    pub fn new() -> Self {
        Self {
            cluster_count: DEFAULT_CLUSTER_COUNT,
            restarts: DEFAULT_RESTARTS,
            convergence: Convergence::Exact,
            max_iterations: None,
            seed: None,
        }
    }

    /// Set the number of clusters
    pub fn cluster_count(mut self, count: usize) -> Self {
        self.cluster_count = count;
        self
    }

    /// Set the number of random restarts
    pub fn restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Stop once every centroid moves by at most `epsilon`
    pub fn tolerance(mut self, epsilon: f64) -> Self {
        self.convergence = Convergence::Tolerance(epsilon);
        self
    }

    /// Cap the assignment passes of each restart; must be at least 1
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Fix the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings the driver cannot honour
    pub fn validate(&self) -> Result<(), KMeansError> {
        if self.cluster_count == 0 {
            return Err(KMeansError::InvalidConfig(
                "cluster_count must be at least 1".to_string(),
            ));
        }

        if self.restarts == 0 {
            return Err(KMeansError::InvalidConfig(
                "restarts must be at least 1".to_string(),
            ));
        }

        if self.max_iterations == Some(0) {
            return Err(KMeansError::InvalidConfig(
                "max_iterations must be at least 1 when set".to_string(),
            ));
        }

        if let Convergence::Tolerance(epsilon) = self.convergence {
            if !epsilon.is_finite() || epsilon < 0.0 {
                return Err(KMeansError::InvalidConfig(format!(
                    "tolerance must be a finite non-negative number, got {}",
                    epsilon
                )));
            }
        }

        Ok(())
    }
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self::new()
    }
}
