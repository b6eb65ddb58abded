use serde::{Deserialize, Serialize};

/// A location in D-dimensional space
pub type Point = Vec<f64>;

/// A centroid together with the points assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Mean of the member points
    pub mean: Point,
    /// Member points in input order
    pub points: Vec<Point>,
    /// Sum of member distances to the mean
    pub total_error: f64,
}

impl Cluster {
    /// Empty cluster centred on `mean`
    pub fn new(mean: Point) -> Self {
        Self {
            mean,
            points: Vec::new(),
            total_error: 0.0,
        }
    }

    /// Cluster holding a single point that is also its own mean
    pub fn singleton(point: Point) -> Self {
        Self {
            mean: point.clone(),
            points: vec![point],
            total_error: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Outcome of one restart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    /// Number of assignment passes performed
    pub iterations: usize,
    /// False when an iteration cap stopped the loop before a fixed point
    pub converged: bool,
}

impl ClusterResult {
    /// Error summed across every cluster
    pub fn total_error(&self) -> f64 {
        self.clusters.iter().map(|c| c.total_error).sum()
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
}
