//! Lloyd's k-means clustering with random restarts.
//!
//! ```
//! let data = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
//! let config = lloyd::KMeansConfig::new().cluster_count(2).restarts(10).seed(1);
//! let clusters = lloyd::KMeans::new(config).run(&data).unwrap();
//! assert_eq!(clusters.len(), 2);
//! ```

// Public API exports
pub mod clusterer;

// Re-export main types for convenience
pub use clusterer::{
    Cluster, ClusterResult, Convergence, DEFAULT_CLUSTER_COUNT, DEFAULT_RESTARTS, KMeans,
    KMeansConfig, KMeansError, Point, assign_points, cluster, compute_mean, converge,
    euclidean_distance, pick_best, pick_initial_means, run_restarts,
};
