mod assign;
mod centroid;
mod config;
mod distance;
mod error;
mod init;
mod kmeans;
mod types;


pub use assign::assign_points;
pub use centroid::compute_mean;
pub use config::{Convergence, DEFAULT_CLUSTER_COUNT, DEFAULT_RESTARTS, KMeansConfig};
pub use distance::euclidean_distance;
pub use error::KMeansError;
pub use init::pick_initial_means;
pub use kmeans::{KMeans, cluster, converge, pick_best, run_restarts};
pub use types::{Cluster, ClusterResult, Point};
