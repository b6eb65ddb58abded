use crate::clusterer::{Cluster, Point, distance::euclidean_distance};

/// Partition `data` by nearest mean.
///
/// Returns one cluster per mean, in mean order. Ties go to the earlier mean and each
/// point's winning distance is added to its cluster's error.
pub fn assign_points(data: &[Point], means: &[Point]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = means.iter().cloned().map(Cluster::new).collect();
    if clusters.is_empty() {
        return clusters;
    }

    for point in data {
        let mut best_error = f64::INFINITY;
        let mut best_cluster = 0;

        for (c, mean) in means.iter().enumerate() {
            let error = euclidean_distance(point, mean);
            if error < best_error {
                best_error = error;
                best_cluster = c;
            }
        }

        let cluster = &mut clusters[best_cluster];
        cluster.points.push(point.clone());
        cluster.total_error += best_error;
    }

    clusters
}
