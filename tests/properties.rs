use lloyd::{
    KMeans, KMeansConfig, Point, euclidean_distance, pick_best, run_restarts,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lloyd=debug")
        .with_test_writer()
        .try_init();
}

fn random_dataset(rng: &mut ChaCha8Rng, len: usize, dim: usize) -> Vec<Point> {
    (0..len)
        .map(|_| (0..dim).map(|_| rng.gen_range(-50.0..50.0)).collect())
        .collect()
}

#[test]
fn every_point_lands_in_exactly_one_cluster() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for case in 0..25u64 {
        let len = rng.gen_range(5..60);
        let dim = rng.gen_range(1..5);
        let k = rng.gen_range(1..8);
        let data = random_dataset(&mut rng, len, dim);

        let config = KMeansConfig::new().cluster_count(k).restarts(3).seed(case);
        let clusters = KMeans::new(config).run(&data)?;

        assert_eq!(clusters.len(), k.min(len));
        let assigned: usize = clusters.iter().map(|c| c.len()).sum();
        assert_eq!(assigned, len);

        for point in &data {
            let owners = clusters.iter().filter(|c| c.points.contains(point)).count();
            assert!(owners >= 1);
        }
    }

    Ok(())
}

#[test]
fn cluster_error_is_sum_of_member_distances() -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for case in 0..20u64 {
        let data = random_dataset(&mut rng, 40, 3);
        let config = KMeansConfig::new().cluster_count(5).restarts(2).seed(case);

        for cluster in KMeans::new(config).run(&data)? {
            assert!(cluster.total_error >= 0.0);
            let expected: f64 = cluster
                .points
                .iter()
                .map(|p| euclidean_distance(p, &cluster.mean))
                .sum();
            assert!((cluster.total_error - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }

    Ok(())
}

#[test]
fn best_restart_is_no_worse_than_any_restart() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let data = random_dataset(&mut rng, 80, 2);
    let config = KMeansConfig::new().cluster_count(6).restarts(12);

    let results = run_restarts(&data, &config, &mut rng)?;
    assert_eq!(results.len(), 12);
    assert!(results.iter().all(|r| r.converged));

    let errors: Vec<f64> = results.iter().map(|r| r.total_error()).collect();
    let best = pick_best(results).expect("at least one restart");
    for error in errors {
        assert!(best.total_error() <= error);
    }

    Ok(())
}

#[test]
fn small_inputs_fall_back_to_singletons() -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for len in 1..=6 {
        let data = random_dataset(&mut rng, len, 2);
        let config = KMeansConfig::new().cluster_count(6).seed(len as u64);
        let clusters = KMeans::new(config).run(&data)?;

        assert_eq!(clusters.len(), len);
        for (cluster, point) in clusters.iter().zip(&data) {
            assert_eq!(&cluster.mean, point);
            assert_eq!(cluster.points, vec![point.clone()]);
            assert_eq!(cluster.total_error, 0.0);
        }
    }

    Ok(())
}

#[test]
fn same_seed_same_clusters() -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let data = random_dataset(&mut rng, 100, 4);
    let kmeans = KMeans::new(KMeansConfig::new().cluster_count(7).restarts(4).seed(8));

    assert_eq!(kmeans.run(&data)?, kmeans.run(&data)?);

    Ok(())
}
