//! Auto-test orchestrator: ranking, recommendation, and failure
//! tolerance.

use rand::SeedableRng;
use rand_distr::{Distribution as Sampler, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use distfit::{run_auto_test, Distribution, EngineError};

fn normal_draws(n: usize, seed: u64) -> Vec<f64> {
    let dist = Normal::new(0.0, 1.0).unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

fn uniform_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

#[test]
fn ranks_are_contiguous_and_scores_sorted() {
    let report = run_auto_test(&normal_draws(150, 21), 0.05, 10, None).unwrap();
    assert!(!report.results.is_empty());
    for (i, r) in report.results.iter().enumerate() {
        assert_eq!(r.rank, i + 1);
    }
    for w in report.results.windows(2) {
        assert!(w[0].combined_score >= w[1].combined_score);
    }
}

#[test]
fn sweep_covers_the_applicability_matrix() {
    // normal: 4 tests, uniform: 2, exponential: 2, poisson: 1
    let report = run_auto_test(&normal_draws(100, 22), 0.05, 10, None).unwrap();
    assert_eq!(report.results.len() + report.failed.len(), 9);

    let normal_count = report
        .results
        .iter()
        .filter(|r| r.result.distribution == Distribution::Normal)
        .count()
        + report
            .failed
            .iter()
            .filter(|r| r.distribution == Distribution::Normal)
            .count();
    assert_eq!(normal_count, 4);
}

#[test]
fn uniform_grid_recommends_uniform() {
    // A deterministic evenly spaced sample is as uniform as data gets
    let report = run_auto_test(&uniform_grid(100), 0.05, 10, Some(Distribution::Uniform)).unwrap();
    assert_eq!(report.recommended, Some(Distribution::Uniform));
    let acc = report.accuracy.unwrap();
    assert_eq!(acc.distribution, Distribution::Uniform);
    assert_eq!(acc.rank, 1);
    assert!(acc.p_value > 0.5, "p = {}", acc.p_value);
}

#[test]
fn accuracy_record_tracks_a_known_distribution() {
    let report =
        run_auto_test(&normal_draws(200, 23), 0.05, 10, Some(Distribution::Normal)).unwrap();
    let acc = report.accuracy.expect("normal pairs always produce results");
    assert_eq!(acc.distribution, Distribution::Normal);
    // The record points at the best rank any normal test achieved
    let best = report
        .results
        .iter()
        .find(|r| r.result.distribution == Distribution::Normal)
        .unwrap();
    assert_eq!(acc.rank, best.rank);
    assert_eq!(acc.p_value, best.result.p_value);
}

#[test]
fn degenerate_pairs_are_reported_not_fatal() {
    // Constant data collapses the Jarque-Bera moments
    let sample = vec![2.5; 30];
    let report = run_auto_test(&sample, 0.05, 10, None).unwrap();
    assert!(!report.failed.is_empty());
    for f in &report.failed {
        assert!(f.statistic.is_nan());
        assert!(f.p_value.is_nan());
        assert!(f.is_reject);
    }
    for r in &report.results {
        assert!(r.combined_score.is_finite());
    }
}

#[test]
fn combined_score_formula_is_applied() {
    let report = run_auto_test(&normal_draws(120, 24), 0.05, 10, None).unwrap();
    for r in &report.results {
        let bonus = if r.result.p_value > 0.1 { 0.05 } else { 0.0 };
        let expected = (r.result.p_value + bonus) * r.result.test.method_weight();
        assert!(
            (r.combined_score - expected).abs() < 1e-12,
            "score {} vs expected {expected}",
            r.combined_score
        );
    }
}

#[test]
fn boundary_validation_applies_to_the_whole_sweep() {
    assert!(matches!(
        run_auto_test(&[1.0, 2.0, 3.0], 0.05, 10, None),
        Err(EngineError::InsufficientSample { .. })
    ));
    assert!(matches!(
        run_auto_test(&uniform_grid(50), 0.05, 100, None),
        Err(EngineError::InvalidParameter { name: "num_bins", .. })
    ));
    assert!(matches!(
        run_auto_test(&uniform_grid(50), 1.2, 10, None),
        Err(EngineError::InvalidParameter { name: "alpha", .. })
    ));
}
