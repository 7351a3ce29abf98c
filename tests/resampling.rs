//! End-to-end properties of ordering and bootstrap resampling: permutation
//! and monotonicity of computed orders, group-size invariants of both
//! sampling strategies, and seed-for-seed reproducibility.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use rocboot::{Direction, Predictor, ResampledPredictor};

/// Gaussian controls around 0.0 and cases shifted to 1.0, the usual
/// well-separated two-class fixture.
fn gaussian_predictor(seed: u64, n_controls: usize, n_cases: usize) -> Predictor {
    let mut rng = StdRng::seed_from_u64(seed);
    let controls: Vec<f64> = (0..n_controls)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    let cases: Vec<f64> = (0..n_cases)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut rng);
            z + 1.0
        })
        .collect();
    Predictor::new(controls, cases)
}

fn assert_is_permutation(order: &[usize], n_total: usize) {
    let mut seen = vec![false; n_total];
    assert_eq!(order.len(), n_total);
    for &idx in order {
        assert!(idx < n_total);
        assert!(!seen[idx], "index {idx} appears twice");
        seen[idx] = true;
    }
}

#[test]
fn order_is_a_monotone_permutation() {
    let p = gaussian_predictor(11, 40, 25);
    let order = p.get_order(Direction::Greater);
    assert_is_permutation(&order, p.n_total());
    for pair in order.windows(2) {
        assert!(p.get(pair[0]) <= p.get(pair[1]));
    }

    let reverse = p.get_order(Direction::Less);
    assert_is_permutation(&reverse, p.n_total());
    for pair in reverse.windows(2) {
        assert!(p.get(pair[0]) >= p.get(pair[1]));
    }
}

#[test]
fn directions_are_exact_reverses_on_distinct_values() {
    // Continuous draws, distinct almost surely.
    let p = gaussian_predictor(23, 30, 30);
    let ascending = p.get_order(Direction::Greater);
    let mut descending = p.get_order(Direction::Less);
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn worked_example_matches_the_documented_order() {
    let p = Predictor::new(vec![3.0, 1.0, 2.0], vec![5.0, 4.0]);
    assert_eq!(p.get_order(Direction::Greater), vec![1, 2, 0, 4, 3]);
}

#[test]
fn membership_predicates_agree_with_group_sizes() {
    let p = gaussian_predictor(3, 17, 5);
    for idx in 0..p.n_total() {
        assert_eq!(p.is_control(idx), idx < p.n_controls());
        assert_eq!(p.is_case(idx), !p.is_control(idx));
    }
}

#[test]
fn stratified_resampling_preserves_group_domains() {
    let p = gaussian_predictor(5, 20, 12);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let r = ResampledPredictor::stratified(&p, &mut rng).unwrap();
        assert_eq!(r.n_controls(), 20);
        assert_eq!(r.n_cases(), 12);
        assert!(r.controls_idx().iter().all(|&idx| p.is_control(idx)));
        assert!(r.cases_idx().iter().all(|&idx| p.is_case(idx)));
        // Every resampled value really comes from its own group.
        assert!(r.controls().iter().all(|v| p.controls().contains(v)));
        assert!(r.cases().iter().all(|v| p.cases().contains(v)));
    }
}

#[test]
fn non_stratified_resampling_preserves_group_sizes_only() {
    let p = gaussian_predictor(5, 20, 12);
    let pooled: Vec<f64> = p
        .controls()
        .iter()
        .chain(p.cases())
        .copied()
        .collect();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let r = ResampledPredictor::non_stratified(&p, &mut rng).unwrap();
        assert_eq!(r.n_controls(), 20);
        assert_eq!(r.n_cases(), 12);
        assert!(r.controls().iter().all(|v| pooled.contains(v)));
        assert!(r.cases().iter().all(|v| pooled.contains(v)));
    }
}

#[test]
fn resampled_orders_satisfy_the_base_contract() {
    let p = gaussian_predictor(31, 25, 25);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let r = ResampledPredictor::non_stratified(&p, &mut rng).unwrap();
        let order = r.get_order(Direction::Greater);
        assert_is_permutation(&order, r.n_total());
        for pair in order.windows(2) {
            assert!(r.get(pair[0]) <= r.get(pair[1]));
        }
    }
}

#[test]
fn repeated_reads_never_redraw() {
    let p = gaussian_predictor(13, 10, 10);
    let mut rng = StdRng::seed_from_u64(4);
    let r = ResampledPredictor::stratified(&p, &mut rng).unwrap();
    let first_controls = r.controls().to_vec();
    let first_cases = r.cases().to_vec();
    for _ in 0..5 {
        assert_eq!(r.controls(), first_controls.as_slice());
        assert_eq!(r.cases(), first_cases.as_slice());
    }
}

#[test]
fn resampling_is_reproducible_per_seed() {
    let p = gaussian_predictor(17, 50, 30);
    for seed in [0u64, 1, 42, u64::MAX] {
        let a = ResampledPredictor::stratified(&p, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = ResampledPredictor::stratified(&p, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(a.controls(), b.controls());
        assert_eq!(a.cases(), b.cases());

        let c = ResampledPredictor::non_stratified(&p, &mut StdRng::seed_from_u64(seed)).unwrap();
        let d = ResampledPredictor::non_stratified(&p, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(c.controls_idx(), d.controls_idx());
        assert_eq!(c.cases_idx(), d.cases_idx());
        assert_eq!(c.get_order(Direction::Greater), d.get_order(Direction::Greater));
    }
}

#[test]
fn one_predictor_feeds_many_resamplers_unchanged() {
    let p = gaussian_predictor(29, 15, 15);
    let before_controls = p.controls().to_vec();
    let before_cases = p.cases().to_vec();
    let mut rng = StdRng::seed_from_u64(2);
    let resamples: Vec<ResampledPredictor> = (0..10)
        .map(|draw| {
            if draw % 2 == 0 {
                ResampledPredictor::stratified(&p, &mut rng).unwrap()
            } else {
                ResampledPredictor::non_stratified(&p, &mut rng).unwrap()
            }
        })
        .collect();
    for r in &resamples {
        assert_eq!(r.source().controls(), before_controls.as_slice());
        assert_eq!(r.source().cases(), before_cases.as_slice());
    }
    assert_eq!(p.controls(), before_controls.as_slice());
    assert_eq!(p.cases(), before_cases.as_slice());
}
