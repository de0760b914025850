use deviation::{
    histogram::{bin_count, y_axis_limit, Histogram},
    stats, InvalidInputError, Summary,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const EPSILON: f64 = 1e-9;

fn random_measurements(rng: &mut ChaCha8Rng, len: usize) -> Vec<f64> {
    let center = rng.gen_range(-100.0..100.0);
    let spread = rng.gen_range(0.01..10.0);
    (0..len)
        .map(|_| center + rng.gen_range(-1.0..1.0) * spread)
        .collect()
}

#[test]
fn mean_is_sum_over_count() {
    let mut rng = ChaCha8Rng::from_seed([0; 32]);
    for len in 1..200 {
        let data = random_measurements(&mut rng, len);
        let expected = data.iter().sum::<f64>() / len as f64;
        assert!((stats::mean(&data).unwrap() - expected).abs() < EPSILON);
    }
}

#[test]
fn deviation_is_non_negative() {
    let mut rng = ChaCha8Rng::from_seed([1; 32]);
    for len in 2..200 {
        let data = random_measurements(&mut rng, len);
        let mean = stats::mean(&data).unwrap();
        assert!(stats::deviation(&data, mean).unwrap() >= 0.0);
    }
}

#[test]
fn deviation_of_constant_sequence_is_zero() {
    let mut rng = ChaCha8Rng::from_seed([2; 32]);
    for len in 2..50 {
        // quarter steps keep the sum exact
        let value = rng.gen_range(-4000..4000) as f64 / 4.0;
        let data = vec![value; len];
        let mean = stats::mean(&data).unwrap();
        assert_eq!(mean, value);
        assert_eq!(stats::deviation(&data, mean).unwrap(), 0.0);
    }
}

#[test]
fn mean_deviation_shrinks_with_count() {
    let mut rng = ChaCha8Rng::from_seed([3; 32]);
    for _ in 0..20 {
        let deviation = rng.gen_range(0.001..100.0);
        let mut previous = f64::INFINITY;
        for count in 1..500 {
            let current = stats::mean_deviation(deviation, count).unwrap();
            assert!(current < previous);
            previous = current;
        }
    }
}

#[test]
fn operations_are_repeatable() {
    let mut rng = ChaCha8Rng::from_seed([4; 32]);
    let data = random_measurements(&mut rng, 64);

    let first = Summary::from_measurements(&data).unwrap();
    let second = Summary::from_measurements(&data).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        stats::deviation(&data, first.mean).unwrap(),
        stats::deviation(&data, first.mean).unwrap()
    );
    assert_eq!(Histogram::new(&data).unwrap(), Histogram::new(&data).unwrap());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(stats::mean(&[]), Err(InvalidInputError::Empty));
    assert!(matches!(
        stats::deviation(&[5.0], 5.0),
        Err(InvalidInputError::TooFewMeasurements { .. })
    ));
    assert_eq!(
        stats::mean_deviation(1.0, 0),
        Err(InvalidInputError::NonPositiveCount)
    );
}

#[test]
fn reference_scenario() {
    let summary = Summary::from_measurements(&deviation::REFERENCE_MEASUREMENTS).unwrap();

    assert_eq!(summary.count, 10);
    assert!((summary.mean - 1.201).abs() < 1e-3);
    assert!((summary.deviation - 0.0388).abs() < 1e-3);
    assert!((summary.mean_deviation - 0.01227).abs() < 1e-3);
}

#[test]
fn histogram_holds_every_measurement() {
    let mut rng = ChaCha8Rng::from_seed([5; 32]);
    for len in 1..100 {
        let data = random_measurements(&mut rng, len);
        let histogram = Histogram::new(&data).unwrap();

        assert_eq!(histogram.counts().len(), bin_count(len));
        assert_eq!(histogram.counts().iter().sum::<usize>(), len);
        assert!(histogram.edges().windows(2).all(|edge| edge[0] <= edge[1]));
        let last = bin_count(len) - 1;
        for (i, (lower, upper, count)) in histogram.bins().enumerate() {
            let inside = data
                .iter()
                .filter(|&&value| value >= lower && (value < upper || i == last))
                .count();
            assert_eq!(inside, count);
        }
    }
}

#[test]
fn y_axis_limit_never_clips() {
    for multiplier in 1..10 {
        for max_frequency in 0..500 {
            assert!(y_axis_limit(max_frequency, multiplier) > max_frequency);
        }
    }
}
