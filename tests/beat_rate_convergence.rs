use rand::rngs::StdRng;
use rand::SeedableRng;

use cardiosynth::{KernelSet, StochasticModel};

fn count_beats(phase: &[f64]) -> usize {
    phase.windows(2).filter(|w| w[1] < w[0]).count()
}

fn model(rate_deviation: f64) -> StochasticModel {
    StochasticModel {
        kernels: KernelSet::new(vec![1.0], vec![0.1], vec![0.0]).unwrap(),
        sample_rate_hz: 500.0,
        heart_rate_hz: 1.2,
        initial_phase: 0.0,
        rate_deviation,
        amplitude_deviation: 0.1,
        width_deviation: 0.05,
        center_deviation: 0.05,
    }
}

#[test]
fn beat_count_tracks_the_nominal_rate() {
    // 10 s at 1.2 Hz: about 12 beats expected per realization; the
    // average over seeds must converge to within 15% of that.
    let m = model(0.2);
    let n = 5000;
    let expected = m.heart_rate_hz * n as f64 / m.sample_rate_hz;

    let mut total = 0usize;
    let seeds = 20u64;
    for seed in 0..seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        let (_, phase) = m.synthesize(n, &mut rng).unwrap();
        let beats = count_beats(&phase);
        total += beats;
        // No single realization should be wildly off either.
        assert!(
            (beats as f64) > expected * 0.7 && (beats as f64) < expected * 1.3,
            "seed {seed}: {beats} beats vs expected {expected}"
        );
    }
    let mean = total as f64 / seeds as f64;
    assert!(
        (mean - expected).abs() < 0.15 * expected,
        "mean {mean} vs expected {expected}"
    );
}

#[test]
fn beat_count_is_exact_without_rate_deviation() {
    let mut m = model(0.0);
    m.amplitude_deviation = 0.0;
    m.width_deviation = 0.0;
    m.center_deviation = 0.0;
    // f = 1.2 Hz at 500 Hz: rollovers every 416.67 samples starting
    // half a cycle in; 10 s holds exactly 12 of them.
    let mut rng = StdRng::seed_from_u64(0);
    let (_, phase) = m.synthesize(5000, &mut rng).unwrap();
    assert_eq!(count_beats(&phase), 12);
}

#[test]
fn doubling_the_rate_doubles_the_beats() {
    let slow = model(0.0);
    let mut fast = model(0.0);
    fast.heart_rate_hz = 2.4;

    let mut rng = StdRng::seed_from_u64(3);
    let (_, slow_phase) = slow.synthesize(5000, &mut rng).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let (_, fast_phase) = fast.synthesize(5000, &mut rng).unwrap();

    let s = count_beats(&slow_phase) as f64;
    let f = count_beats(&fast_phase) as f64;
    assert!((f / s - 2.0).abs() < 0.15, "slow {s}, fast {f}");
}
