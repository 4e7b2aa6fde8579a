//! Properties that every frequency distribution and statistics summary must satisfy.

use freqstats::{bin_width, FrequencyDistribution, Mode, Observations, Statistics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 200;

fn random_observations(rng: &mut StdRng) -> Vec<f64> {
    let n = rng.gen_range(2usize, 500);
    let integral = rng.gen::<bool>();
    let offset = rng.gen_range(-1000.0, 1000.0);
    let scale = rng.gen_range(0.1, 500.0);
    (0..n)
        .map(|_| {
            let x = offset + rng.gen::<f64>() * scale;
            if integral {
                x.round()
            } else {
                x
            }
        })
        .collect()
}

fn min_max(xs: &[f64]) -> (f64, f64) {
    xs.iter()
        .fold((std::f64::INFINITY, std::f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

fn is_non_decreasing<T: PartialOrd>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn frequency_distribution_invariants_hold() -> Result<(), anyhow::Error> {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..TRIALS {
        let xs = random_observations(&mut rng);
        let n = xs.len();
        let (min, max) = min_max(&xs);
        let table = FrequencyDistribution::compute(&xs)?;
        let h = table.bin_width();

        assert_eq!(h, bin_width(max - min, n));
        assert!(h >= 1.0 && h.fract() == 0.0, "h={}", h);

        let bins = table.bins();
        assert_eq!(bins[0].lower, min);
        assert!(bins[bins.len() - 1].upper > max);
        assert!(bins.windows(2).all(|w| w[0].upper == w[1].lower));
        assert!(bins.iter().all(|b| b.upper > b.lower));

        assert_eq!(table.labels().len(), bins.len());
        assert_eq!(table.counts().len(), bins.len());
        assert_eq!(table.midpoints().len(), bins.len());
        assert_eq!(table.cumulative_counts().len(), bins.len());
        assert_eq!(table.percentages().len(), bins.len());
        assert_eq!(table.cumulative_percentages().len(), bins.len());

        assert_eq!(table.counts().iter().sum::<usize>(), n);
        assert_eq!(table.total(), n);
        let tolerance = 1e-6 * n as f64;
        assert!((table.percentages().iter().sum::<f64>() - 100.0).abs() < tolerance);

        assert!(is_non_decreasing(table.cumulative_counts()));
        assert_eq!(table.cumulative_counts().last(), Some(&n));
        assert!(is_non_decreasing(table.cumulative_percentages()));
        let last = table.cumulative_percentages()[bins.len() - 1];
        assert!((last - 100.0).abs() < tolerance);

        let wm = table.weighted_mean();
        assert!(min <= wm && wm < max + h, "{} not in [{}, {})", wm, min, max + h);

        assert_eq!(FrequencyDistribution::compute(&xs)?, table);
    }
    Ok(())
}

#[test]
fn statistics_invariants_hold() -> Result<(), anyhow::Error> {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..TRIALS {
        let xs = random_observations(&mut rng)
            .into_iter()
            .map(|x| x.abs() + 1.0)
            .collect::<Vec<_>>();
        let (min, max) = min_max(&xs);
        let stats = Statistics::compute(&xs)?;

        assert!(min <= stats.arithmetic_mean() && stats.arithmetic_mean() <= max);
        assert!(min <= stats.median() && stats.median() <= max);
        assert!(stats.geometric_mean() <= stats.arithmetic_mean() + 1e-9);
        assert!(stats.sample_variance() >= 0.0);
        assert!((stats.sample_stdev().powi(2) - stats.sample_variance()).abs() < 1e-6);
        if let Mode::Value(v) = stats.mode() {
            assert!(xs.contains(&v));
        }

        assert_eq!(Statistics::compute(&xs)?, stats);
    }
    Ok(())
}

#[test]
fn file_scenario_works() -> Result<(), anyhow::Error> {
    let observations = Observations::from_reader("1\n2\n2\n3\n4\n".as_bytes())?;
    let stats = Statistics::compute(observations.values())?;
    assert_eq!(format!("{:.1}", stats.arithmetic_mean()), "2.4");
    assert_eq!(stats.median(), 2.0);
    assert_eq!(stats.mode(), Mode::Value(2.0));
    assert_eq!(format!("{:.1}", stats.sample_variance()), "1.3");
    assert!((stats.geometric_mean() - 2.17).abs() < 0.01);

    let table = FrequencyDistribution::compute(observations.values())?;
    assert_eq!(table.counts(), [1, 2, 1, 1]);
    assert_eq!(format!("{:.1}", table.weighted_mean()), "2.9");
    Ok(())
}
