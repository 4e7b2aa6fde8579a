use crate::functions::{self, DomainError};

/// Multiplier of `log10(n)` in Sturges' rule.
const STURGES_FACTOR: f64 = 3.22;

/// Half-open interval `[lower, upper)` grouping observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
}

impl Bin {
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x < self.upper
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn label(&self) -> String {
        format!("{:.1} ├ {:.1}", self.lower, self.upper)
    }
}

/// Number of classes suggested by Sturges' rule for `n` observations.
pub fn sturges_class_count(n: usize) -> f64 {
    1.0 + STURGES_FACTOR * (n as f64).log10()
}

/// Integral bin width covering `range` with the Sturges class count of `n` observations.
///
/// The width is never less than `1`, so a zero range still yields one bin.
pub fn bin_width(range: f64, n: usize) -> f64 {
    (range / sturges_class_count(n)).ceil().max(1.0)
}

/// Grouped frequency distribution table.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyDistribution {
    bins: Vec<Bin>,
    labels: Vec<String>,
    counts: Vec<usize>,
    midpoints: Vec<f64>,
    cumulative_counts: Vec<usize>,
    percentages: Vec<f64>,
    cumulative_percentages: Vec<f64>,
    weighted_mean: f64,
    bin_width: f64,
    total: usize,
}

impl FrequencyDistribution {
    /// Groups `xs` into bins sized by Sturges' rule and derives the table columns.
    pub fn compute(xs: &[f64]) -> Result<Self, DomainError> {
        functions::validate(xs)?;

        let (min, max) = xs
            .iter()
            .fold((std::f64::INFINITY, std::f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let width = bin_width(max - min, xs.len());
        let bins = partition(min, max, width)?;
        log::debug!(
            "range [{}, {}] of {} observations: width={}, bins={}",
            min,
            max,
            xs.len(),
            width,
            bins.len()
        );

        let counts = bins
            .iter()
            .map(|bin| xs.iter().filter(|&&x| bin.contains(x)).count())
            .collect::<Vec<_>>();
        let total = counts.iter().sum::<usize>();
        debug_assert_eq!(total, xs.len());

        let midpoints = bins.iter().map(Bin::midpoint).collect::<Vec<_>>();
        let cumulative_counts = counts
            .iter()
            .scan(0, |acc, &c| {
                *acc += c;
                Some(*acc)
            })
            .collect();
        let percentages = counts
            .iter()
            .map(|&c| c as f64 / total as f64 * 100.0)
            .collect::<Vec<_>>();
        let cumulative_percentages = percentages
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        let weighted_mean = counts
            .iter()
            .zip(midpoints.iter())
            .map(|(&c, &m)| c as f64 * m)
            .sum::<f64>()
            / total as f64;

        Ok(Self {
            labels: bins.iter().map(Bin::label).collect(),
            bins,
            counts,
            midpoints,
            cumulative_counts,
            percentages,
            cumulative_percentages,
            weighted_mean,
            bin_width: width,
            total,
        })
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Observations per bin (`Fi`).
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Bin midpoints (`xi`).
    pub fn midpoints(&self) -> &[f64] {
        &self.midpoints
    }

    /// Running sum of the counts (`Fac`).
    pub fn cumulative_counts(&self) -> &[usize] {
        &self.cumulative_counts
    }

    /// Counts as a percentage of the total (`Fi (%)`).
    pub fn percentages(&self) -> &[f64] {
        &self.percentages
    }

    /// Running sum of the percentages (`FacR (%)`).
    pub fn cumulative_percentages(&self) -> &[f64] {
        &self.cumulative_percentages
    }

    /// Mean of the bin midpoints weighted by the bin counts.
    pub fn weighted_mean(&self) -> f64 {
        self.weighted_mean
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

// Boundaries are accumulated from `min` in steps of `width` up to the first one strictly
// above `max`, so `max` always lands in the last bin.
fn partition(min: f64, max: f64, width: f64) -> Result<Vec<Bin>, DomainError> {
    let mut bounds = vec![min];
    let mut last = min;
    while last <= max {
        let next = last + width;
        if next <= last {
            return Err(DomainError::BinWidthUnderflow { start: min, width });
        }
        bounds.push(next);
        last = next;
    }
    Ok(bounds
        .windows(2)
        .map(|w| Bin {
            lower: w[0],
            upper: w[1],
        })
        .collect())
}
