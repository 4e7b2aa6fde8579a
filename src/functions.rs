use ordered_float::OrderedFloat;
use std::collections::HashMap;
use thiserror::Error;

pub fn validate(xs: &[f64]) -> Result<(), DomainError> {
    if xs.is_empty() {
        return Err(DomainError::EmptyObservations);
    }
    if let Some((index, &value)) = xs.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(DomainError::NonFinite { index, value });
    }
    Ok(())
}

pub fn require_at_least(xs: &[f64], required: usize) -> Result<(), DomainError> {
    if xs.len() < required {
        return Err(DomainError::TooFewObservations {
            required,
            found: xs.len(),
        });
    }
    Ok(())
}

pub fn mean(xs: impl Iterator<Item = f64>) -> f64 {
    let mut count = 0;
    let mut total = 0.0;
    for x in xs {
        count += 1;
        total += x;
    }
    assert_ne!(count, 0);
    total / count as f64
}

pub fn geometric_mean(xs: &[f64]) -> Result<f64, DomainError> {
    if let Some(&value) = xs.iter().find(|&&x| x <= 0.0) {
        return Err(DomainError::NonPositive { value });
    }
    Ok(mean(xs.iter().map(|x| x.ln())).exp())
}

pub fn median(xs: &[f64]) -> f64 {
    let mut sorted = xs.to_owned();
    sorted.sort_by_key(|&x| OrderedFloat(x));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn sample_variance(xs: &[f64]) -> Result<f64, DomainError> {
    require_at_least(xs, 2)?;
    let m = mean(xs.iter().copied());
    let sum_sq = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    Ok(sum_sq / (xs.len() - 1) as f64)
}

/// Counts each distinct value, keeping the order in which values first appear.
pub fn histogram(xs: impl Iterator<Item = f64>) -> (Vec<(f64, usize)>, usize) {
    let mut slots = HashMap::<_, usize>::new();
    let mut histogram = Vec::<(f64, usize)>::new();
    let mut n = 0;
    for x in xs {
        n += 1;
        let slot = *slots.entry(OrderedFloat(x)).or_insert_with(|| {
            histogram.push((x, 0));
            histogram.len() - 1
        });
        histogram[slot].1 += 1;
    }
    (histogram, n)
}

/// Returns every value that attains the highest frequency, in order of first appearance.
pub fn multimode(xs: impl Iterator<Item = f64>) -> Vec<f64> {
    let (histogram, _) = histogram(xs);
    let top = histogram.iter().map(|t| t.1).max().unwrap_or(0);
    histogram
        .into_iter()
        .filter(|t| t.1 == top)
        .map(|t| t.0)
        .collect()
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("empty observation set")]
    EmptyObservations,

    #[error("observation #{index} is not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },

    #[error("at least {required} observations are required, but found {found}")]
    TooFewObservations { required: usize, found: usize },

    #[error("geometric mean is undefined for non-positive value {value}")]
    NonPositive { value: f64 },

    #[error("bin width {width} is below the float resolution at {start}")]
    BinWidthUnderflow { start: f64, width: f64 },
}
