use crate::functions::{self, DomainError};
use std::fmt;

/// Mode classification of an observation set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Exactly one value attains the highest frequency.
    Value(f64),

    /// Every observation is distinct (amodal).
    NoUniqueMode,

    /// Several values share the highest frequency (multimodal).
    MultipleModes,
}

impl Mode {
    /// Classifies the mode of `xs`.
    ///
    /// Note that `NoUniqueMode` requires the multimode set to be as large as the observation
    /// set itself, so tied repeated values (e.g., `[1, 1, 2, 2]`) are `MultipleModes`.
    pub fn classify(xs: &[f64]) -> Self {
        let modes = functions::multimode(xs.iter().copied());
        if modes.len() == 1 && xs.len() > 1 {
            Self::Value(modes[0])
        } else if modes.len() == xs.len() {
            Self::NoUniqueMode
        } else {
            Self::MultipleModes
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{:.1}", v),
            Self::NoUniqueMode => write!(f, "no unique mode"),
            Self::MultipleModes => write!(f, "multiple modes"),
        }
    }
}

/// Descriptive statistics of an observation set.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    arithmetic_mean: f64,
    geometric_mean: f64,
    mode: Mode,
    median: f64,
    sample_stdev: f64,
    sample_variance: f64,
}

impl Statistics {
    /// Computes every statistic of `xs` at once.
    ///
    /// `xs` must hold at least two finite, strictly positive observations.
    pub fn compute(xs: &[f64]) -> Result<Self, DomainError> {
        functions::validate(xs)?;
        functions::require_at_least(xs, 2)?;

        let sample_variance = functions::sample_variance(xs)?;
        let stats = Self {
            arithmetic_mean: functions::mean(xs.iter().copied()),
            geometric_mean: functions::geometric_mean(xs)?,
            mode: Mode::classify(xs),
            median: functions::median(xs),
            sample_stdev: sample_variance.sqrt(),
            sample_variance,
        };
        log::debug!("statistics of {} observations: {:?}", xs.len(), stats);
        Ok(stats)
    }

    pub fn arithmetic_mean(&self) -> f64 {
        self.arithmetic_mean
    }

    pub fn geometric_mean(&self) -> f64 {
        self.geometric_mean
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn sample_stdev(&self) -> f64 {
        self.sample_stdev
    }

    pub fn sample_variance(&self) -> f64 {
        self.sample_variance
    }
}
