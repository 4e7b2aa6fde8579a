pub use self::frequency::{bin_width, sturges_class_count, Bin, FrequencyDistribution};
pub use self::functions::DomainError;
pub use self::observations::{InputError, Observations};
pub use self::statistics::{Mode, Statistics};

pub mod plot;
pub mod report;

mod frequency;
mod functions;
mod observations;
mod statistics;
