pub mod numeric;
pub mod types;

pub use numeric::{finite_or_zero, parse_lenient, round_to_unit, NumericInput};
pub use types::{
    Frequency, ImpactCategory, ImpactSet, Metric, MetricType, ProcessRecord, ValueSource,
};
