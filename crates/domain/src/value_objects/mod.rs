pub mod metric_range;
pub mod percentage;
pub mod projection_result;
pub mod volume;

pub use metric_range::MetricRange;
pub use percentage::Percentage;
pub use projection_result::ProjectionResult;
pub use volume::{Metric, VolumeSnapshot};
