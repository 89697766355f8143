pub mod descriptive;
pub mod drawdown;
pub mod returns;

pub use descriptive::{mean, median, sample_std_dev};
pub use drawdown::max_drawdown_pct;
pub use returns::{GEOMEAN_RATIO_FLOOR, geometric_mean_return_pct, percent_return};
