//! Reporting of the statistics gathered by the search, as `{prefix} {name}={value}` lines.
mod statistic_logging;

pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;
