use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Where and how statistics are written.
pub struct StatisticOptions {
    /// Printed in front of every statistic.
    prefix: &'static str,
    /// Printed once after a block of statistics, if set.
    after_statistics: Option<&'static str>,
    /// The casing applied to the names of the statistics, if set.
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl StatisticOptions {
    fn format_name(&self, name: impl Display) -> String {
        match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        }
    }
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("after_statistics", &self.after_statistics)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Enables the logging of statistics.
///
/// Until this is called, [`log_statistic`] does nothing. Only the first configuration takes
/// effect. Without a `writer`, statistics go to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            prefix,
            after_statistics: after,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Writes the line `{prefix} {name}={value}` if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = options.format_name(name);
        let prefix = options.prefix;
        let _ = writeln!(options.writer, "{prefix} {name}={value}");
    });
}

/// Writes the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(after) = options.after_statistics {
            let _ = writeln!(options.writer, "{after}");
        }
    });
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = lock.lock() {
            action(&mut options);
        }
    }
}
