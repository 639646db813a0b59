use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Walks through the kplutl containers, printing every intermediate result.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(next_line_help = true)]
pub struct DemoArgs {
    /// Use verbose output (log level = 4).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the time elapsed since program start for each log message.
    #[arg(long)]
    pub log_timestamp: bool,

    /// Logging verbosity level (higher for more details)
    ///   0 - error
    ///   1 - warn + error
    ///   2 - info + warn + error
    ///   3 - debug + info + warn + error
    ///   4 - trace + debug + info + warn + error
    #[arg(long, default_value_t = 2, verbatim_doc_comment)]
    pub log_level: u8,

    #[command(subcommand)]
    pub command: DemoCommand,
}

/// The walkthrough to run.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    /// Vector and matrix construction and elementwise arithmetic.
    Basic,
    /// Dot and cross products, transforms, transposition and matrix products.
    Linalg,
    /// Transformation, camera and projection matrices.
    Graphics,
    /// Every walkthrough in order.
    All,
    /// Prints the compute backend and scalar type of this build.
    Info,
}

/// Initialises logging.
///
/// # Arguments
///
/// * `timestamp` - Base time of the elapsed-time prefix, none to omit it.
/// * `log_level` - Top level log level, see [`log_filter_from_level`].
pub fn setup_logging(timestamp: Option<std::time::SystemTime>, log_level: u8) {
    use std::io::Write;
    let mut builder = env_logger::builder();
    builder.format(move |buf, record| {
        let top_level_module = record
            .module_path()
            .and_then(|path| path.split("::").next())
            .unwrap_or("?");
        match timestamp {
            Some(timestamp) => {
                let duration = timestamp.elapsed().unwrap_or_default();
                let millis = duration.as_millis() % 1000;
                let seconds = duration.as_secs() % 60;
                let minutes = (duration.as_secs() / 60) % 60;
                let hours = (duration.as_secs() / 60) / 60;
                writeln!(
                    buf,
                    "{}:{}:{}.{:03} {:5} [{}]: {}",
                    hours,
                    minutes,
                    seconds,
                    millis,
                    record.level(),
                    top_level_module,
                    record.args()
                )
            },
            None => writeln!(
                buf,
                "{:5} [{}]: {}",
                record.level(),
                top_level_module,
                record.args()
            ),
        }
    });
    builder.filter_level(log_filter_from_level(log_level)).init();
}

/// Converts a numeric log level to a log filter.
pub fn log_filter_from_level(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
