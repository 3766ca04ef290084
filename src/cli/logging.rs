//! Log setup for the `teller` binary

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level selected by the `-v` count.
fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the event filter from `RUST_LOG`-style directives and the `-v` count.
///
/// Without `-v` the directives decide, falling back to `warn`. Any `-v`
/// sets the global level on top of them.
pub fn log_filter(verbose: u8, directives: Option<&str>) -> EnvFilter {
    let level = verbosity_level(verbose);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default());

    if verbose > 0 {
        filter.add_directive(level.into())
    } else {
        filter
    }
}

/// Install the stderr subscriber so conversion output on stdout stays clean.
pub fn init_logging(verbose: u8) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose, directives.as_deref()))
        .init();
}
