//! Tracing subscriber setup

use tracing::level_filters::LevelFilter;

/// Map `-q` / `-v` flags to a level filter
///
/// WARN by default, each `-v` raises one level, `-q` wins over everything.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }

    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global fmt subscriber writing to stderr
///
/// Stdout is reserved for tool results, so diagnostics never interleave
/// with lines a build system may parse. Calling this twice is harmless.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
