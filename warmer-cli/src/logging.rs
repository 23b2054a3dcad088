//! Logging setup shared by all commands

/// Default filter for a `-v` count
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the verbosity flag if set. Nothing is installed when
/// `quiet` is on. Calling this twice is harmless; the first logger wins.
pub fn init(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level_for(verbose)),
    )
    .format_timestamp(None)
    .try_init();
}
