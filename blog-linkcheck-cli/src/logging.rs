use tracing_subscriber::EnvFilter;

/// Default filter for a given number of `-v` flags.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set, so report
/// output on stdout is never mixed with diagnostics.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (e.g. when embedded); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
