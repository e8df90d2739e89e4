use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "oop_showcase=debug,info"
    } else {
        "oop_showcase=info"
    }
}

/// `RUST_LOG` wins over the `--verbose` default.
fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Logs go to stderr; stdout is reserved for the transcript so that
/// `--format json` output stays machine readable.
pub fn init_cli_logger(verbose: bool) {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(console)
        .init();
}
