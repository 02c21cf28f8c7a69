use tracing_subscriber::EnvFilter;

/// Filter directives for diagnostic logging, e.g. `MODU_RANK_LOG=debug`.
pub const LOG_ENV: &str = "MODU_RANK_LOG";

/// Install a stderr subscriber when diagnostics are requested.
///
/// Without `--debug` or `MODU_RANK_LOG` nothing is installed and every
/// `tracing` event is dropped, keeping the hook silent.
pub fn init(debug: bool) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) if debug => EnvFilter::new("modu_rank_hook=debug"),
        Err(_) => return,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
