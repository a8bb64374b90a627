//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays machine-readable JSON. The filter is
//! read from `MCX_LOG`, then `RUST_LOG`, and defaults to `warn`. `-v` raises
//! the default to `debug`.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("MCX_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(error = %e, "subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init(false);
        init(true);
        assert!(tracing::dispatcher::has_been_set());
    }
}
