/// Install the process logger.
///
/// Logs go to standard error. `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    // A logger may already be installed when running under a test harness
    let _ = pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filter)
        .try_init();
}
