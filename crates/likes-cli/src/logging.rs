use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map the number of `-v` flags to a log level. Zero defers to `RUST_LOG`.
pub fn level_for(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install the global logger. Logs go to stderr so they never mix with command output.
pub fn init_logging(verbosity: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_for(verbosity) {
        builder.filter_level(level);
    }

    // A logger may already be installed when running under a test harness
    let _ = builder.format_timestamp(None).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), None);
        assert_eq!(level_for(1), Some(LevelFilter::Debug));
        assert_eq!(level_for(2), Some(LevelFilter::Trace));
        assert_eq!(level_for(9), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(1);
        init_logging(2);
    }
}
