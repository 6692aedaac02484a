use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        crate::utils::consts::LOG_LEVEL
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
