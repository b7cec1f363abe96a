/// Initialize the logger with the specified verbosity level
///
/// `RUST_LOG` takes precedence when set. If the host application already
/// installed a logger, this is a no-op.
///
/// # Arguments
/// * `verbose` - Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
pub fn setup_logger(verbose: u8) {
    let env_filter = match verbose {
        0 => "release_version=warn",
        1 => "release_version=info",
        2 => "release_version=debug",
        _ => "release_version=trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(env_filter))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();
}
