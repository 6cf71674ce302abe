use {
    std::sync::Once,
    tracing_subscriber::{EnvFilter, filter::ParseError},
};

/// Initializes the global tracing subscriber.
///
/// `env_filter` has the same syntax as `RUST_LOG` (e.g.
/// `warn,equilibrium=debug`) and is rejected if it does not parse. Logs are
/// written to stderr so that command output on stdout stays machine readable.
/// Only the first successful call installs a subscriber.
pub fn initialize(env_filter: &str, use_json: bool) -> Result<(), ParseError> {
    let filter = EnvFilter::try_new(env_filter)?;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| set_tracing_subscriber(filter, use_json));
    Ok(())
}

fn set_tracing_subscriber(filter: EnvFilter, use_json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    // Another subscriber may already be installed by the embedding process.
    let _ = if use_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
