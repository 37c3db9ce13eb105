use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn setup_logging() {
	let main_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false);

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with(main_layer)
		.init()
}
