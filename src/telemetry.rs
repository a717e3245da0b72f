use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Install the diagnostic subscriber.
///
/// Stdout is reserved for the result line, so logs go to stderr and stay off
/// unless `RUST_LOG` asks for them.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    let installed = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    // A subscriber installed earlier, e.g. by an embedding test, keeps receiving events.
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping existing subscriber");
    }
}
