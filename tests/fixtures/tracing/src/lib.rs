//! Tracing subscriber fixture for integration tests.

use rstest::fixture;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` isn't set.
const DEFAULT_FILTER: &str = "dense_matrix=debug";

/// Marker proving the subscriber has been installed.
pub struct Tracing;

/// Installs a subscriber writing through the test harness, once per test binary.
#[fixture]
#[once]
pub fn tracing() -> Tracing {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();

    tracing_subscriber::registry().with(filter_layer).with(fmt_layer).init();

    Tracing
}
