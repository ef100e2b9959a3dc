//! Tracing Setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

impl Environment {
    fn default_filter(self) -> &'static str {
        match self {
            Environment::Local => "api=debug,auth=debug,tower_http=debug",
            Environment::Prod => "api=info,auth=info,tower_http=info",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env.default_filter()));

    let registry = tracing_subscriber::registry().with(filter);

    match env {
        Environment::Local => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
        Environment::Prod => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}
