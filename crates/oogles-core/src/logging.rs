//! Log output setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT_ONCE: Once = Once::new();

/// Install a formatting subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only the first call has an effect. If the application already installed a
/// global subscriber, this leaves it in place.
pub fn init_tracing() {
    TRACING_INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
