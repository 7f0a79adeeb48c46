//! Log output for the `sortid` binary.
//!
//! Identifiers are the program's output on stdout, so all logging goes to
//! stderr. The level is taken from `RUST_LOG` and defaults to `warn`; use
//! `RUST_LOG=sortid=debug` to see time-segment truncation events from the
//! library.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .try_init()?;
    Ok(())
}
