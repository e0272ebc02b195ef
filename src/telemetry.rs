//! Log subscriber for the CLI.
//!
//! Filter comes from `MENUSCAN_LOG` (same syntax as `RUST_LOG`), default
//! `warn`. Output goes to stderr so `--stdout` JSON stays clean.

use tracing_subscriber::EnvFilter;

pub const ENV_VAR: &str = "MENUSCAN_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}
