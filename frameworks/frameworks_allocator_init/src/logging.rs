//! Logging Setup
//!
//! Installs `env_logger` as the `log` backend. Logs go to stderr so they
//! never interleave with command output on stdout. The level comes from
//! `RUST_LOG` and defaults to `warn`.

use env_logger::{Builder, Env, Target};

/// Install the logger; later calls are no-ops
pub fn init_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);
    // Tests may call this more than once
    let _ = builder.try_init();
}
