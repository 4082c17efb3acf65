//! Logger setup for the log crate.
//!
//! Log records go to stderr so they never interleave with the command
//! protocol on stdout.

use std::io::Write;

use env_logger::{Builder, Env};

/// Initialize the logger. `RUST_LOG` wins over the configured `filter`.
pub fn init(filter: &str) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(filter));
    builder.format_timestamp(None).format(|buf, record| {
        writeln!(
            buf,
            "[{} {}:{}] {}",
            record.level(),
            record.file().unwrap_or("none"),
            record.line().unwrap_or(0),
            record.args()
        )
    });
    // A logger may already be installed (e.g. by a test harness).
    let _ = builder.try_init();
}
