// src/logging.rs
use std::io::Write;

use chrono::Local;

use crate::config::Verbosity;

/// Install the process-wide logger. `RUST_LOG` overrides the verbosity flags.
pub fn init(verbosity: Verbosity) {
    let env = env_logger::Env::default().default_filter_or(verbosity.filter());
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(buf, "{} {}", Local::now().format("%Y-%m-%d %H:%M:%S,%3f"), record.args())
        })
        .try_init();
}
