use std::process;

use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

/// Log level comes from `DBSWITCH_LOG` (error/warn/info/debug/trace); unset
/// or unparsable means logging stays off.
fn setup_logger() {
    let level = std::env::var("DBSWITCH_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Off);
    if level == LevelFilter::Off {
        return;
    }
    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = SimpleLogger::init(level, config);
}

fn main() {
    dbswitch::env::load_env_file();
    setup_logger();
    process::exit(dbswitch::cli::run());
}
