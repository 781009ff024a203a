//! Smoke test of the process-wide logger in debug mode
//!
//! Run with: cargo run --example testlog

use callsite_logger::global;
use callsite_logger::{critical, debug, error, info, warn};

fn main() -> callsite_logger::Result<()> {
    global::start_logging(true, true, None)?;
    debug!("debug: debug");
    info!("debug: info");
    warn!("debug: warning");
    error!("debug: error");
    critical!("debug: critical");
    global::stop_logging();
    Ok(())
}
