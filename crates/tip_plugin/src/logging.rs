// crates/tip_plugin/src/logging.rs

//! Load-time log file. Written once at plugin load and on no other event;
//! not part of the functional contract, so nothing here can fail the load.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

pub const LOG_FILE_NAME: &str = "WeaponTipBridge.log";

/// Points the global `tracing` subscriber at a fresh log file under `dir`.
/// Returns false (and leaves logging disabled) if the host gave us no
/// directory, the file cannot be created, or a subscriber is already
/// installed.
pub fn init_logging(dir: Option<&Path>) -> bool {
    let Some(dir) = dir else {
        return false;
    };
    let Ok(file) = File::create(dir.join(LOG_FILE_NAME)) else {
        return false;
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
