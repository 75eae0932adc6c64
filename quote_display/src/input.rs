//! Reading user refresh requests from stdin.
//!
//! This module provides a small helper that runs a background thread turning
//! every entered line into a refresh request on a channel, so the main event
//! loop can multiplex user input with source replies.
use std::io::{self, BufRead};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, error, info};

/// Marker message emitted for every line the user enters.
pub struct RefreshRequested;

/// Helper type for reading refresh triggers from stdin.
pub struct TriggerReader;

impl TriggerReader {
    /// Spawns the stdin reader thread.
    ///
    /// Any entered line requests a refresh, regardless of its content. The
    /// thread stops on EOF, on a read error, when the receiving side goes
    /// away, or when `shutdown` is set.
    pub fn start(tx: Sender<RefreshRequested>, shutdown: Arc<AtomicBool>) {
        info!("Trigger reader started. Press Enter for the next quote.");
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
                match line {
                    Ok(_) => {
                        debug!("Refresh requested from stdin");
                        if tx.send(RefreshRequested).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read from stdin: {}", e);
                        break;
                    }
                }
            }
            info!("Trigger reader stopping...");
        });
    }
}
