//! Run-wide cancellation handle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag shared between the dispatcher and the
/// interrupt handler. One handle covers the whole run; tripping it kills
/// the subprocess currently in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Route Ctrl-C into this handle.
    ///
    /// The first interrupt trips the flag so the wait loop can kill the
    /// active child and unwind normally; a second interrupt force-exits.
    pub fn install_ctrlc_handler(&self) {
        let handle = self.clone();
        ctrlc::set_handler(move || {
            eprintln!("\nInterrupted");
            if handle.is_cancelled() {
                std::process::exit(130);
            }
            handle.cancel();
        })
        .ok();
    }
}
