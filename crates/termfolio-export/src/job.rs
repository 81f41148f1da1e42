//! Background export jobs.
//!
//! Each job runs on its own thread with an owned copy of the profile and
//! reports once over a channel. Jobs are independent: nothing cancels or
//! merges them, and the last to finish owns `terminal.zip`.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use termfolio_profile::Profile;
use termfolio_types::error::{Result, TermfolioError};

use crate::bundle::Exporter;

/// Handle to a running export.
pub struct ExportJob {
    receiver: Receiver<Result<PathBuf>>,
}

impl ExportJob {
    /// Non-blocking check. `None` while the export is still running.
    pub fn try_poll(&self) -> Option<Result<PathBuf>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(worker_gone())),
        }
    }

    /// Block until the export finishes.
    pub fn wait(self) -> Result<PathBuf> {
        self.receiver.recv().unwrap_or_else(|_| Err(worker_gone()))
    }
}

fn worker_gone() -> TermfolioError {
    TermfolioError::Export("export worker exited without a result".into())
}

/// Start exporting `profile` on a worker thread.
pub fn spawn_export(exporter: Exporter, profile: Profile) -> ExportJob {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = exporter.export(&profile);
        if let Err(e) = &result {
            log::warn!("Export failed: {e}");
        }
        let _ = tx.send(result);
    });
    ExportJob { receiver: rx }
}
