//! Harvest run summary.

use std::fmt;

use crate::domain::entities::DownloadOutcome;

/// Counters describing a finished harvest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestReport {
    /// Guild IDs found in the guild list.
    pub guilds_listed: usize,
    /// Guilds whose detail was fetched and processed.
    pub guilds_processed: usize,
    /// Guilds skipped because their detail request was not ok.
    pub guilds_skipped: usize,
    /// Files fetched and written.
    pub saved: usize,
    /// Files left alone because they already existed.
    pub skipped: usize,
    /// Bytes written across all saved files.
    pub bytes_written: u64,
}

impl HarvestReport {
    /// Adds a download outcome to the counters.
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Skipped { .. } => self.skipped += 1,
            DownloadOutcome::Saved { bytes, .. } => {
                self.saved += 1;
                self.bytes_written += bytes;
            }
        }
    }

    /// Returns the number of assets handled.
    #[must_use]
    pub const fn assets(&self) -> usize {
        self.saved + self.skipped
    }
}

impl fmt::Display for HarvestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} guilds processed, {} files saved ({} bytes), {} already present",
            self.guilds_processed, self.guilds_listed, self.saved, self.bytes_written, self.skipped
        )
    }
}
