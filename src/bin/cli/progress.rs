//! Progress bar for uploads.

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};
use std::io::Read;

/// Byte progress for a single transfer
pub struct TransferProgress {
    bar: ProgressBar,
}

impl TransferProgress {
    /// Creates a bar for `total` bytes; hidden when `quiet`
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        };

        Self { bar }
    }

    /// Sets the message
    pub fn set_message(&self, msg: impl Into<String>) {
        self.bar.set_message(msg.into());
    }

    /// Wraps a reader so reads advance the bar
    pub fn wrap_read<R: Read>(&self, reader: R) -> ProgressBarIter<R> {
        self.bar.wrap_read(reader)
    }

    /// Finishes the progress bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Leaves the bar on screen with a message
    pub fn abandon_with_message(&self, msg: impl Into<String>) {
        self.bar.abandon_with_message(msg.into());
    }
}
