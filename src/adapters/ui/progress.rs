//! Busy indicator shown while an operation is Pending.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a spinner with `message`. Call `finish_and_clear` when the request settles.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
