use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::ProgressSink;

/// Terminal progress bar fed by the pipeline.
pub struct BarProgress {
    bar: ProgressBar,
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{bar:40.green/white}] {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .progress_chars("=> "),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl ProgressSink for BarProgress {
    fn progress(&mut self, percent: f64, status: &str) {
        self.bar.set_position(percent.clamp(0.0, 100.0).round() as u64);
        self.bar.set_message(status.to_string());
    }
}
