/// Receives progress updates during a run.
///
/// `percent` grows monotonically from 0 to 100 over one run.
pub trait ProgressSink: Send {
    fn progress(&mut self, percent: f64, status: &str);
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _percent: f64, _status: &str) {}
}
