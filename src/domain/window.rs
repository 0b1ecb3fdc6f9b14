// Sliding window for the fuel-trim chart
use std::collections::VecDeque;

/// Number of samples the trim chart keeps.
pub const TRIM_WINDOW_SIZE: usize = 20;

/// Fixed-capacity FIFO of recent trim values. The window always holds
/// exactly `TRIM_WINDOW_SIZE` elements: it starts zero-seeded and every
/// push evicts the oldest value.
#[derive(Debug, Clone)]
pub struct TrimWindow {
    values: VecDeque<f64>,
}

impl TrimWindow {
    pub fn new() -> Self {
        Self {
            values: std::iter::repeat(0.0).take(TRIM_WINDOW_SIZE).collect(),
        }
    }

    /// Drop the oldest value and append `value` at the end.
    pub fn push(&mut self, value: f64) {
        self.values.pop_front();
        self.values.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Oldest-first copy of the window, for charting.
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

impl Default for TrimWindow {
    fn default() -> Self {
        Self::new()
    }
}
