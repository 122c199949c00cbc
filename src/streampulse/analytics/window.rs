use std::collections::VecDeque;

/// Direction of the recent samples relative to the older half of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Not enough history to say
    Unknown,
    Stable,
    Increasing,
    Decreasing,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Unknown => write!(f, "unknown"),
            Trend::Stable => write!(f, "stable"),
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
        }
    }
}

/// Half-mean differences below this are treated as no movement
const TREND_TOLERANCE: f64 = 1e-9;

/// A bounded buffer of the most recent samples for one category.
///
/// Memory is strictly bounded: once `capacity` samples are held, each push
/// evicts the oldest entry first (FIFO). Insertion order is preserved.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl RollingWindow {
    /// Creates a window holding at most `capacity` samples (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    fn evict_if_full(&mut self) {
        if self.is_full() {
            self.samples.pop_front();
        }
    }

    /// Appends a sample, evicting the oldest first when at capacity
    pub fn push(&mut self, sample: f64) {
        self.evict_if_full();
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained samples in arrival order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Arithmetic mean of the retained samples, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Compares the older half of the window against the newer half.
    ///
    /// Below `min_samples` (floored at 2) there is no basis for a direction
    /// and the result is [`Trend::Unknown`]. All-identical samples report
    /// [`Trend::Stable`].
    pub fn trend(&self, min_samples: usize) -> Trend {
        let len = self.samples.len();
        if len < min_samples.max(2) {
            return Trend::Unknown;
        }

        let mid = len / 2;
        let older: f64 = self.samples.iter().take(mid).sum::<f64>() / mid as f64;
        let newer: f64 = self.samples.iter().skip(mid).sum::<f64>() / (len - mid) as f64;

        let delta = newer - older;
        if delta.abs() <= TREND_TOLERANCE {
            Trend::Stable
        } else if delta > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    }
}
