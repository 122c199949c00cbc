use std::collections::HashMap;

use crate::streampulse::analytics::window::{RollingWindow, Trend};
use crate::streampulse::records::Record;

/// Tuning knobs for the analytics engine
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Samples retained per category
    pub window_capacity: usize,
    /// Absolute deviation from the window mean that flags an anomaly
    pub anomaly_delta: f64,
    /// Samples required before a trend direction is reported
    pub min_trend_samples: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window_capacity: 5,
            anomaly_delta: 20.0,
            min_trend_samples: 2,
        }
    }
}

/// A sample that deviated from its category's recent history
#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    pub sample: f64,
    /// Window mean before this sample was admitted
    pub baseline_mean: f64,
    pub deviation: f64,
}

/// Statistics snapshot for one category, emitted after every ingest
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: String,
    /// Records ever ingested for this category, duplicates included
    pub count: u64,
    /// Samples currently retained in the rolling window
    pub window_len: usize,
    /// Mean over the retained window
    pub mean: f64,
    pub trend: Trend,
    pub anomaly: Option<Anomaly>,
}

impl std::fmt::Display for CategoryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "category={} count={} window={} mean={:.2} trend={}",
            self.category, self.count, self.window_len, self.mean, self.trend
        )?;
        if let Some(anomaly) = &self.anomaly {
            write!(
                f,
                " ANOMALY sample={:.2} baseline={:.2} deviation={:.2}",
                anomaly.sample, anomaly.baseline_mean, anomaly.deviation
            )?;
        }
        Ok(())
    }
}

struct CategoryWindow {
    window: RollingWindow,
    total: u64,
}

impl CategoryWindow {
    fn new(capacity: usize) -> Self {
        Self {
            window: RollingWindow::new(capacity),
            total: 0,
        }
    }
}

/// Per-category rolling windows with derived statistics.
///
/// The engine is an explicitly owned value: callers construct one, feed it
/// records, and read snapshots back. `ingest` is total: it never blocks and
/// never fails. Windows are created lazily on the first record of a category
/// and retained for the life of the engine; memory stays bounded by
/// construction.
///
/// Duplicate deliveries count as independent samples; the transport only
/// promises at-least-once, and for rolling statistics a repeated sample is an
/// accepted approximation rather than a correctness violation.
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
    categories: HashMap<String, CategoryWindow>,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            categories: HashMap::new(),
        }
    }

    /// Feed one record through the engine and get the category's fresh stats.
    ///
    /// The anomaly check compares the incoming sample against the window mean
    /// *before* the sample is admitted, so a spike is judged against
    /// undistorted history. The first sample of a category can never be
    /// anomalous.
    pub fn ingest(&mut self, record: &Record) -> CategoryStats {
        let category = record.category();
        let sample = record.sample();

        let capacity = self.config.window_capacity;
        let entry = self
            .categories
            .entry(category.to_string())
            .or_insert_with(|| CategoryWindow::new(capacity));

        let anomaly = entry.window.mean().and_then(|baseline| {
            let deviation = (sample - baseline).abs();
            if deviation > self.config.anomaly_delta {
                Some(Anomaly {
                    sample,
                    baseline_mean: baseline,
                    deviation,
                })
            } else {
                None
            }
        });

        entry.window.push(sample);
        entry.total += 1;

        CategoryStats {
            category: category.to_string(),
            count: entry.total,
            window_len: entry.window.len(),
            // The window was just pushed to, so a mean always exists
            mean: entry.window.mean().unwrap_or(sample),
            trend: entry.window.trend(self.config.min_trend_samples),
            anomaly,
        }
    }

    /// Total records ever ingested for a category (0 if unseen)
    pub fn category_count(&self, category: &str) -> u64 {
        self.categories.get(category).map_or(0, |c| c.total)
    }

    /// Current stats snapshot without ingesting (None if unseen)
    pub fn stats(&self, category: &str) -> Option<CategoryStats> {
        self.categories.get(category).map(|entry| CategoryStats {
            category: category.to_string(),
            count: entry.total,
            window_len: entry.window.len(),
            mean: entry.window.mean().unwrap_or(0.0),
            trend: entry.window.trend(self.config.min_trend_samples),
            anomaly: None,
        })
    }

    /// Categories seen so far, in no particular order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}
