//! Rolling-window analytics over the consumed record stream.
//!
//! One bounded window per category (service name or weather metric), with
//! count/mean/trend statistics recomputed on every ingest and an anomaly flag
//! when a sample breaks away from recent history.

mod engine;
mod window;

pub use engine::{AnalyticsConfig, AnalyticsEngine, Anomaly, CategoryStats};
pub use window::{RollingWindow, Trend};
