//! Logging and in-process metrics for the tour catalog tools
//!
//! Logs go to stderr through `tracing`; counters and timings stay in memory
//! and can be dumped as JSON at the end of a run.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global metrics registry
static METRICS: Lazy<MetricsRegistry> = Lazy::new(MetricsRegistry::default);

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize logging with custom configuration
///
/// `RUST_LOG` takes precedence over `config.log_level`. Logs go to stderr so
/// they never mix with command output.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            ),
        )
    } else {
        tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .compact(),
            ),
        )
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// One JSON object per log line instead of the compact text format
    pub json: bool,
    pub show_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            show_target: false,
        }
    }
}

impl TelemetryConfig {
    /// Debug logging for the tour crates, warnings for everything else
    pub fn verbose() -> Self {
        Self {
            log_level: "warn,tour_catalog=debug,tour_search=debug,tour_core=debug"
                .to_string(),
            show_target: true,
            ..Self::default()
        }
    }

    /// Switch to JSON log lines
    pub fn with_json(self, json: bool) -> Self {
        Self { json, ..self }
    }
}

/// In-process counters and timings for one run
#[derive(Default)]
pub struct MetricsRegistry {
    counters: Mutex<BTreeMap<String, u64>>,
    timings: Mutex<BTreeMap<String, Vec<Duration>>>,
}

impl MetricsRegistry {
    /// Bump a counter by one
    pub fn increment(&self, name: &str) {
        self.add(name, 1);
    }

    /// Bump a counter by `value`
    pub fn add(&self, name: &str, value: u64) {
        if let Ok(mut counters) = self.counters.lock() {
            *counters.entry(name.to_string()).or_default() += value;
        }
    }

    /// Current value of a counter (0 if never bumped)
    pub fn counter(&self, name: &str) -> u64 {
        self.counters
            .lock()
            .ok()
            .and_then(|c| c.get(name).copied())
            .unwrap_or(0)
    }

    /// Record one duration under `name`
    pub fn record(&self, name: &str, duration: Duration) {
        if let Ok(mut timings) = self.timings.lock() {
            timings.entry(name.to_string()).or_default().push(duration);
        }
    }

    /// Summary of the durations recorded under `name`
    pub fn timing(&self, name: &str) -> Option<TimingSummary> {
        let timings = self.timings.lock().ok()?;
        timings.get(name).map(|d| TimingSummary::of(d))
    }

    /// Snapshot as JSON, keyed by metric name
    pub fn export_json(&self) -> serde_json::Value {
        let counters = self
            .counters
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default();

        let timings: BTreeMap<String, TimingSummary> = self
            .timings
            .lock()
            .map(|t| {
                t.iter()
                    .map(|(name, d)| (name.clone(), TimingSummary::of(d)))
                    .collect()
            })
            .unwrap_or_default();

        serde_json::json!({
            "session_id": session_id(),
            "counters": counters,
            "timings": timings,
        })
    }
}

/// Aggregate of recorded durations, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingSummary {
    pub count: usize,
    pub total_ms: f64,
    pub mean_ms: f64,
    pub max_ms: f64,
}

impl TimingSummary {
    fn of(durations: &[Duration]) -> Self {
        let millis = |d: &Duration| d.as_secs_f64() * 1000.0;
        let count = durations.len();
        let total_ms: f64 = durations.iter().map(millis).sum();
        let max_ms = durations.iter().map(millis).fold(0.0, f64::max);

        Self {
            count,
            total_ms,
            mean_ms: if count == 0 { 0.0 } else { total_ms / count as f64 },
            max_ms,
        }
    }
}

/// Get the global metrics registry
pub fn metrics() -> &'static MetricsRegistry {
    &METRICS
}

/// Measures one operation and records it on `stop` or drop, whichever comes first
pub struct Timer {
    name: &'static str,
    start: Instant,
    done: bool,
}

impl Timer {
    /// Start timing `name`
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
            done: false,
        }
    }

    /// Stop and record; returns the measured duration
    pub fn stop(mut self) -> Duration {
        self.finish()
    }

    fn finish(&mut self) -> Duration {
        let elapsed = self.start.elapsed();
        if !std::mem::replace(&mut self.done, true) {
            metrics().record(self.name, elapsed);
            tracing::debug!(metric = self.name, elapsed_us = elapsed.as_micros() as u64, "timed");
        }
        elapsed
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let registry = MetricsRegistry::default();
        registry.increment("searches");
        registry.increment("searches");
        registry.add("searches", 3);

        assert_eq!(registry.counter("searches"), 5);
        assert_eq!(registry.counter("missing"), 0);
    }

    #[test]
    fn test_timing_summary() {
        let durations: Vec<Duration> = (1..=4).map(Duration::from_millis).collect();
        let summary = TimingSummary::of(&durations);

        assert_eq!(summary.count, 4);
        assert!((summary.total_ms - 10.0).abs() < 1e-9);
        assert!((summary.mean_ms - 2.5).abs() < 1e-9);
        assert!((summary.max_ms - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_timing_summary() {
        assert_eq!(TimingSummary::of(&[]).mean_ms, 0.0);
    }

    #[test]
    fn test_timer_records_once() {
        let name = "test_timer_records_once";
        let timer = Timer::start(name);
        std::thread::sleep(Duration::from_millis(5));
        let elapsed = timer.stop();

        assert!(elapsed >= Duration::from_millis(5));
        assert_eq!(metrics().timing(name).unwrap().count, 1);
    }

    #[test]
    fn test_timer_records_on_drop() {
        let name = "test_timer_records_on_drop";
        {
            let _timer = Timer::start(name);
        }
        assert_eq!(metrics().timing(name).unwrap().count, 1);
    }

    #[test]
    fn test_export_json() {
        let registry = MetricsRegistry::default();
        registry.increment("searches");
        registry.record("search", Duration::from_millis(2));

        let json = registry.export_json();
        assert_eq!(json["counters"]["searches"], 1);
        assert_eq!(json["timings"]["search"]["count"], 1);
    }

    #[test]
    fn test_config_defaults_to_quiet_text() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(!config.json);
        assert!(!config.show_target);
    }

    #[test]
    fn test_verbose_config_keeps_json_choice() {
        let config = TelemetryConfig::verbose().with_json(true);
        assert!(config.json);
        assert!(config.show_target);
        assert!(config.log_level.contains("tour_search=debug"));
    }

    #[test]
    fn test_session_id_is_uuid() {
        assert!(Uuid::parse_str(session_id()).is_ok());
    }
}
