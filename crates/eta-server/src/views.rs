//! HTML pages. The index is a template with `{{name}}` placeholders filled
//! from one snapshot; the live page is static and polls `/api/data`.

use eta_core::models::Snapshot;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

pub const LIVE_PAGE: &str = include_str!("../templates/live.html");

/// Chart data for the index page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Observation times in unix milliseconds.
    pub labels: Vec<f64>,
    pub values: Vec<f64>,
    pub start_ts: Option<f64>,
    pub prediction_ts: Option<f64>,
}

impl From<&Snapshot> for ChartData {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            labels: snapshot.series.iter().map(|o| o.timestamp() * 1000.0).collect(),
            values: snapshot.series.iter().map(|o| o.value()).collect(),
            start_ts: snapshot.series.first().map(|o| o.timestamp()),
            prediction_ts: snapshot.prediction.target_timestamp(),
        }
    }
}

pub fn render_index(snapshot: &Snapshot, target: f64) -> String {
    let chart = ChartData::from(snapshot);
    let current = snapshot
        .current_value()
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| "no data yet".to_string());
    let projection = snapshot
        .prediction
        .target_datetime()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "no projection yet".to_string());

    INDEX_TEMPLATE
        .replace("{{target}}", &format!("{target}%"))
        .replace("{{current}}", &current)
        .replace("{{projection}}", &projection)
        .replace("{{labels}}", &json(&chart.labels))
        .replace("{{values}}", &json(&chart.values))
        .replace("{{start_ts}}", &json(&chart.start_ts))
        .replace("{{prediction_ts}}", &json(&chart.prediction_ts))
}

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eta_core::models::{Observation, Prediction, Series};

    fn snapshot() -> Snapshot {
        let series = Series::from_observations([Observation::new(0.0, 10.0), Observation::new(30.0, 20.0)]);
        let prediction = Prediction::Projected {
            target_timestamp: 270.0,
            slope: 1.0 / 3.0,
            intercept: 10.0,
            window: 2,
        };
        Snapshot::new(series, prediction, 100.0)
    }

    #[test]
    fn chart_labels_are_milliseconds() {
        let chart = ChartData::from(&snapshot());
        assert_eq!(chart.labels, vec![0.0, 30_000.0]);
        assert_eq!(chart.values, vec![10.0, 20.0]);
        assert_eq!(chart.start_ts, Some(0.0));
        assert_eq!(chart.prediction_ts, Some(270.0));
    }

    #[test]
    fn index_fills_every_placeholder() {
        let html = render_index(&snapshot(), 100.0);
        assert!(!html.contains("{{"));
        assert!(html.contains("20%"));
        assert!(html.contains("1970-01-01 00:04:30 UTC"));
        assert!(html.contains("[0.0,30000.0]"));
    }

    #[test]
    fn index_names_the_configured_target() {
        let html = render_index(&snapshot(), 75.0);
        assert!(html.contains("Projected to reach 75%:"));
        assert!(!html.contains("reach 100%"));
    }

    #[test]
    fn empty_snapshot_renders_placeholders_as_null() {
        let html = render_index(&Snapshot::empty(5.0), 100.0);
        assert!(html.contains("no projection yet"));
        assert!(html.contains("no data yet"));
        assert!(html.contains("const START_TS = null;"));
    }
}
