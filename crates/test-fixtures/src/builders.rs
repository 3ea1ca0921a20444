//! Series builders.

use eta_core::models::{Observation, Series};

/// Series from `(timestamp, value)` pairs, in write order.
pub fn series_of(points: &[(f64, f64)]) -> Series {
    points
        .iter()
        .map(|&(ts, v)| Observation::new(ts, v))
        .collect()
}

/// `count` evenly spaced points on `value = start_value + slope · (t − start_ts)`.
pub fn linear_series(start_ts: f64, step_secs: f64, start_value: f64, slope: f64, count: usize) -> Series {
    (0..count)
        .map(|i| {
            let dt = step_secs * i as f64;
            Observation::new(start_ts + dt, start_value + slope * dt)
        })
        .collect()
}
