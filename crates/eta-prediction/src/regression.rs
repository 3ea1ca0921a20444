//! Ordinary least squares of value on timestamp.
//!
//! Computed about the means. The textbook form
//! `(n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` subtracts two numbers near 1e21 when
//! x is a unix timestamp and loses every significant digit; the centred form
//! is algebraically identical and stays exact to the data's own precision.

use eta_core::models::Observation;

/// Slope and intercept of `value = slope · timestamp + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub n: usize,
}

impl LinearFit {
    /// The x at which the line reaches `y`. Undefined for a zero slope.
    ///
    /// Solved about the mean point so large intercepts do not cancel.
    pub fn solve_for(&self, y: f64) -> f64 {
        self.mean_x + (y - self.mean_y) / self.slope
    }
}

/// Fit a line through `points`. `None` when fewer than two points are given
/// or every timestamp is identical.
pub fn fit(points: &[Observation]) -> Option<LinearFit> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean_x = points.iter().map(Observation::timestamp).sum::<f64>() / nf;
    let mean_y = points.iter().map(Observation::value).sum::<f64>() / nf;

    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), p| {
        let dx = p.timestamp() - mean_x;
        (sxx + dx * dx, sxy + dx * (p.value() - mean_y))
    });

    if sxx == 0.0 || !sxx.is_finite() {
        return None;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
        mean_x,
        mean_y,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Observation> {
        raw.iter().map(|&(t, v)| Observation::new(t, v)).collect()
    }

    #[test]
    fn exact_line() {
        let f = fit(&pts(&[(0.0, 10.0), (30.0, 20.0), (60.0, 30.0)])).unwrap();
        assert!((f.slope - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(f.intercept, 10.0);
        assert_eq!(f.solve_for(100.0), 270.0);
    }

    #[test]
    fn noisy_points_match_textbook_formula() {
        let p = pts(&[(1.0, 2.0), (2.0, 2.5), (4.0, 5.0), (7.0, 6.5)]);
        let f = fit(&p).unwrap();
        let n = 4.0;
        let sx: f64 = p.iter().map(|o| o.timestamp()).sum();
        let sy: f64 = p.iter().map(|o| o.value()).sum();
        let sxy: f64 = p.iter().map(|o| o.timestamp() * o.value()).sum();
        let sxx: f64 = p.iter().map(|o| o.timestamp() * o.timestamp()).sum();
        let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
        let intercept = (sy - slope * sx) / n;
        assert!((f.slope - slope).abs() < 1e-12);
        assert!((f.intercept - intercept).abs() < 1e-12);
    }

    #[test]
    fn stable_at_unix_magnitudes() {
        let base = 1_764_011_426.0;
        let p = pts(&[(base, 40.0), (base + 30.0, 40.5), (base + 60.0, 41.0)]);
        let f = fit(&p).unwrap();
        assert!((f.slope - 1.0 / 60.0).abs() < 1e-12);
        // 59 percentage points at 1/60 per second.
        assert!((f.solve_for(100.0) - (base + 60.0 + 59.0 * 60.0)).abs() < 1e-3);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(fit(&[]).is_none());
        assert!(fit(&pts(&[(5.0, 1.0)])).is_none());
        assert!(fit(&pts(&[(5.0, 1.0), (5.0, 2.0)])).is_none());
    }
}
