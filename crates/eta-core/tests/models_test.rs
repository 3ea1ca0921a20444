use eta_core::models::{Observation, Prediction, Series, Snapshot, UnavailableReason};
use proptest::prelude::*;

fn obs(ts: f64, v: f64) -> Observation {
    Observation::new(ts, v)
}

#[test]
fn empty_snapshot_has_no_current_value() {
    let snapshot = Snapshot::empty(1_000.0);
    assert!(snapshot.series.is_empty());
    assert_eq!(snapshot.current_value(), None);
    assert_eq!(snapshot.last_observation_at(), None);
    assert_eq!(snapshot.prediction.target_timestamp(), None);
    assert_eq!(snapshot.age(1_030.0), 30.0);
}

#[test]
fn snapshot_reports_latest_observation() {
    let series = Series::from_observations([obs(60.0, 30.0), obs(0.0, 10.0), obs(30.0, 20.0)]);
    let snapshot = Snapshot::new(series, Prediction::default(), 61.0);
    assert_eq!(snapshot.current_value(), Some(30.0));
    assert_eq!(snapshot.last_observation_at(), Some(60.0));
}

#[test]
fn prediction_serializes_with_status_tag() {
    let projected = Prediction::Projected {
        target_timestamp: 270.0,
        slope: 1.0 / 3.0,
        intercept: 10.0,
        window: 3,
    };
    let json = serde_json::to_value(projected).unwrap();
    assert_eq!(json["status"], "projected");
    assert_eq!(json["target_timestamp"], 270.0);

    let absent = Prediction::unavailable(UnavailableReason::NonPositiveSlope);
    let json = serde_json::to_value(absent).unwrap();
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["reason"], "non_positive_slope");
    assert_eq!(absent.unavailable_reason(), Some(UnavailableReason::NonPositiveSlope));
}

#[test]
fn prediction_target_datetime() {
    let p = Prediction::Projected {
        target_timestamp: 1_764_011_426.0,
        slope: 0.01,
        intercept: 0.0,
        window: 2,
    };
    assert_eq!(p.target_datetime().unwrap().timestamp(), 1_764_011_426);
    assert!(Prediction::default().target_datetime().is_none());
}

fn arb_writes() -> impl Strategy<Value = Vec<(u16, f64)>> {
    // Small timestamp domain so repeats are common.
    prop::collection::vec((0u16..50, 0.0f64..100.0), 0..200)
}

proptest! {
    #[test]
    fn series_is_strictly_ascending(writes in arb_writes()) {
        let series: Series = writes.iter().map(|&(ts, v)| obs(ts as f64, v)).collect();
        for pair in series.as_slice().windows(2) {
            prop_assert!(pair[0].timestamp() < pair[1].timestamp());
        }
    }

    #[test]
    fn series_keeps_last_write_per_timestamp(writes in arb_writes()) {
        let series: Series = writes.iter().map(|&(ts, v)| obs(ts as f64, v)).collect();

        let mut expected = std::collections::BTreeMap::new();
        for &(ts, v) in &writes {
            expected.insert(ts, v);
        }
        prop_assert_eq!(series.len(), expected.len());
        for (o, (ts, v)) in series.iter().zip(expected.iter()) {
            prop_assert_eq!(o.timestamp(), *ts as f64);
            prop_assert_eq!(o.value(), *v);
        }
    }
}
