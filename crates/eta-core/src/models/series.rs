use serde::{Deserialize, Serialize};

use super::Observation;

/// Deduplicated, time-ordered sequence of observations.
///
/// Invariants, enforced by every constructor:
/// - timestamps are unique; for repeated timestamps the last one given wins
/// - entries are sorted strictly ascending by timestamp
/// - observations with a non-finite timestamp are dropped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from observations in write order.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut all: Vec<Observation> = observations
            .into_iter()
            .filter(|o| o.timestamp().is_finite())
            // -0.0 and 0.0 are the same instant; fold them before sorting.
            .map(|o| {
                if o.timestamp() == 0.0 {
                    Observation::new(0.0, o.value())
                } else {
                    o
                }
            })
            .collect();
        // Stable sort: equal timestamps keep their write order.
        all.sort_by(|a, b| a.timestamp().total_cmp(&b.timestamp()));

        let mut deduped: Vec<Observation> = Vec::with_capacity(all.len());
        for obs in all {
            match deduped.last_mut() {
                Some(prev) if prev.timestamp() == obs.timestamp() => *prev = obs,
                _ => deduped.push(obs),
            }
        }
        Self {
            observations: deduped,
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// The most recent `size` observations (all of them if shorter).
    pub fn window(&self, size: usize) -> &[Observation] {
        let start = self.observations.len().saturating_sub(size);
        &self.observations[start..]
    }

    /// Timestamp of the newest observation.
    pub fn latest_timestamp(&self) -> Option<f64> {
        self.last().map(Observation::timestamp)
    }
}

impl From<Vec<Observation>> for Series {
    fn from(observations: Vec<Observation>) -> Self {
        Self::from_observations(observations)
    }
}

impl From<Series> for Vec<Observation> {
    fn from(series: Series) -> Self {
        series.observations
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::from_observations(iter)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
