use std::fmt;
use std::time::Duration;

/// Metric name to value, in the order the metrics were collected.
///
/// Counters hold raw counts, clocks hold nanoseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    metrics: Vec<(String, i64)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a metric, replacing an earlier value with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        match self.metrics.iter_mut().find(|(it, _)| *it == name) {
            Some((_, old)) => *old = value,
            None => self.metrics.push((name, value)),
        }
    }

    pub(crate) fn insert_duration(&mut self, name: &str, value: Duration) {
        let nanos = i64::try_from(value.as_nanos()).unwrap_or(i64::MAX);
        self.insert(name, nanos);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.metrics
            .iter()
            .find(|(it, _)| it == name)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.metrics.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|(name, _)| name.as_str())
    }
}

/// One `name\tvalue` line per metric.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{}\t{}", name, value)?;
        }
        Ok(())
    }
}
