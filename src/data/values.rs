use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::NaiveDate;

use crate::foundation::error::{CalheatError, CalheatResult};

/// Canonical day-key format for value maps.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Per-day values keyed by calendar date.
///
/// Keys are unique; the map is ordered by date regardless of insertion order.
/// Deserializes from a JSON object such as `{"2020-01-01": 5}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct DateValues {
    inner: BTreeMap<NaiveDate, f64>,
}

impl DateValues {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `YYYY-MM-DD` key.
    pub fn parse_key(key: &str) -> CalheatResult<NaiveDate> {
        NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
            .map_err(|e| CalheatError::validation(format!("invalid date key \"{key}\": {e}")))
    }

    /// Build from string-keyed pairs; a malformed key fails the whole map.
    ///
    /// When a date appears twice the last value wins.
    pub fn from_keyed<I, K>(pairs: I) -> CalheatResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut inner = BTreeMap::new();
        for (k, v) in pairs {
            inner.insert(Self::parse_key(k.as_ref())?, v);
        }
        Ok(Self { inner })
    }

    /// Insert or replace the value for `date`.
    pub fn insert(&mut self, date: NaiveDate, value: f64) -> Option<f64> {
        self.inner.insert(date, value)
    }

    /// Value recorded for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.inner.get(&date).copied()
    }

    /// Number of dated entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no day has a value.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.inner.iter().map(|(d, v)| (*d, *v))
    }

    /// All values, in date order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.inner.values().copied()
    }
}

impl FromIterator<(NaiveDate, f64)> for DateValues {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, f64)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DateValues {
    type Item = (NaiveDate, f64);
    type IntoIter = btree_map::IntoIter<NaiveDate, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl TryFrom<BTreeMap<String, f64>> for DateValues {
    type Error = CalheatError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_keyed(raw)
    }
}

impl From<DateValues> for BTreeMap<String, f64> {
    fn from(values: DateValues) -> Self {
        values
            .inner
            .into_iter()
            .map(|(d, v)| (d.format(DATE_KEY_FORMAT).to_string(), v))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/values.rs"]
mod tests;
