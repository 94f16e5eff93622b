//! Locale name tables
//!
//! A locale is a bundle of month/weekday name sources keyed by a language
//! name. Every field is optional; lookups fall back to the built-in `en`
//! tables per field, at lookup time rather than registration time.

use crate::snapshot::DateSnapshot;
use std::fmt;
use std::sync::Arc;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SHORT_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS_MIN_EN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A computed name source: a function from the snapshot to a name.
pub type NameFn = Arc<dyn Fn(&DateSnapshot) -> String + Send + Sync>;

/// One name table: a fixed ordered list (12 months / 7 weekdays) or a
/// function computing the name from the snapshot, for irregular locales.
#[derive(Clone)]
pub enum NameSource {
    Fixed(Vec<String>),
    Computed(NameFn),
}

impl NameSource {
    /// Builds a fixed list source from string slices.
    pub fn fixed(names: &[&str]) -> Self {
        NameSource::Fixed(names.iter().map(|s| s.to_string()).collect())
    }

    /// Builds a computed source from a function of the snapshot.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&DateSnapshot) -> String + Send + Sync + 'static,
    {
        NameSource::Computed(Arc::new(f))
    }

    fn get(&self, index: usize, snapshot: &DateSnapshot) -> Option<String> {
        match self {
            NameSource::Fixed(names) => names.get(index).cloned(),
            NameSource::Computed(f) => Some(f(snapshot)),
        }
    }
}

impl fmt::Debug for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSource::Fixed(names) => f.debug_tuple("Fixed").field(names).finish(),
            NameSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A locale definition. Missing fields resolve to the `en` names; a fixed
/// list shorter than the field's index range falls back the same way.
#[derive(Debug, Clone, Default)]
pub struct LocaleDefinition {
    pub months: Option<NameSource>,
    pub months_short: Option<NameSource>,
    pub weekdays: Option<NameSource>,
    pub weekdays_short: Option<NameSource>,
    pub weekdays_min: Option<NameSource>,
}

impl LocaleDefinition {
    /// The built-in English locale, pre-registered as `en`.
    pub fn en() -> Self {
        Self {
            months: Some(NameSource::fixed(&MONTHS_EN)),
            months_short: Some(NameSource::fixed(&MONTHS_SHORT_EN)),
            weekdays: Some(NameSource::fixed(&WEEKDAYS_EN)),
            weekdays_short: Some(NameSource::fixed(&WEEKDAYS_SHORT_EN)),
            weekdays_min: Some(NameSource::fixed(&WEEKDAYS_MIN_EN)),
        }
    }

    /// Full month name for the snapshot's month.
    pub fn months(&self, snapshot: &DateSnapshot) -> String {
        resolve(&self.months, (snapshot.month - 1) as usize, snapshot, &MONTHS_EN)
    }

    /// Short month name.
    pub fn months_short(&self, snapshot: &DateSnapshot) -> String {
        resolve(
            &self.months_short,
            (snapshot.month - 1) as usize,
            snapshot,
            &MONTHS_SHORT_EN,
        )
    }

    /// Full weekday name.
    pub fn weekdays(&self, snapshot: &DateSnapshot) -> String {
        resolve(&self.weekdays, snapshot.weekday as usize, snapshot, &WEEKDAYS_EN)
    }

    /// Short weekday name.
    pub fn weekdays_short(&self, snapshot: &DateSnapshot) -> String {
        resolve(
            &self.weekdays_short,
            snapshot.weekday as usize,
            snapshot,
            &WEEKDAYS_SHORT_EN,
        )
    }

    /// Min (two-letter) weekday name.
    pub fn weekdays_min(&self, snapshot: &DateSnapshot) -> String {
        resolve(
            &self.weekdays_min,
            snapshot.weekday as usize,
            snapshot,
            &WEEKDAYS_MIN_EN,
        )
    }
}

fn resolve(
    source: &Option<NameSource>,
    index: usize,
    snapshot: &DateSnapshot,
    defaults: &[&str],
) -> String {
    source
        .as_ref()
        .and_then(|s| s.get(index, snapshot))
        .unwrap_or_else(|| defaults[index].to_string())
}
