//! ERP Records
//!
//! One typed struct per ERP entity, grouped by business module. Each module
//! exposes a `collections()` table naming the output collection, its default
//! size and how to build it.
//!
//! Identifier fields that look like foreign keys (`customer_id` on an order,
//! `po_id` on a GRN) are drawn independently and do not reference other
//! collections.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

use super::errors::DomainError;
use super::services::Sampler;
use super::value_objects::Dataset;

pub mod finance;
pub mod gst;
pub mod hr;
pub mod logistics;
pub mod production;
pub mod purchase;
pub mod quality;
pub mod sales;
pub mod stores;

/// A record that can be drawn from a [`Sampler`]
pub trait Synthesize: Serialize + Sized {
    fn synthesize(s: &mut Sampler) -> Self;
}

/// Builds `count` serialized records
pub type BuildFn = fn(&mut Sampler, usize) -> Result<Vec<Value>, serde_json::Error>;

/// One output collection (= one JSON file)
#[derive(Clone, Copy)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub default_count: usize,
    build: BuildFn,
}

impl CollectionSpec {
    /// Collection of independently synthesized `T`
    pub fn of<T: Synthesize>(name: &'static str, default_count: usize) -> Self {
        Self {
            name,
            default_count,
            build: build_independent::<T>,
        }
    }

    /// Collection whose records depend on their position or on each other
    pub fn custom(name: &'static str, default_count: usize, build: BuildFn) -> Self {
        Self {
            name,
            default_count,
            build,
        }
    }

    pub fn generate(&self, s: &mut Sampler, count: usize) -> Result<Vec<Value>, DomainError> {
        Ok((self.build)(s, count)?)
    }
}

impl std::fmt::Debug for CollectionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionSpec")
            .field("name", &self.name)
            .field("default_count", &self.default_count)
            .finish()
    }
}

fn build_independent<T: Synthesize>(
    s: &mut Sampler,
    count: usize,
) -> Result<Vec<Value>, serde_json::Error> {
    (0..count)
        .map(|_| serde_json::to_value(T::synthesize(s)))
        .collect()
}

/// Serialize an already generated record list
pub(crate) fn to_values<T: Serialize>(records: Vec<T>) -> Result<Vec<Value>, serde_json::Error> {
    records.into_iter().map(serde_json::to_value).collect()
}

/// `count` typed records
pub fn generate<T: Synthesize>(s: &mut Sampler, count: usize) -> Vec<T> {
    (0..count).map(|_| T::synthesize(s)).collect()
}

/// Record collections belonging to `dataset`.
///
/// `Interaction` has none here; FAQs and conversations come from the
/// template generators.
pub fn collections(dataset: Dataset) -> Vec<CollectionSpec> {
    match dataset {
        Dataset::Sales => sales::collections(),
        Dataset::Purchase => purchase::collections(),
        Dataset::Finance => finance::collections(),
        Dataset::Gst => gst::collections(),
        Dataset::Hr => hr::collections(),
        Dataset::Logistics => logistics::collections(),
        Dataset::Production => production::collections(),
        Dataset::Quality => quality::collections(),
        Dataset::Stores => stores::collections(),
        Dataset::Interaction => Vec::new(),
    }
}

// ============================================
// Shared draws
// ============================================

const PAYMENT_TERMS: &[&str] = &["Net 30", "Net 45", "Net 60", "Immediate"];
const GST_RATES: &[u8] = &[0, 5, 12, 18, 28];

/// Within the last two years
fn last_two_years(s: &mut Sampler) -> DateTime<Utc> {
    s.days_ago(730)
}

/// Within the last year
fn last_year(s: &mut Sampler) -> DateTime<Utc> {
    s.days_ago(365)
}

/// Between the first of January of the anchor year and the anchor
fn this_year(s: &mut Sampler) -> DateTime<Utc> {
    let now = s.now();
    let start = Utc
        .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now);
    s.between(start, now)
}

/// `YYYY-MM` of an instant
fn period_of(date: DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}

/// `YYYY-MM` for `months_back` months before the anchor month
fn period_months_back(s: &Sampler, months_back: u32) -> String {
    period_of(month_start(s, months_back))
}

/// Midnight on the first day of the month `months_back` months before the anchor month
fn month_start(s: &Sampler, months_back: u32) -> DateTime<Utc> {
    let now = s.now();
    let total = now.year() * 12 + now.month0() as i32 - months_back as i32;
    Utc.with_ymd_and_hms(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Filing instant for a closed monthly period: within the first 20 days of
/// the following month, never after the anchor
fn filing_after(s: &mut Sampler, months_back: u32) -> DateTime<Utc> {
    let opens = month_start(s, months_back.saturating_sub(1));
    let closes = (opens + chrono::Duration::days(20)).min(s.now());
    s.between(opens, closes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sampler() -> Sampler {
        Sampler::seeded(1, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_period_months_back_wraps_years() {
        let s = sampler();
        assert_eq!(period_months_back(&s, 0), "2024-03");
        assert_eq!(period_months_back(&s, 2), "2024-01");
        assert_eq!(period_months_back(&s, 3), "2023-12");
        assert_eq!(period_months_back(&s, 15), "2022-12");
    }

    #[test]
    fn test_filing_follows_its_period() {
        let mut s = sampler();
        for back in 1..=12 {
            let filed = filing_after(&mut s, back);
            assert!(filed <= s.now());
            assert!(filed >= month_start(&s, back - 1));
        }
        assert_eq!(month_start(&s, 3).format("%Y-%m-%d").to_string(), "2023-12-01");
    }

    #[test]
    fn test_this_year_stays_in_anchor_year() {
        let mut s = sampler();
        for _ in 0..100 {
            let d = this_year(&mut s);
            assert_eq!(d.year(), 2024);
            assert!(d <= s.now());
        }
    }

    #[test]
    fn test_every_record_dataset_has_collections() {
        for dataset in Dataset::ALL {
            let specs = collections(dataset);
            assert_eq!(specs.is_empty(), dataset == Dataset::Interaction);
            for spec in specs {
                assert!(spec.default_count > 0, "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_collection_names_are_unique() {
        let mut names: Vec<&str> = Dataset::ALL
            .into_iter()
            .flat_map(collections)
            .map(|c| c.name)
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_every_collection_builds_objects() {
        let mut s = sampler();
        for dataset in Dataset::ALL {
            for spec in collections(dataset) {
                let values = spec.generate(&mut s, 3).unwrap();
                assert_eq!(values.len(), 3, "{}", spec.name);
                assert!(values.iter().all(Value::is_object), "{}", spec.name);
            }
        }
    }
}
