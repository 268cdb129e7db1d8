// ABOUTME: Ordered (label, upper bound) tables defining step classification functions
// ABOUTME: Implements the single "first bound exceeding the value wins" lookup used by every classifier

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

use crate::config::ConfigError;

/// One bucket of a cutoff table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cutoff<L> {
    /// Classification label awarded to values below `upper_bound`
    pub label: L,
    /// Exclusive upper bound of the bucket
    pub upper_bound: f64,
}

/// Ordered cutoff table
///
/// Invariants, checked by [`CutoffTable::new`]: at least one entry, every
/// bound finite, bounds strictly increasing, labels unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CutoffTable<L> {
    entries: Vec<Cutoff<L>>,
}

impl<L: PartialEq + fmt::Debug> CutoffTable<L> {
    /// Build a validated table from `(label, upper_bound)` pairs in ascending order
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming `table` if the table is empty, holds a
    /// non-finite bound, bounds do not strictly increase, or a label repeats.
    pub fn new(
        table: &str,
        entries: impl IntoIterator<Item = (L, f64)>,
    ) -> Result<Self, ConfigError> {
        let entries: Vec<Cutoff<L>> = entries
            .into_iter()
            .map(|(label, upper_bound)| Cutoff { label, upper_bound })
            .collect();

        if entries.is_empty() {
            return Err(ConfigError::EmptyTable(table.to_owned()));
        }

        for (index, entry) in entries.iter().enumerate() {
            if !entry.upper_bound.is_finite() {
                return Err(ConfigError::NonFiniteBound {
                    table: table.to_owned(),
                    label: format!("{:?}", entry.label),
                });
            }
            if entries[..index].iter().any(|prev| prev.label == entry.label) {
                return Err(ConfigError::DuplicateLabel {
                    table: table.to_owned(),
                    label: format!("{:?}", entry.label),
                });
            }
            if let Some(prev) = index.checked_sub(1).map(|i| &entries[i]) {
                if entry.upper_bound <= prev.upper_bound {
                    return Err(ConfigError::NonIncreasingBounds {
                        table: table.to_owned(),
                        previous: prev.upper_bound,
                        next: entry.upper_bound,
                    });
                }
            }
        }

        Ok(Self { entries })
    }
}

impl<L> CutoffTable<L> {
    /// Classify `value`: the label of the first entry whose bound exceeds it
    ///
    /// Comparison is strict (`value < upper_bound`), so a value equal to a
    /// bound falls into the next bucket. Returns `None` when no bound exceeds
    /// the value, including for NaN.
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<&L> {
        self.entries
            .iter()
            .find(|entry| value < entry.upper_bound)
            .map(|entry| &entry.label)
    }

    /// Entries in ascending bound order
    #[must_use]
    pub fn entries(&self) -> &[Cutoff<L>] {
        &self.entries
    }

    /// Upper bound of the last bucket; values at or above it are not covered
    #[must_use]
    pub fn coverage_limit(&self) -> f64 {
        self.entries
            .last()
            .map_or(f64::NEG_INFINITY, |entry| entry.upper_bound)
    }

    /// Labels in ascending bound order
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.entries.iter().map(|entry| &entry.label)
    }
}

/// `(label, bound)` pairs read from a JSON object in document order
///
/// Unvalidated; the configuration loader turns it into a [`CutoffTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEntries<L>(pub Vec<(L, f64)>);

impl<'de, L> Deserialize<'de> for OrderedEntries<L>
where
    L: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<L>(PhantomData<L>);

        impl<'de, L> Visitor<'de> for EntriesVisitor<L>
        where
            L: Deserialize<'de>,
        {
            type Value = OrderedEntries<L>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping classification labels to upper bounds")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(4));
                while let Some((label, bound)) = map.next_entry::<L, f64>()? {
                    entries.push((label, bound));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk_table() -> CutoffTable<String> {
        CutoffTable::new(
            "risk",
            [("low", 10.0), ("medium", 20.0), ("high", 30.0)]
                .map(|(label, bound)| (label.to_owned(), bound)),
        )
        .unwrap()
    }

    #[test]
    fn test_first_exceeding_bound_wins() {
        let table = risk_table();
        assert_eq!(table.classify(0.0).unwrap(), "low");
        assert_eq!(table.classify(9.99).unwrap(), "low");
        assert_eq!(table.classify(15.0).unwrap(), "medium");
        assert_eq!(table.classify(29.0).unwrap(), "high");
    }

    #[test]
    fn test_bound_itself_belongs_to_next_bucket() {
        let table = risk_table();
        assert_eq!(table.classify(10.0).unwrap(), "medium");
        assert_eq!(table.classify(20.0).unwrap(), "high");
        assert!(table.classify(30.0).is_none());
    }

    #[test]
    fn test_values_beyond_coverage_are_unclassified() {
        let table = risk_table();
        assert!(table.classify(35.0).is_none());
        assert!(table.classify(f64::NAN).is_none());
        assert!((table.coverage_limit() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let table = risk_table();
        let rank = |value: f64| {
            table
                .classify(value)
                .and_then(|label| table.labels().position(|l| l == label))
        };

        let mut previous = 0;
        let mut value = -5.0;
        while value < table.coverage_limit() {
            let current = rank(value).unwrap();
            assert!(current >= previous, "bucket decreased at {value}");
            previous = current;
            value += 0.25;
        }
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = CutoffTable::<String>::new("bmi_cutoffs", Vec::new());
        assert!(matches!(result, Err(ConfigError::EmptyTable(name)) if name == "bmi_cutoffs"));
    }

    #[test]
    fn test_rejects_non_increasing_bounds() {
        let result = CutoffTable::new("t", [("a", 10.0), ("b", 10.0)]);
        assert!(matches!(
            result,
            Err(ConfigError::NonIncreasingBounds { .. })
        ));

        let result = CutoffTable::new("t", [("a", 10.0), ("b", 5.0)]);
        assert!(matches!(
            result,
            Err(ConfigError::NonIncreasingBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_labels_and_non_finite_bounds() {
        assert!(matches!(
            CutoffTable::new("t", [("a", 1.0), ("a", 2.0)]),
            Err(ConfigError::DuplicateLabel { .. })
        ));
        assert!(matches!(
            CutoffTable::new("t", [("a", f64::INFINITY)]),
            Err(ConfigError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_ordered_entries_keep_document_order() {
        let entries: OrderedEntries<String> =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let labels: Vec<&str> = entries.0.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["z", "a", "m"]);
    }
}
