//! tagger.rs - The protected-attribute tagging pass.
//!
//! Each record is classified and, if any category matched, copied into the
//! tagged subset under the first matching category in declaration order.
//! Only that category is counted for the record.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::category::ProtectedCategory;
use crate::category_match::{log_tagged_record_debug, MatchResult};
use crate::dataset::Record;
use crate::engine::TaggingEngine;

/// A record together with the single category it was attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRecord {
    pub record: Record,
    pub protected_category: ProtectedCategory,
    /// Full classification of the record's text, including categories that
    /// were not counted.
    pub matches: MatchResult,
}

/// Outcome of a tagging pass.
#[derive(Debug, Clone, Default)]
pub struct TagReport {
    /// Number of records scanned.
    pub total_records: usize,
    /// Tagged records in input order.
    pub tagged: Vec<TaggedRecord>,
    /// Per-category counts, ordered by declaration order. Every active
    /// category is present, possibly with zero.
    pub counts: BTreeMap<ProtectedCategory, usize>,
}

impl TagReport {
    pub fn tagged_count(&self) -> usize {
        self.tagged.len()
    }

    pub fn count_for(&self, category: ProtectedCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> TagSummary {
        TagSummary {
            total_records: self.total_records,
            tagged_records: self.tagged.len(),
            counts: self
                .counts
                .iter()
                .map(|(category, count)| CategoryCount {
                    category: *category,
                    count: *count,
                })
                .collect(),
        }
    }
}

/// Serializable count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: ProtectedCategory,
    pub count: usize,
}

/// Serializable totals of a `TagReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub total_records: usize,
    pub tagged_records: usize,
    pub counts: Vec<CategoryCount>,
}

/// Classifies `records` in order and builds the tagged subset and counts.
pub fn tag_all(engine: &dyn TaggingEngine, records: &[Record]) -> TagReport {
    let mut counts: BTreeMap<ProtectedCategory, usize> = engine
        .compiled_categories()
        .category_names()
        .into_iter()
        .map(|c| (c, 0))
        .collect();
    let mut tagged = Vec::new();

    for record in records {
        let matches = engine.classify(record.text());
        let Some(first) = matches.first_match() else {
            continue;
        };

        let discarded: Vec<ProtectedCategory> = matches
            .matched_categories()
            .into_iter()
            .filter(|c| *c != first)
            .collect();
        log_tagged_record_debug(module_path!(), record.row_number, first, &discarded);

        *counts.entry(first).or_insert(0) += 1;
        tagged.push(TaggedRecord {
            record: record.clone(),
            protected_category: first,
            matches,
        });
    }

    debug!("Tagging counts: {:?}", counts);
    info!("Tagged {} of {} record(s).", tagged.len(), records.len());

    TagReport {
        total_records: records.len(),
        tagged,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::regex_engine::RegexEngine;

    fn records(texts: &[&str]) -> Vec<Record> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Record::new(i + 1, vec![i.to_string(), t.to_string()], 1).unwrap())
            .collect()
    }

    #[test]
    fn first_category_wins() {
        let engine = RegexEngine::with_default_categories().unwrap();
        let report = tag_all(&engine, &records(&["she is christian"]));
        assert_eq!(report.tagged.len(), 1);
        assert_eq!(report.tagged[0].protected_category, ProtectedCategory::Gender);
        assert_eq!(report.count_for(ProtectedCategory::Gender), 1);
        assert_eq!(report.count_for(ProtectedCategory::Religion), 0);
        assert_eq!(
            report.tagged[0].matches.matched_categories(),
            vec![ProtectedCategory::Gender, ProtectedCategory::Religion]
        );
    }

    #[test]
    fn unmatched_rows_are_excluded_and_order_kept() {
        let engine = RegexEngine::with_default_categories().unwrap();
        let input = records(&[
            "a deaf musician",
            "the sky is blue today",
            "my Muslim neighbour",
            "nothing here",
            "a german car",
        ]);
        let report = tag_all(&engine, &input);
        let rows: Vec<usize> = report.tagged.iter().map(|t| t.record.row_number).collect();
        assert_eq!(rows, vec![1, 3, 5]);
        assert_eq!(report.total_records, 5);
        let total: usize = report.counts.values().sum();
        assert_eq!(total, report.tagged_count());
    }

    #[test]
    fn counts_include_zero_categories_in_order() {
        let engine = RegexEngine::with_default_categories().unwrap();
        let report = tag_all(&engine, &[]);
        let keys: Vec<_> = report.counts.keys().copied().collect();
        assert_eq!(keys, ProtectedCategory::ALL.to_vec());
        assert!(report.counts.values().all(|c| *c == 0));
    }

    #[test]
    fn summary_mirrors_report() {
        let engine = RegexEngine::with_default_categories().unwrap();
        let report = tag_all(&engine, &records(&["an elderly woman", "gay pride"]));
        let summary = report.summary();
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.tagged_records, 2);
        assert_eq!(summary.counts.len(), 7);
        assert_eq!(summary.counts[1].category, ProtectedCategory::Gender);
        assert_eq!(summary.counts[1].count, 1);
        assert_eq!(summary.counts[2].count, 1);
    }
}
