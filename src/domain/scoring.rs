//! Recency-weighted score aggregation
//!
//! Combines a salesperson's historical per-meeting metric scores into one
//! normalized snapshot. The five most recent meetings carry decreasing
//! weights, every older meeting a flat tail weight. Each metric divides by
//! the summed weights of only the meetings that actually reported it, so a
//! metric absent from some meetings is not diluted and every snapshot value
//! stays inside that metric's observed range.

use crate::domain::models::MeetingRecord;
use std::collections::HashMap;

/// Weights for positions 0..4 in the recency-sorted history
const RECENCY_WEIGHTS: [f64; 5] = [1.0, 0.8, 0.6, 0.4, 0.2];

/// Flat weight for every meeting beyond the fifth most recent
const TAIL_WEIGHT: f64 = 0.1;

/// Recency-decayed aggregate of per-metric scores
///
/// Derived, never persisted; metric order is the order of first appearance
/// across the recency-sorted records, which keeps iteration and tie-breaks
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedSnapshot {
    entries: Vec<(String, f64)>,
}

impl WeightedSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Weighted value for a metric, if it appeared in any record
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == metric)
            .map(|(_, value)| *value)
    }

    /// Iterate metrics in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Metric with the highest weighted value; first-encountered wins ties
    pub fn strongest(&self) -> Option<(&str, f64)> {
        self.entries.iter().fold(None, |best, (name, value)| match best {
            Some((_, best_value)) if *value <= best_value => best,
            _ => Some((name.as_str(), *value)),
        })
    }

    /// Metric with the lowest weighted value; first-encountered wins ties
    pub fn weakest(&self) -> Option<(&str, f64)> {
        self.entries.iter().fold(None, |worst, (name, value)| match worst {
            Some((_, worst_value)) if *value >= worst_value => worst,
            _ => Some((name.as_str(), *value)),
        })
    }
}

/// Aggregates one salesperson's meeting history into a weighted snapshot
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Aggregate meeting records into a recency-weighted snapshot
    ///
    /// Pure function of its input; empty history yields an empty snapshot.
    pub fn aggregate(records: &[MeetingRecord]) -> WeightedSnapshot {
        let mut ordered: Vec<&MeetingRecord> = records.iter().collect();
        ordered.sort_by(|a, b| b.meeting_date.cmp(&a.meeting_date));

        let mut order: Vec<String> = Vec::new();
        let mut sums: HashMap<String, (f64, f64)> = HashMap::new();

        for (position, record) in ordered.iter().enumerate() {
            let weight = RECENCY_WEIGHTS.get(position).copied().unwrap_or(TAIL_WEIGHT);
            for (metric, value) in &record.scoring {
                let entry = sums.entry(metric.clone()).or_insert_with(|| {
                    order.push(metric.clone());
                    (0.0, 0.0)
                });
                entry.0 += value * weight;
                entry.1 += weight;
            }
        }

        let entries = order
            .into_iter()
            .map(|metric| {
                let (weighted_sum, weight_used) = sums[&metric];
                (metric, round2(weighted_sum / weight_used))
            })
            .collect();

        WeightedSnapshot { entries }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AnalysisPayload, FollowupPlan, ObjectionCategory};
    use std::collections::BTreeMap;

    fn record(meeting_date: i64, scores: &[(&str, f64)]) -> MeetingRecord {
        let scoring: BTreeMap<String, f64> = scores
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        MeetingRecord {
            id: format!("m-{meeting_date}"),
            sales_id: "SLS-442".to_string(),
            meeting_date,
            analysis: AnalysisPayload::default(),
            documents: Vec::new(),
            followup: FollowupPlan {
                client_name: "العميل".to_string(),
                objection: ObjectionCategory::None,
                documents: Vec::new(),
                stages: Vec::new(),
            },
            scoring,
        }
    }

    #[test]
    fn empty_history_yields_empty_snapshot() {
        let snapshot = ScoreAggregator::aggregate(&[]);
        assert!(snapshot.is_empty());
        assert!(snapshot.strongest().is_none());
        assert!(snapshot.weakest().is_none());
    }

    #[test]
    fn three_meeting_quality_scenario() {
        // Weights 1.0, 0.8, 0.6 over descending recency:
        // (9*1.0 + 5*0.8 + 1*0.6) / (1.0 + 0.8 + 0.6) = 13.6 / 2.4
        let records = vec![
            record(3, &[("quality", 9.0)]),
            record(2, &[("quality", 5.0)]),
            record(1, &[("quality", 1.0)]),
        ];
        let snapshot = ScoreAggregator::aggregate(&records);
        assert_eq!(snapshot.get("quality"), Some(5.67));
    }

    #[test]
    fn input_order_does_not_matter() {
        let records = vec![
            record(1, &[("quality", 1.0)]),
            record(3, &[("quality", 9.0)]),
            record(2, &[("quality", 5.0)]),
        ];
        let snapshot = ScoreAggregator::aggregate(&records);
        assert_eq!(snapshot.get("quality"), Some(5.67));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records = vec![
            record(5, &[("rapport", 7.0), ("closing", 4.0)]),
            record(4, &[("rapport", 6.0)]),
        ];
        let first = ScoreAggregator::aggregate(&records);
        let second = ScoreAggregator::aggregate(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn values_stay_within_metric_extremes() {
        let records = vec![
            record(9, &[("listening", 8.0)]),
            record(8, &[("listening", 3.0)]),
            record(7, &[("listening", 6.0)]),
            record(6, &[("listening", 4.0)]),
            record(5, &[("listening", 7.0)]),
        ];
        let snapshot = ScoreAggregator::aggregate(&records);
        let value = snapshot.get("listening").unwrap();
        assert!((3.0..=8.0).contains(&value));
    }

    #[test]
    fn tail_weight_applies_beyond_five_meetings() {
        // Six identical scores: any weighting averages to the same value
        let records: Vec<_> = (1..=6).map(|t| record(t, &[("quality", 6.0)])).collect();
        let snapshot = ScoreAggregator::aggregate(&records);
        assert_eq!(snapshot.get("quality"), Some(6.0));
    }

    #[test]
    fn uneven_metric_sets_use_per_metric_weights() {
        // "closing" appears only in the second-most-recent meeting; its
        // weighted value is exactly that observation, not a diluted share
        // of the full history's weight.
        let records = vec![
            record(2, &[("rapport", 8.0)]),
            record(1, &[("rapport", 4.0), ("closing", 5.0)]),
        ];
        let snapshot = ScoreAggregator::aggregate(&records);
        assert_eq!(snapshot.get("closing"), Some(5.0));
        // rapport: (8*1.0 + 4*0.8) / 1.8 = 11.2 / 1.8
        assert_eq!(snapshot.get("rapport"), Some(6.22));
    }

    #[test]
    fn metric_order_is_first_appearance_across_sorted_records() {
        let records = vec![
            record(1, &[("closing", 2.0)]),
            record(2, &[("rapport", 9.0), ("listening", 5.0)]),
        ];
        let snapshot = ScoreAggregator::aggregate(&records);
        let names: Vec<&str> = snapshot.iter().map(|(name, _)| name).collect();
        // Most recent record first; its metrics iterate lexicographically
        assert_eq!(names, vec!["listening", "rapport", "closing"]);
    }

    #[test]
    fn strongest_and_weakest_break_ties_on_first_encountered() {
        let records = vec![record(1, &[("a", 5.0), ("b", 5.0), ("c", 3.0)])];
        let snapshot = ScoreAggregator::aggregate(&records);
        assert_eq!(snapshot.strongest(), Some(("a", 5.0)));
        assert_eq!(snapshot.weakest(), Some(("c", 3.0)));

        let even = ScoreAggregator::aggregate(&[record(1, &[("x", 4.0), ("y", 4.0)])]);
        assert_eq!(even.weakest(), Some(("x", 4.0)));
    }
}
