use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AmountHistogram, DailyStats, MethodStats, StatsOverview, UNKNOWN_METHOD};
use crate::query::grouping::{OrderedGroups, Totals};
use crate::query::{BinCount, QueryEngine};

impl QueryEngine {
    pub fn overview(&self) -> StatsOverview {
        let records = self.snapshot.records();
        let totals: Totals = records.iter().collect();

        let mut methods = OrderedGroups::new();

        for record in records {
            methods.add(record.method.as_str(), record);
        }

        // Strictly greater keeps the first-seen method on ties.
        let mut most_common: Option<(&str, usize)> = None;

        for (method, group) in methods.into_groups() {
            if most_common.is_none_or(|(_, count)| group.count > count) {
                most_common = Some((method, group.count));
            }
        }

        StatsOverview {
            total_transactions: totals.count,
            fraud_rate: totals.fraud_rate(),
            avg_amount: totals.avg_amount(),
            most_common_method: most_common.map_or(UNKNOWN_METHOD, |(method, _)| method).to_string(),
            total_amount: totals.total_amount()
        }
    }

    /// Equal-width histogram of every amount in the dataset.
    ///
    /// Edges span `[min, max]`, widened by 0.5 either side when all amounts are equal and
    /// defaulting to `[0, 1]` for an empty dataset. Bins are half-open except the last,
    /// which also holds the maximum.
    pub fn amount_histogram(&self, bins: BinCount) -> AmountHistogram {
        let bins = bins.get();
        let amounts: Vec<f64> = self.snapshot.records().iter()
            .map(|record| record.amount)
            .filter(|amount| amount.is_finite())
            .collect();

        let (low, high) = amount_range(&amounts);
        let step = (high - low) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|index| if index == bins { high } else { low + step * index as f64 })
            .collect();

        let mut counts = vec![0usize; bins];

        for amount in amounts {
            counts[bin_index(amount, low, high, &edges)] += 1;
        }

        let bin_labels = edges.windows(2)
            .map(|edge| format!("{}-{}", edge[0].trunc() as i64, edge[1].trunc() as i64))
            .collect();

        AmountHistogram { bin_labels, counts }
    }

    /// Per-method aggregates, largest groups first.
    pub fn stats_by_method(&self) -> Vec<MethodStats> {
        let mut groups = OrderedGroups::new();

        for record in self.snapshot.records() {
            groups.add(record.method.as_str(), record);
        }

        let mut stats: Vec<MethodStats> = groups.into_groups().into_iter()
            .map(|(method, totals)| MethodStats {
                method: method.to_string(),
                count: totals.count,
                avg_amount: totals.avg_amount(),
                total_amount: totals.total_amount(),
                fraud_rate: totals.fraud_rate()
            })
            .collect();

        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }

    /// Per-day aggregates in ascending date order.
    ///
    /// A `limit` of 0 returns every day; otherwise only the most recent `limit` days are kept.
    pub fn daily_stats(&self, limit: usize) -> Vec<DailyStats> {
        let mut days: BTreeMap<NaiveDate, Totals> = BTreeMap::new();

        for record in self.snapshot.records() {
            days.entry(record.timestamp.date()).or_default().add(record);
        }

        let skip = if limit > 0 { days.len().saturating_sub(limit) } else { 0 };

        days.into_iter()
            .skip(skip)
            .map(|(date, totals)| DailyStats {
                date,
                count: totals.count,
                avg_amount: totals.avg_amount(),
                total_amount: totals.total_amount(),
                fraud_count: totals.fraud_count
            })
            .collect()
    }
}

fn amount_range(amounts: &[f64]) -> (f64, f64) {
    if amounts.is_empty() {
        return (0.0, 1.0);
    }

    let low = amounts.iter().copied().fold(f64::INFINITY, f64::min);
    let high = amounts.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if low == high { (low - 0.5, high + 0.5) } else { (low, high) }
}

fn bin_index(amount: f64, low: f64, high: f64, edges: &[f64]) -> usize {
    let last = edges.len() - 2;
    let scaled = (amount - low) * (last + 1) as f64 / (high - low);
    let mut index = (scaled.max(0.0) as usize).min(last);

    // Float error in the scaled index can land one bin off; settle it against the edges.
    if index > 0 && amount < edges[index] {
        index -= 1;
    } else if index < last && amount >= edges[index + 1] {
        index += 1;
    }

    index
}
