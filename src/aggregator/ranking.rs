//! Stable ascending ranking of groups (cheapest first).

use super::group::{GroupKey, GroupStats};
use super::stats::Metric;
use log::debug;

/// A ranked group
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGroup {
    /// 1-based rank, 1 = cheapest
    pub rank: usize,
    pub key: GroupKey,
    pub value: f64,
}

/// Result of ranking groups by a metric
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub metric: Option<Metric>,

    /// Ranked groups, ascending by value
    pub entries: Vec<RankedGroup>,

    /// Groups whose metric is undefined (e.g. std dev of a single row)
    pub unranked: Vec<GroupKey>,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cheapest(&self) -> Option<&RankedGroup> {
        self.entries.first()
    }

    pub fn most_expensive(&self) -> Option<&RankedGroup> {
        self.entries.last()
    }
}

/// Rank groups by `metric`, cheapest first
///
/// **Public** - used by every summary that lists groups in cost order
///
/// The sort is stable: groups with equal values keep their input order.
/// Ranks 1..=N are assigned exactly once each.
pub fn rank_groups(groups: &[GroupStats], metric: Metric) -> Ranking {
    let mut unranked = Vec::new();
    let mut scored: Vec<(GroupKey, f64)> = Vec::with_capacity(groups.len());

    for group in groups {
        match group.summary.metric(metric) {
            Some(value) => scored.push((group.key.clone(), value)),
            None => unranked.push(group.key.clone()),
        }
    }

    // slice::sort_by is stable
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    debug!(
        "Ranked {} groups by {} ({} unranked)",
        scored.len(),
        metric,
        unranked.len()
    );

    Ranking {
        metric: Some(metric),
        entries: scored
            .into_iter()
            .enumerate()
            .map(|(i, (key, value))| RankedGroup {
                rank: i + 1,
                key,
                value,
            })
            .collect(),
        unranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::group::group_by;
    use crate::parser::schema::{CostRecord, CostTable, Dimension};

    #[test]
    fn test_rank_by_mean() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "f", 10.0),
            CostRecord::new("netA", "cY", "f", 20.0),
            CostRecord::new("netB", "cX", "f", 5.0),
        ]);

        let ranking = rank_groups(&group_by(&table, &[Dimension::Network]), Metric::Mean);

        assert_eq!(ranking.entries.len(), 2);
        assert_eq!(ranking.entries[0].rank, 1);
        assert_eq!(ranking.entries[0].key.first(), "netB");
        assert_eq!(ranking.entries[1].rank, 2);
        assert_eq!(ranking.entries[1].key.first(), "netA");
        assert_eq!(ranking.entries[1].value, 15.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = CostTable::new(vec![
            CostRecord::new("c", "x", "f", 1.0),
            CostRecord::new("a", "x", "f", 1.0),
            CostRecord::new("b", "x", "f", 1.0),
        ]);

        let ranking = rank_groups(&group_by(&table, &[Dimension::Network]), Metric::Sum);
        let order: Vec<&str> = ranking.entries.iter().map(|e| e.key.first()).collect();

        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_undefined_metric_is_unranked() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "f", 1.0),
            CostRecord::new("netA", "cY", "f", 3.0),
            CostRecord::new("netB", "cX", "f", 5.0),
        ]);

        let ranking = rank_groups(&group_by(&table, &[Dimension::Network]), Metric::StdDev);

        assert_eq!(ranking.entries.len(), 1);
        assert_eq!(ranking.unranked, vec![GroupKey::new(["netB"])]);
    }

    #[test]
    fn test_empty_ranking() {
        let ranking = rank_groups(&[], Metric::Mean);
        assert!(ranking.is_empty());
        assert!(ranking.cheapest().is_none());
    }
}
