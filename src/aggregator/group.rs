//! Grouping of cost records along one or two dimensions.

use super::stats::Summary;
use crate::parser::schema::{CostTable, Dimension};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Label values identifying a group, one per grouping dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Label of the first grouping dimension
    pub fn first(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" / "))
    }
}

/// Statistics of one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub key: GroupKey,
    pub summary: Summary,
}

/// Group a table along `dimensions` and summarize each group
///
/// **Public** - main entry point for group aggregation
///
/// Groups come back in first-appearance order. Every group holds at least
/// one row, so an empty table yields an empty vector rather than NaN groups.
pub fn group_by(table: &CostTable, dimensions: &[Dimension]) -> Vec<GroupStats> {
    debug!(
        "Grouping {} records by {:?}",
        table.len(),
        dimensions
    );

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<f64>)> = Vec::new();

    for record in table.records() {
        let key = GroupKey::new(dimensions.iter().map(|d| record.label(*d)));
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record.cost_usd);
    }

    groups
        .into_iter()
        .filter_map(|(key, values)| {
            Summary::from_values(&values)
                .ok()
                .map(|summary| GroupStats { key, summary })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::CostRecord;

    #[test]
    fn test_group_by_network_mean() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "f", 10.0),
            CostRecord::new("netA", "cY", "f", 20.0),
            CostRecord::new("netB", "cX", "f", 5.0),
        ]);

        let groups = group_by(&table, &[Dimension::Network]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, GroupKey::new(["netA"]));
        assert_eq!(groups[0].summary.mean, 15.0);
        assert_eq!(groups[1].key, GroupKey::new(["netB"]));
        assert_eq!(groups[1].summary.mean, 5.0);
    }

    #[test]
    fn test_group_by_two_dimensions() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "mint", 1.0),
            CostRecord::new("netA", "cX", "mint", 3.0),
            CostRecord::new("netA", "cX", "burn", 2.0),
        ]);

        let groups = group_by(&table, &[Dimension::Function, Dimension::Network]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key.parts(), ["mint", "netA"]);
        assert_eq!(groups[0].summary.sum, 4.0);
        assert_eq!(groups[0].summary.count, 2);
        assert_eq!(groups[0].key.to_string(), "mint / netA");
    }

    #[test]
    fn test_group_by_empty_table() {
        let groups = group_by(&CostTable::default(), &[Dimension::Network]);
        assert!(groups.is_empty());
    }
}
