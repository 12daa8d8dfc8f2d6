//! Most and least expensive records, overall and per group.
//!
//! On exact ties the first record in table order wins.

use crate::parser::schema::{CostRecord, CostTable, Dimension};

/// The extreme record of one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExtreme {
    pub group: String,
    pub record: CostRecord,
}

pub fn most_expensive(table: &CostTable) -> Option<&CostRecord> {
    pick(table.records().iter(), |candidate, best| candidate > best)
}

pub fn least_expensive(table: &CostTable) -> Option<&CostRecord> {
    pick(table.records().iter(), |candidate, best| candidate < best)
}

/// Most expensive record of every group along `dimension`
pub fn most_expensive_per(table: &CostTable, dimension: Dimension) -> Vec<GroupExtreme> {
    per_group(table, dimension, most_expensive)
}

/// Cheapest record of every group along `dimension`
pub fn least_expensive_per(table: &CostTable, dimension: Dimension) -> Vec<GroupExtreme> {
    per_group(table, dimension, least_expensive)
}

fn pick<'a, I, F>(records: I, better: F) -> Option<&'a CostRecord>
where
    I: Iterator<Item = &'a CostRecord>,
    F: Fn(f64, f64) -> bool,
{
    records.fold(None, |best, record| match best {
        Some(current) if !better(record.cost_usd, current.cost_usd) => Some(current),
        _ => Some(record),
    })
}

fn per_group<F>(table: &CostTable, dimension: Dimension, select: F) -> Vec<GroupExtreme>
where
    F: Fn(&CostTable) -> Option<&CostRecord>,
{
    table
        .unique(dimension)
        .into_iter()
        .filter_map(|group| {
            let subset = table.matching(dimension, &group);
            select(&subset).cloned().map(|record| GroupExtreme { group, record })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostTable {
        CostTable::new(vec![
            CostRecord::new("Arbitrum", "Token", "transfer", 0.02),
            CostRecord::new("Polygon", "Token", "transfer", 0.01),
            CostRecord::new("Arbitrum", "Vault", "deposit", 0.50),
            CostRecord::new("Polygon", "Vault", "deposit", 0.50),
        ])
    }

    #[test]
    fn test_overall_extrema() {
        let table = sample();
        let most = most_expensive(&table).unwrap();
        let least = least_expensive(&table).unwrap();

        // Exact tie on 0.50: first row wins
        assert_eq!(most.network, "Arbitrum");
        assert_eq!(most.contract, "Vault");
        assert_eq!(least.network, "Polygon");
        assert_eq!(least.cost_usd, 0.01);
    }

    #[test]
    fn test_per_group_extrema() {
        let table = sample();
        let per_network = most_expensive_per(&table, Dimension::Network);

        assert_eq!(per_network.len(), 2);
        assert_eq!(per_network[0].group, "Arbitrum");
        assert_eq!(per_network[0].record.function, "deposit");
        assert_eq!(per_network[1].group, "Polygon");

        let cheapest = least_expensive_per(&table, Dimension::Contract);
        assert_eq!(cheapest[0].record.network, "Polygon");
        assert_eq!(cheapest[1].record.network, "Arbitrum");
    }

    #[test]
    fn test_empty_table_has_no_extrema() {
        let table = CostTable::default();
        assert!(most_expensive(&table).is_none());
        assert!(least_expensive(&table).is_none());
        assert!(most_expensive_per(&table, Dimension::Network).is_empty());
    }
}
