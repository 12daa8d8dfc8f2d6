//! Built-in deployment estimate dataset.
//!
//! Used by `deployment --demo` when no estimate file is at hand, and by tests.

use super::cleaner::clean_cost;
use super::schema::{CleanStats, CostRecord, CostTable};

const DEMO_DEPLOYMENTS: &[(&str, &str, &str)] = &[
    ("ERC20", "Ethereum", "$55.20"),
    ("ERC20", "Polygon", "$0.08"),
    ("ERC20", "Arbitrum", "$0.95"),
    ("ERC721", "Ethereum", "$120.50"),
    ("ERC721", "Polygon", "$0.15"),
    ("ERC721", "Arbitrum", "$1.50"),
    ("ERC1155", "Ethereum", "$150.75"),
    ("ERC1155", "Polygon", "$0.20"),
    ("ERC1155", "Arbitrum", "$2.10"),
    ("Proxy", "Ethereum", "$80.00"),
    ("Proxy", "Polygon", "$0.12"),
    ("Proxy", "Arbitrum", "$1.20"),
    ("Vesting", "Ethereum", "$95.30"),
    ("Vesting", "Polygon", "$0.14"),
    ("Vesting", "Arbitrum", "$1.35"),
    ("DAO", "Ethereum", "$250.00"),
    ("DAO", "Polygon", "$0.30"),
    ("DAO", "Arbitrum", "$3.00"),
];

/// Deployment estimates for six contracts on three networks
pub fn demo_deployment_table(deployment_sentinel: &str) -> CostTable {
    let records: Vec<CostRecord> = DEMO_DEPLOYMENTS
        .iter()
        .filter_map(|(contract, network, cost)| {
            clean_cost(cost)
                .map(|usd| CostRecord::new(*network, *contract, deployment_sentinel, usd))
        })
        .collect();

    let stats = CleanStats {
        total_rows: DEMO_DEPLOYMENTS.len(),
        malformed_rows: 0,
        invalid_costs: DEMO_DEPLOYMENTS.len() - records.len(),
    };

    CostTable::with_stats(records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Dimension;

    #[test]
    fn test_demo_table_is_complete() {
        let table = demo_deployment_table("deployment");
        assert_eq!(table.len(), 18);
        assert_eq!(table.clean_stats().dropped(), 0);
        assert_eq!(
            table.unique(Dimension::Network),
            vec!["Ethereum", "Polygon", "Arbitrum"]
        );
        assert!(table.records().iter().all(|r| r.is_deployment("deployment")));
    }
}
