//! CSV loader for cost datasets.
//!
//! Reads a header row, resolves the configured column names to indices and
//! turns every data row into a `CostRecord`. Unreadable lines are skipped
//! and counted; cost fields go through `clean_cost`.

use super::cleaner::clean_cost;
use super::schema::{CleanStats, ColumnMapping, CostRecord, CostTable};
use crate::utils::error::LoadError;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Load a cost table from a CSV file
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `path` - CSV file with a header row
/// * `mapping` - Header names of the record fields
/// * `deployment_sentinel` - Function value used when the file has no function column
///
/// # Errors
/// * `LoadError::FileNotFound` - Path does not exist
/// * `LoadError::MissingColumn` - A mapped header is absent
/// * `LoadError::Csv` - Header row could not be read
pub fn load_cost_table(
    path: impl AsRef<Path>,
    mapping: &ColumnMapping,
    deployment_sentinel: &str,
) -> Result<CostTable, LoadError> {
    let path = path.as_ref();

    info!("Loading cost data from: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    read_cost_table(file, mapping, deployment_sentinel)
}

/// Read a cost table from any CSV source
///
/// **Public** - used by `load_cost_table` and by tests with in-memory data
pub fn read_cost_table<R: Read>(
    reader: R,
    mapping: &ColumnMapping,
    deployment_sentinel: &str,
) -> Result<CostTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndices::resolve(&headers, mapping)?;

    let mut records = Vec::new();
    let mut stats = CleanStats::default();

    for (line, result) in csv_reader.records().enumerate() {
        stats.total_rows += 1;

        let row = match result {
            Ok(row) if row.len() == headers.len() => row,
            Ok(row) => {
                warn!(
                    "Skipping row {}: expected {} fields, found {}",
                    line + 1,
                    headers.len(),
                    row.len()
                );
                stats.malformed_rows += 1;
                continue;
            }
            Err(e) => {
                warn!("Skipping unreadable row {}: {}", line + 1, e);
                stats.malformed_rows += 1;
                continue;
            }
        };

        let network = &row[columns.network];
        let contract = &row[columns.contract];
        let function = match columns.function {
            Some(idx) => &row[idx],
            None => deployment_sentinel,
        };

        if network.is_empty() || contract.is_empty() || function.is_empty() {
            debug!("Skipping row {}: blank key field", line + 1);
            stats.malformed_rows += 1;
            continue;
        }

        match clean_cost(&row[columns.cost]) {
            Some(cost_usd) => {
                records.push(CostRecord::new(network, contract, function, cost_usd));
            }
            None => {
                debug!(
                    "Dropping row {}: cost '{}' is not a number",
                    line + 1,
                    &row[columns.cost]
                );
                stats.invalid_costs += 1;
            }
        }
    }

    if stats.dropped() > 0 {
        warn!(
            "Dropped {} of {} rows ({} malformed, {} invalid cost)",
            stats.dropped(),
            stats.total_rows,
            stats.malformed_rows,
            stats.invalid_costs
        );
    }

    info!("Loaded {} cost records", records.len());

    Ok(CostTable::with_stats(records, stats))
}

/// Header positions of the mapped columns
struct ColumnIndices {
    network: usize,
    contract: usize,
    function: Option<usize>,
    cost: usize,
}

impl ColumnIndices {
    fn resolve(headers: &csv::StringRecord, mapping: &ColumnMapping) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            network: find(&mapping.network)?,
            contract: find(&mapping.contract)?,
            function: mapping.function.as_deref().map(find).transpose()?,
            cost: find(&mapping.cost)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT_CSV: &str = "\
Network,Contract,Function,usd avg
Arbitrum,Token,transfer,0.02
Polygon,Token,transfer,N/A
Arbitrum,Token,approve,$0.03
Polygon,Token,approve,
";

    #[test]
    fn test_read_drops_invalid_costs() {
        let table = read_cost_table(
            CONTRACT_CSV.as_bytes(),
            &ColumnMapping::function_costs(),
            "deployment",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].cost_usd, 0.03);
        assert_eq!(table.clean_stats().invalid_costs, 2);
        assert_eq!(table.clean_stats().total_rows, 4);
    }

    #[test]
    fn test_missing_column() {
        let result = read_cost_table(
            CONTRACT_CSV.as_bytes(),
            &ColumnMapping::gas_reporter(),
            "deployment",
        );
        assert!(matches!(result, Err(LoadError::MissingColumn(col)) if col == "Method"));
    }

    #[test]
    fn test_no_function_column_uses_sentinel() {
        let csv = "Contract,Network,Est. Deployment Cost (USD)\nERC20,Ethereum,$55.20\n";
        let table = read_cost_table(
            csv.as_bytes(),
            &ColumnMapping::deployment_estimates(),
            "deployment",
        )
        .unwrap();

        assert_eq!(table.records()[0].function, "deployment");
        assert_eq!(table.records()[0].cost_usd, 55.2);
    }

    #[test]
    fn test_ragged_rows_skipped() {
        let csv = "Network,Contract,Function,usd avg\nArbitrum,Token,transfer,0.02,extra\nArbitrum,Token\nPolygon,Token,mint,0.5\n";
        let table =
            read_cost_table(csv.as_bytes(), &ColumnMapping::function_costs(), "deployment")
                .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.clean_stats().malformed_rows, 2);
    }

    #[test]
    fn test_missing_file() {
        let result = load_cost_table(
            "definitely/not/here.csv",
            &ColumnMapping::function_costs(),
            "deployment",
        );
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
