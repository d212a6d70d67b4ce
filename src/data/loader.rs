use std::path::Path;

use anyhow::{Context, Result};

use super::model::{GalaxyTable, GAS_METALLICITY, STAR_FORMATION_RATE, STELLAR_MASS};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a galaxy snapshot from a CSV file.
///
/// Layout: header row with column names, then one galaxy per row.
/// `stellar_mass` and `gas_metallicity` are required, `star_formation_rate`
/// is picked up when present and any other column is ignored.
///
/// Empty cells load as `NaN`. A non-empty cell that does not parse as a
/// number fails the whole load.
pub fn load_csv(path: &Path) -> Result<GalaxyTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mass_idx = column_index(&headers, STELLAR_MASS)
        .with_context(|| format!("CSV missing '{STELLAR_MASS}' column"))?;
    let metal_idx = column_index(&headers, GAS_METALLICITY)
        .with_context(|| format!("CSV missing '{GAS_METALLICITY}' column"))?;
    let sfr_idx = column_index(&headers, STAR_FORMATION_RATE);

    let mut table = GalaxyTable {
        star_formation_rate: sfr_idx.map(|_| Vec::new()),
        ..GalaxyTable::default()
    };

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        table
            .stellar_mass
            .push(parse_cell(record.get(mass_idx), row_no, STELLAR_MASS)?);
        table
            .gas_metallicity
            .push(parse_cell(record.get(metal_idx), row_no, GAS_METALLICITY)?);
        if let (Some(idx), Some(column)) = (sfr_idx, table.star_formation_rate.as_mut()) {
            column.push(parse_cell(record.get(idx), row_no, STAR_FORMATION_RATE)?);
        }
    }

    log::debug!(
        "Parsed {} rows from {} (columns {:?})",
        table.len(),
        path.display(),
        headers
    );
    Ok(table)
}

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn parse_cell(cell: Option<&str>, row: usize, col: &str) -> Result<f64> {
    let s = cell.unwrap_or("");
    if s.is_empty() {
        return Ok(f64::NAN);
    }
    s.parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("galaxy_snapshot.csv");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn loads_all_three_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "stellar_mass,gas_metallicity,star_formation_rate\n\
             1e9,0.3,1.2\n\
             5e10,0.6,15.0\n\
             2e8,0.1,0.05\n",
        );

        let table = load_csv(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.stellar_mass, vec![1e9, 5e10, 2e8]);
        assert_eq!(table.gas_metallicity, vec![0.3, 0.6, 0.1]);
        assert_eq!(table.star_formation_rate, Some(vec![1.2, 15.0, 0.05]));
    }

    #[test]
    fn sfr_column_is_optional_and_extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "id,gas_metallicity,stellar_mass\n7,0.4,3e9\n8,0.5,4e9\n",
        );

        let table = load_csv(&path).unwrap();
        assert_eq!(table.stellar_mass, vec![3e9, 4e9]);
        assert_eq!(table.gas_metallicity, vec![0.4, 0.5]);
        assert!(table.star_formation_rate.is_none());
    }

    #[test]
    fn header_and_cells_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, " stellar_mass , gas_metallicity \n 1e10 , 0.2 \n");

        let table = load_csv(&path).unwrap();
        assert_eq!(table.stellar_mass, vec![1e10]);
        assert_eq!(table.gas_metallicity, vec![0.2]);
    }

    #[test]
    fn empty_cells_load_as_nan() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "stellar_mass,gas_metallicity\n,0.2\n1e9,\n");

        let table = load_csv(&path).unwrap();
        assert!(table.stellar_mass[0].is_nan());
        assert!(table.gas_metallicity[1].is_nan());
    }

    #[test]
    fn missing_required_column_is_named_in_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "stellar_mass,star_formation_rate\n1e9,1.0\n");

        let err = load_csv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("gas_metallicity"), "{err:#}");
    }

    #[test]
    fn unparsable_number_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "stellar_mass,gas_metallicity\n1e9,high\n");

        let err = load_csv(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("'high' is not a number"), "{msg}");
    }

    #[test]
    fn ragged_row_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "stellar_mass,gas_metallicity\n1e9,0.1\n2e9\n");

        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn missing_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let err = load_csv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }
}
