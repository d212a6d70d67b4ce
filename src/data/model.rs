use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const STELLAR_MASS: &str = "stellar_mass";
pub const GAS_METALLICITY: &str = "gas_metallicity";
pub const STAR_FORMATION_RATE: &str = "star_formation_rate";

// ---------------------------------------------------------------------------
// GalaxySample – one row of the snapshot table
// ---------------------------------------------------------------------------

/// A single galaxy observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalaxySample {
    /// Solar masses.
    pub stellar_mass: f64,
    /// Solar units.
    pub gas_metallicity: f64,
    /// Solar masses per year.
    pub star_formation_rate: f64,
}

// ---------------------------------------------------------------------------
// GalaxyTable – the complete loaded snapshot, column-oriented
// ---------------------------------------------------------------------------

/// The parsed snapshot as column arrays.
///
/// Every present column has the same length. Missing cells are stored as
/// `NaN`; nothing here checks that masses are positive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalaxyTable {
    pub stellar_mass: Vec<f64>,
    pub gas_metallicity: Vec<f64>,
    /// `None` when the source had no `star_formation_rate` column.
    pub star_formation_rate: Option<Vec<f64>>,
}

impl GalaxyTable {
    /// Build a table (with an SFR column) from row samples.
    pub fn from_samples(samples: &[GalaxySample]) -> Self {
        GalaxyTable {
            stellar_mass: samples.iter().map(|s| s.stellar_mass).collect(),
            gas_metallicity: samples.iter().map(|s| s.gas_metallicity).collect(),
            star_formation_rate: Some(samples.iter().map(|s| s.star_formation_rate).collect()),
        }
    }

    /// Number of galaxies (rows).
    pub fn len(&self) -> usize {
        self.stellar_mass.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.stellar_mass.is_empty()
    }

    pub fn has_sfr(&self) -> bool {
        self.star_formation_rate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_samples_keeps_row_order_in_every_column() {
        let samples = [
            GalaxySample { stellar_mass: 1e9, gas_metallicity: 0.3, star_formation_rate: 1.2 },
            GalaxySample { stellar_mass: 5e10, gas_metallicity: 0.6, star_formation_rate: 15.0 },
        ];
        let table = GalaxyTable::from_samples(&samples);

        assert_eq!(table.len(), 2);
        assert_eq!(table.stellar_mass, vec![1e9, 5e10]);
        assert_eq!(table.gas_metallicity, vec![0.3, 0.6]);
        assert_eq!(table.star_formation_rate, Some(vec![1.2, 15.0]));
    }

    #[test]
    fn default_table_is_empty_without_sfr() {
        let table = GalaxyTable::default();
        assert!(table.is_empty());
        assert!(!table.has_sfr());
    }
}
