use super::model::GalaxyTable;

// ---------------------------------------------------------------------------
// Plottable rows
// ---------------------------------------------------------------------------

/// Whether a mass can sit on a logarithmic axis.
pub fn is_log_plottable(mass: f64) -> bool {
    mass.is_finite() && mass > 0.0
}

/// Return indices of galaxies that can be drawn on the mass-metallicity plane.
///
/// A row passes when:
/// * its stellar mass is finite and strictly positive (log x-axis)
/// * its gas metallicity is finite
pub fn plottable_indices(table: &GalaxyTable) -> Vec<usize> {
    table
        .stellar_mass
        .iter()
        .zip(&table.gas_metallicity)
        .enumerate()
        .filter(|&(_, (mass, metal))| is_log_plottable(*mass) && metal.is_finite())
        .map(|(i, _)| i)
        .collect()
}

/// Like [`plottable_indices`], additionally requiring a finite SFR so the
/// row can be colour mapped. Without an SFR column this is the same as
/// [`plottable_indices`].
pub fn plottable_indices_with_color(table: &GalaxyTable) -> Vec<usize> {
    let Some(sfr) = &table.star_formation_rate else {
        return plottable_indices(table);
    };
    plottable_indices(table)
        .into_iter()
        .filter(|&i| sfr[i].is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(mass: Vec<f64>, metal: Vec<f64>, sfr: Option<Vec<f64>>) -> GalaxyTable {
        GalaxyTable {
            stellar_mass: mass,
            gas_metallicity: metal,
            star_formation_rate: sfr,
        }
    }

    #[test]
    fn drops_non_positive_and_missing_masses() {
        let t = table(
            vec![1e9, 0.0, -5.0, f64::NAN, 2e10],
            vec![0.1, 0.2, 0.3, 0.4, 0.5],
            None,
        );
        assert_eq!(plottable_indices(&t), vec![0, 4]);
    }

    #[test]
    fn drops_missing_metallicity() {
        let t = table(vec![1e9, 2e9], vec![f64::NAN, 0.2], None);
        assert_eq!(plottable_indices(&t), vec![1]);
    }

    #[test]
    fn color_variant_also_needs_sfr() {
        let t = table(
            vec![1e9, 2e9, 3e9],
            vec![0.1, 0.2, 0.3],
            Some(vec![1.0, f64::NAN, 0.0]),
        );
        assert_eq!(plottable_indices_with_color(&t), vec![0, 2]);
    }

    #[test]
    fn color_variant_without_sfr_column_falls_back() {
        let t = table(vec![1e9, -1.0], vec![0.1, 0.2], None);
        assert_eq!(plottable_indices_with_color(&t), vec![0]);
    }
}
