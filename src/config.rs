use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Fixed locations, relative to the project root
// ---------------------------------------------------------------------------

pub const DATA_FILE: &str = "data/galaxy_snapshot.csv";
pub const OUTPUT_DIR: &str = "output";
pub const OUTPUT_FILE: &str = "mass_metallicity_relation.png";
pub const OUTPUT_DPI: f64 = 300.0;

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Where to read, where to write and how to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Project root the data and output paths hang off.
    pub root: PathBuf,
    /// Colour markers by star formation rate and attach a colorbar.
    pub color_by_sfr: bool,
    pub dpi: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::with_root(".")
    }
}

impl PlotConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            color_by_sfr: true,
            dpi: OUTPUT_DPI,
        }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(OUTPUT_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
