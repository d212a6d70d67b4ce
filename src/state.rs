use std::path::PathBuf;

use eframe::egui::load::Bytes;

use crate::pipeline::RenderReport;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// What the viewer window shows, independent of rendering.
pub struct ViewerState {
    /// Cache key for the egui image loader.
    pub image_uri: String,
    /// Encoded PNG, shared with the loader without copying.
    pub png: Bytes,
    pub output_path: PathBuf,
    pub plotted: usize,
    pub dropped: usize,
    pub colorbar: bool,
}

impl ViewerState {
    pub fn from_report(report: &RenderReport) -> Self {
        let file_name = report
            .output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "figure.png".to_string());
        Self {
            image_uri: format!("bytes://{file_name}"),
            png: Bytes::from(report.png.clone()),
            output_path: report.output_path.clone(),
            plotted: report.plotted,
            dropped: report.dropped,
            colorbar: report.colorbar,
        }
    }

    /// One-line summary for the top bar.
    pub fn summary(&self) -> String {
        let mut text = format!("{} galaxies plotted", self.plotted);
        if self.dropped > 0 {
            text.push_str(&format!(", {} dropped", self.dropped));
        }
        if self.colorbar {
            text.push_str(", colored by SFR");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RenderReport {
        RenderReport {
            output_path: PathBuf::from("output/mass_metallicity_relation.png"),
            png: vec![0x89, b'P', b'N', b'G'],
            plotted: 3,
            dropped: 1,
            colorbar: true,
        }
    }

    #[test]
    fn uri_uses_output_file_name() {
        let state = ViewerState::from_report(&report());
        assert_eq!(state.image_uri, "bytes://mass_metallicity_relation.png");
        assert_eq!(&state.png[..], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn summary_mentions_drops_and_colouring() {
        let state = ViewerState::from_report(&report());
        assert_eq!(state.summary(), "3 galaxies plotted, 1 dropped, colored by SFR");
    }
}
