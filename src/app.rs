use std::io::IsTerminal;

use anyhow::Result;
use eframe::egui;

use crate::pipeline::RenderReport;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MzrViewerApp {
    pub state: ViewerState,
}

impl eframe::App for MzrViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: output path and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the saved figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_view(ui, &self.state);
        });
    }
}

/// Whether a window can be shown to someone: stdout is a terminal and, on
/// X11/Wayland platforms, a display server is advertised.
pub fn interactive_display_available() -> bool {
    if !std::io::stdout().is_terminal() {
        return false;
    }
    if cfg!(all(unix, not(target_os = "macos"))) {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

/// Open the viewer on a rendered figure. Blocks until the window closes.
pub fn show(report: &RenderReport) -> Result<()> {
    let state = ViewerState::from_report(report);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Galaxy Mass-Metallicity Relation",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can decode the PNG.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(MzrViewerApp { state }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
