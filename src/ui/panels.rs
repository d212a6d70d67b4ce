use eframe::egui::{self, RichText, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: where the figure was saved and what it shows.
pub fn top_bar(ui: &mut Ui, state: &ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(state.output_path.display().to_string()).strong());
        ui.separator();
        ui.label(state.summary());
    });
}
