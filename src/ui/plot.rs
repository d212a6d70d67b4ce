use eframe::egui::{self, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Figure view (central panel)
// ---------------------------------------------------------------------------

/// Show the saved figure, scaled down to fit the panel.
pub fn figure_view(ui: &mut Ui, state: &ViewerState) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.add(
            egui::Image::from_bytes(state.image_uri.clone(), state.png.clone())
                .shrink_to_fit(),
        );
    });
}
