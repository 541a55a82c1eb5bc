//! Klick-Events: Links = Punkt hinzufügen, Rechts = Punkt unter dem Zeiger löschen.

use super::{screen_to_normalized, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Primär- und Sekundärklicks im Viewport.
    pub(crate) fn handle_clicks(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        let Some(pointer_pos) = response.interact_pointer_pos() else {
            return;
        };
        let position = screen_to_normalized(pointer_pos, response.rect);

        if response.clicked_by(egui::PointerButton::Primary) {
            events.push(AppIntent::AddPointRequested { position });
        } else if response.clicked_by(egui::PointerButton::Secondary) {
            events.push(AppIntent::DeletePointRequested { position });
        }
    }
}
