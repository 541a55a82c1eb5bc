//! Pointer-Bewegung: Hover-Selektion und Verschieben des aktiven Punkts.

use super::{screen_delta_to_normalized, screen_to_normalized, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Sendet Drag-Deltas, solange der primäre Button gezogen wird.
    pub(crate) fn handle_drag(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            self.primary_drag_active = true;
        }

        if self.primary_drag_active && response.dragged_by(egui::PointerButton::Primary) {
            let pointer_delta = ui.input(|i| i.pointer.delta());
            if pointer_delta != egui::Vec2::ZERO {
                events.push(AppIntent::DragActivePointRequested {
                    delta: screen_delta_to_normalized(pointer_delta, response.rect),
                });
            }
        }

        if response.drag_stopped() {
            self.primary_drag_active = false;
        }
    }

    /// Bestimmt bei reiner Zeigerbewegung (ohne Drag) den aktiven Punkt neu.
    pub(crate) fn handle_hover(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if self.primary_drag_active || response.dragged() {
            return;
        }

        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if let Some(hover_pos) = response.hover_pos() {
            events.push(AppIntent::PointerMoved {
                position: screen_to_normalized(hover_pos, response.rect),
            });
        }
    }
}
