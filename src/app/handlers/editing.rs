//! Handler für Kontrollpunkt-Editing (Hinzufügen, Selektieren, Verschieben, Löschen).

use crate::app::AppState;
use crate::core::SelectionController;
use glam::Vec2;

fn selection_controller(state: &AppState) -> SelectionController {
    SelectionController::new(state.options.active_radius)
}

/// Bestimmt den aktiven Punkt anhand der Zeigerposition neu.
pub fn update_active_point(state: &mut AppState, position: Vec2, radius: f32) {
    let before = state.control_points.active_index();
    let after =
        SelectionController::new(radius).update_active_point(&mut state.control_points, position);
    if before != after {
        log::debug!("Aktiver Punkt: {:?} -> {:?}", before, after);
    }
}

/// Hängt einen Kontrollpunkt an (ignoriert, solange ein Punkt aktiv ist).
pub fn add_point(state: &mut AppState, position: Vec2) {
    match selection_controller(state).add_point(&mut state.control_points, position) {
        Some(index) => log::debug!(
            "Kontrollpunkt {} hinzugefügt bei ({:.3}, {:.3})",
            index,
            position.x,
            position.y
        ),
        None => log::debug!("Hinzufügen ignoriert: ein Kontrollpunkt ist aktiv"),
    }
}

/// Löscht den aktiven Kontrollpunkt.
pub fn delete_active_point(state: &mut AppState) {
    let index = state.control_points.active_index();
    if let Some(removed) = selection_controller(state).delete_active_point(&mut state.control_points)
    {
        log::debug!(
            "Kontrollpunkt {:?} gelöscht ({:.3}, {:.3}), verbleibend: {}",
            index,
            removed.position.x,
            removed.position.y,
            state.control_points.len()
        );
    }
}

/// Verschiebt den aktiven Kontrollpunkt um ein normalisiertes Delta.
pub fn move_active_point(state: &mut AppState, delta: Vec2) {
    if delta == Vec2::ZERO {
        return;
    }
    selection_controller(state).move_active_point(&mut state.control_points, delta);
}

/// Entfernt alle Kontrollpunkte.
pub fn clear_points(state: &mut AppState) {
    let count = state.control_points.len();
    state.control_points.clear();
    log::info!("{} Kontrollpunkte entfernt", count);
}
