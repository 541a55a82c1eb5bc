//! Viewport-Input-Handling: Maus-Events → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks`: Links-/Rechtsklick (Hinzufügen, Löschen)
//! - `pointer_delta`: Hover-Selektion und Drag des aktiven Punkts

mod clicks;
mod pointer_delta;

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Primärer Drag läuft (Hover-Selektion ist währenddessen eingefroren)
    pub(crate) primary_drag_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_active: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Tastatur, Klicks, Hover und Drag.
    /// Alle Positionen werden vorher in normalisierte Koordinaten
    /// (`[0,1]²`, Ursprung unten links) umgerechnet.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_drag(ui, response, &mut events);
        self.handle_hover(ui, response, &mut events);
        self.handle_clicks(response, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in normalisierte Koordinaten um.
///
/// Die y-Achse wird invertiert: die Unterkante des Viewports liegt bei 0.
pub fn screen_to_normalized(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let size = viewport_extent(rect);
    Vec2::new(
        (pos.x - rect.min.x) / size.x,
        1.0 - (pos.y - rect.min.y) / size.y,
    )
}

/// Rechnet ein Pixel-Delta in ein normalisiertes Delta um (y invertiert).
pub fn screen_delta_to_normalized(delta: egui::Vec2, rect: egui::Rect) -> Vec2 {
    let size = viewport_extent(rect);
    Vec2::new(delta.x / size.x, -delta.y / size.y)
}

/// Rechnet eine normalisierte Position zurück in Bildschirmkoordinaten.
pub fn normalized_to_screen(pos: Vec2, rect: egui::Rect) -> egui::Pos2 {
    let size = viewport_extent(rect);
    egui::pos2(
        rect.min.x + pos.x * size.x,
        rect.min.y + (1.0 - pos.y) * size.y,
    )
}

/// Viewport-Größe, mindestens ein Pixel pro Achse.
fn viewport_extent(rect: egui::Rect) -> Vec2 {
    Vec2::new(rect.width().max(1.0), rect.height().max(1.0))
}
