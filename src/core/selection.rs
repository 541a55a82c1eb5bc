//! Selektions- und Editierregeln für Kontrollpunkte.
//!
//! Alle Operationen sind stille No-ops, wenn der Zustand sie nicht erlaubt
//! (kein aktiver Punkt, Hinzufügen bei aktiver Selektion). Der Rückgabewert
//! meldet nur, ob sich etwas geändert hat.

use super::{ControlPoint, ControlPointSet};
use glam::Vec2;

/// Standard-Radius (normalisierte Einheiten), innerhalb dessen ein Punkt aktiviert wird.
pub const ACTIVE_RADIUS: f32 = 0.02;

/// Wendet Hinzufügen/Selektieren/Verschieben/Löschen auf eine [`ControlPointSet`] an.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionController {
    active_radius: f32,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(ACTIVE_RADIUS)
    }
}

impl SelectionController {
    /// Erstellt einen Controller mit dem gegebenen Aktivierungsradius.
    pub fn new(active_radius: f32) -> Self {
        Self { active_radius }
    }

    /// Aktivierungsradius in normalisierten Einheiten.
    pub fn active_radius(&self) -> f32 {
        self.active_radius
    }

    /// Hängt einen neuen Punkt an, solange kein Punkt selektiert ist.
    ///
    /// Bei aktiver Selektion ist ein Klick mehrdeutig (Auswahl oder neuer Punkt?)
    /// und wird ignoriert. Gibt den Index des neuen Punkts zurück.
    pub fn add_point(&self, set: &mut ControlPointSet, position: Vec2) -> Option<usize> {
        if set.has_active() {
            return None;
        }
        Some(set.push(position))
    }

    /// Löscht den aktiven Punkt und hebt die Selektion auf.
    pub fn delete_active_point(&self, set: &mut ControlPointSet) -> Option<ControlPoint> {
        set.remove_active()
    }

    /// Verschiebt den aktiven Punkt um `delta`. Gibt `true` zurück, wenn ein Punkt bewegt wurde.
    pub fn move_active_point(&self, set: &mut ControlPointSet, delta: Vec2) -> bool {
        match set.active_mut() {
            Some(point) => {
                point.position += delta;
                true
            }
            None => false,
        }
    }

    /// Aktualisiert den aktiven Punkt anhand einer Zeigerposition.
    ///
    /// Liegt die Abfrage noch im Radius des aktiven Punkts (`d² <= r²`), bleibt
    /// die Selektion unverändert. Andernfalls wird sie aufgehoben und der
    /// **erste** Punkt in Einfügereihenfolge mit `d² < r²` aktiviert (First-Match,
    /// nicht Nearest-Match). Ohne aktiven Punkt wird immer gesucht.
    ///
    /// Gibt den danach aktiven Index zurück.
    pub fn update_active_point(&self, set: &mut ControlPointSet, query: Vec2) -> Option<usize> {
        let radius_sq = self.active_radius * self.active_radius;

        let still_near_active = set
            .active_point()
            .is_some_and(|active| active.distance_squared(query) <= radius_sq);
        if still_near_active {
            return set.active_index();
        }

        set.clear_selection();
        let hit = set
            .points()
            .iter()
            .position(|point| point.distance_squared(query) < radius_sq)?;
        set.select(hit);
        Some(hit)
    }

    /// Externer "Select-and-Delete"-Befehl: erst aktualisieren, dann löschen.
    pub fn select_and_delete(
        &self,
        set: &mut ControlPointSet,
        query: Vec2,
    ) -> Option<ControlPoint> {
        self.update_active_point(set, query);
        self.delete_active_point(set)
    }
}
