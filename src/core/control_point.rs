//! Einzelner Kontrollpunkt einer Kurve.

use glam::Vec2;

/// Vom Benutzer platzierter 2D-Punkt in normalisierten Koordinaten.
///
/// `selected` ist reiner UI-Zustand und gehört nicht zur Geometrie.
/// Zwei Punkte mit identischer Position sind erlaubt und bleiben unterscheidbar
/// (nur über ihren Index in der [`ControlPointSet`](super::ControlPointSet)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in normalisierten Koordinaten (Ursprung unten links)
    pub position: Vec2,
    /// Ob dieser Punkt der aktive Punkt ist
    pub selected: bool,
}

impl ControlPoint {
    /// Erstellt einen neuen, nicht selektierten Kontrollpunkt.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            selected: false,
        }
    }

    /// Quadrierte Distanz zu einer Abfrageposition.
    #[inline]
    pub fn distance_squared(&self, query: Vec2) -> f32 {
        self.position.distance_squared(query)
    }
}
