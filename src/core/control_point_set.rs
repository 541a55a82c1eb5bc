//! Geordnete Kontrollpunkt-Menge mit höchstens einem aktiven Punkt.

use super::ControlPoint;
use glam::Vec2;

/// Geordnete, veränderliche Folge von Kontrollpunkten.
///
/// Der aktive Punkt wird als Index gehalten und bei jedem Zugriff gegen die
/// aktuelle Länge geprüft. Das `selected`-Flag eines Punkts und der aktive
/// Index werden ausschließlich gemeinsam geändert, dadurch gilt immer:
/// genau der Punkt am aktiven Index ist selektiert, alle anderen nicht.
///
/// Die Regeln, *wann* selektiert, hinzugefügt oder gelöscht wird, liegen im
/// [`SelectionController`](super::SelectionController).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointSet {
    points: Vec<ControlPoint>,
    active: Option<usize>,
}

impl ControlPointSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Menge aus Positionen in der gegebenen Reihenfolge (ohne Selektion).
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: positions.into_iter().map(ControlPoint::new).collect(),
            active: None,
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Kontrollpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Kopiert die reinen Positionen (Arbeitspuffer für Kurven-Auswertung).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Index des aktiven Punkts, falls einer selektiert ist.
    pub fn active_index(&self) -> Option<usize> {
        self.active.filter(|&idx| idx < self.points.len())
    }

    /// Der aktive Punkt, falls einer selektiert ist.
    pub fn active_point(&self) -> Option<&ControlPoint> {
        self.active_index().map(|idx| &self.points[idx])
    }

    /// Mutable Referenz auf den aktiven Punkt.
    pub fn active_mut(&mut self) -> Option<&mut ControlPoint> {
        let idx = self.active_index()?;
        self.points.get_mut(idx)
    }

    /// Gibt `true` zurück, wenn ein Punkt selektiert ist.
    pub fn has_active(&self) -> bool {
        self.active_index().is_some()
    }

    /// Hängt einen neuen, nicht selektierten Punkt an und gibt seinen Index zurück.
    pub fn push(&mut self, position: Vec2) -> usize {
        self.points.push(ControlPoint::new(position));
        self.points.len() - 1
    }

    /// Macht den Punkt an `index` zum aktiven Punkt.
    ///
    /// Eine vorherige Selektion wird aufgehoben. Gibt `false` zurück, wenn
    /// `index` außerhalb der Menge liegt (die Selektion bleibt dann unverändert).
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.clear_selection();
        self.points[index].selected = true;
        self.active = Some(index);
        true
    }

    /// Hebt die Selektion auf. Gibt den bisher aktiven Index zurück.
    pub fn clear_selection(&mut self) -> Option<usize> {
        let previous = self.active_index();
        if let Some(idx) = previous {
            self.points[idx].selected = false;
        }
        self.active = None;
        previous
    }

    /// Entfernt den aktiven Punkt und hebt die Selektion auf.
    ///
    /// Die Reihenfolge der übrigen Punkte bleibt erhalten.
    pub fn remove_active(&mut self) -> Option<ControlPoint> {
        let idx = self.active_index()?;
        self.active = None;
        let mut removed = self.points.remove(idx);
        removed.selected = false;
        Some(removed)
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
        self.active = None;
    }
}
