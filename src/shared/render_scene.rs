//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::curves::{CurveKind, CurveOutput};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Ausgewertete Segmente und Marker der aktiven Kurve
    pub output: CurveOutput,
    /// Verwendete Kurvenvariante
    pub curve_kind: CurveKind,
    /// Tatsächlich verwendetes Level-of-Detail (ggf. begrenzt)
    pub level_of_detail: i32,
    /// Anzahl der Kontrollpunkte
    pub point_count: usize,
    /// Index des aktiven Kontrollpunkts
    pub active_index: Option<usize>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.output.is_empty()
    }
}
