//! Application State: zentrale Datenhaltung einer Editier-Sitzung.

use super::CommandLog;
use crate::core::ControlPointSet;
use crate::curves::CurveKind;
use crate::shared::EditorOptions;

/// Zustand einer Editier-Sitzung.
///
/// Es gibt genau eine aktive Kontrollpunkt-Menge pro Sitzung. Der State wird
/// vom Aufrufer besessen und an Controller, Handler und Render-Szene übergeben.
pub struct AppState {
    /// Kontrollpunkte der Kurve (einzige mutierbare Geometrie)
    pub control_points: ControlPointSet,
    /// Aktive Darstellungsvariante
    pub curve_kind: CurveKind,
    /// Aktuelles Level-of-Detail (immer in `1..=options.max_level_of_detail`)
    pub level_of_detail: i32,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ausgeführte Commands
    pub command_log: CommandLog,
    /// Anwendung soll beendet werden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            control_points: ControlPointSet::new(),
            curve_kind: options.default_curve_kind,
            level_of_detail: options.clamp_level_of_detail(options.default_level_of_detail),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Level-of-Detail, mit dem die aktive Variante ausgewertet wird.
    ///
    /// Die rekursive Unterteilung interpretiert den Wert als Tiefe und wird
    /// zusätzlich auf `max_subdivision_depth` begrenzt.
    pub fn effective_level_of_detail(&self) -> i32 {
        match self.curve_kind {
            CurveKind::BezierRecursiveSubdivision => self
                .level_of_detail
                .min(self.options.max_subdivision_depth),
            _ => self.level_of_detail,
        }
    }
}
