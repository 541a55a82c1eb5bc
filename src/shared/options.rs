//! Zentrale Konfiguration für den Curve Modeling Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ACTIVE_RADIUS;
use crate::curves::CurveKind;
use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Aktivierungsradius in normalisierten Koordinaten.
pub const ACTIVE_RADIUS_DEFAULT: f32 = ACTIVE_RADIUS;

// ── Level of Detail ─────────────────────────────────────────────────

/// Start-Level-of-Detail beim Programmstart.
pub const LEVEL_OF_DETAIL_DEFAULT: i32 = 20;
/// Obergrenze für das Level-of-Detail (Slider / Shortcuts).
pub const LEVEL_OF_DETAIL_MAX: i32 = 200;
/// Schrittweite für +/- Shortcuts.
pub const LEVEL_OF_DETAIL_STEP: i32 = 1;
/// Maximale Rekursionstiefe der Unterteilung (Ausgabe wächst mit 2^Tiefe).
pub const SUBDIVISION_DEPTH_MAX: i32 = 10;

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbe des Kontrollpolygons (RGBA: Grün).
pub const POLYGON_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe der Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
/// Farbe normaler Kontrollpunkte (RGBA: Weiß).
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des aktiven Kontrollpunkts (RGBA: Rot).
pub const SELECTED_POINT_COLOR: [f32; 4] = [1.0, 0.1, 0.1, 1.0];
/// Farbe der B-Spline-Knoten (RGBA: Gelb).
pub const KNOT_COLOR: [f32; 4] = [1.0, 0.9, 0.0, 1.0];
/// Linienstärke in Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.0;
/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 5.0;
/// Fenstergröße beim Start [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [900.0, 900.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_modeling_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Radius (normalisiert), innerhalb dessen ein Punkt aktiviert wird
    pub active_radius: f32,

    // ── Kurven ──────────────────────────────────────────────────
    /// Kurvenvariante beim Programmstart
    pub default_curve_kind: CurveKind,
    /// Level-of-Detail beim Programmstart
    pub default_level_of_detail: i32,
    /// Obergrenze für das Level-of-Detail
    pub max_level_of_detail: i32,
    /// Schrittweite für +/- Shortcuts
    pub level_of_detail_step: i32,
    /// Obergrenze der Rekursionstiefe für die Unterteilung
    pub max_subdivision_depth: i32,

    // ── Darstellung ─────────────────────────────────────────────
    pub polygon_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub point_color: [f32; 4],
    pub selected_point_color: [f32; 4],
    pub knot_color: [f32; 4],
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,

    // ── Fenster ─────────────────────────────────────────────────
    pub window_size: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            active_radius: ACTIVE_RADIUS_DEFAULT,

            default_curve_kind: CurveKind::default(),
            default_level_of_detail: LEVEL_OF_DETAIL_DEFAULT,
            max_level_of_detail: LEVEL_OF_DETAIL_MAX,
            level_of_detail_step: LEVEL_OF_DETAIL_STEP,
            max_subdivision_depth: SUBDIVISION_DEPTH_MAX,

            polygon_color: POLYGON_COLOR,
            curve_color: CURVE_COLOR,
            point_color: POINT_COLOR,
            selected_point_color: SELECTED_POINT_COLOR,
            knot_color: KNOT_COLOR,
            line_width_px: LINE_WIDTH_PX,
            marker_radius_px: MARKER_RADIUS_PX,

            window_size: WINDOW_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten ihre Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(content)?;
        Ok(options.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_modeling_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_modeling_editor.toml")
    }

    /// Begrenzt ein Level-of-Detail auf `1..=max_level_of_detail`.
    pub fn clamp_level_of_detail(&self, level_of_detail: i32) -> i32 {
        level_of_detail.clamp(1, self.max_level_of_detail)
    }

    /// Korrigiert unbrauchbare Grenzwerte aus einer Datei.
    fn sanitized(mut self) -> Self {
        if self.max_level_of_detail < 1 {
            log::warn!(
                "max_level_of_detail = {} ungültig, verwende {}",
                self.max_level_of_detail,
                LEVEL_OF_DETAIL_MAX
            );
            self.max_level_of_detail = LEVEL_OF_DETAIL_MAX;
        }
        if self.max_subdivision_depth < 1 {
            self.max_subdivision_depth = SUBDIVISION_DEPTH_MAX;
        }
        if self.level_of_detail_step < 1 {
            self.level_of_detail_step = LEVEL_OF_DETAIL_STEP;
        }
        if !(self.active_radius.is_finite() && self.active_radius > 0.0) {
            self.active_radius = ACTIVE_RADIUS_DEFAULT;
        }
        self.default_level_of_detail = self.clamp_level_of_detail(self.default_level_of_detail);
        self
    }
}
