//! Kurven-Auswertung: Kontrollpolygon, de Casteljau, B-Spline, rekursive Unterteilung.
//!
//! Alle Verfahren lesen eine [`ControlPointSet`] und liefern zeichenbare
//! Primitive ([`CurveOutput`]). Zustand wird über den Aufruf hinaus nicht gehalten;
//! dieselbe Eingabe ergibt immer dieselbe Ausgabe.

pub mod bspline;
pub mod de_casteljau;
mod error;
pub mod linear;
mod output;
pub mod subdivision;

pub use error::{CurveError, CurveResult};
pub use output::{CurveOutput, Marker, MarkerKind, Segment, SegmentKind};

use crate::core::ControlPointSet;
use serde::{Deserialize, Serialize};

/// Darstellungsvariante einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Nur das Kontrollpolygon
    Linear,
    /// Bézier-Kurve über de Casteljau
    #[default]
    BezierDeCasteljau,
    /// Uniforme kubische B-Spline
    UniformCubicBSpline,
    /// Bézier-Näherung durch rekursive Unterteilung
    BezierRecursiveSubdivision,
}

impl CurveKind {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [CurveKind; 4] = [
        CurveKind::Linear,
        CurveKind::BezierDeCasteljau,
        CurveKind::UniformCubicBSpline,
        CurveKind::BezierRecursiveSubdivision,
    ];

    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Linear => "Polygon",
            CurveKind::BezierDeCasteljau => "Bézier (de Casteljau)",
            CurveKind::UniformCubicBSpline => "B-Spline",
            CurveKind::BezierRecursiveSubdivision => "Bézier (Unterteilung)",
        }
    }

    /// Nächste Variante (zyklisch).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Wertet die Kontrollpunkte mit diesem Verfahren aus.
    ///
    /// Zuerst wird das Kontrollpolygon ausgegeben, danach die Kurvensegmente.
    /// Bei der rekursiven Unterteilung ist `level_of_detail` die Rekursionstiefe;
    /// das Polygon entfällt dort bei Tiefe 0.
    ///
    /// # Errors
    /// [`CurveError::InvalidParameter`] bei `level_of_detail <= 0` (de Casteljau,
    /// B-Spline) bzw. `< 0` (Unterteilung). Linear ignoriert den Parameter.
    pub fn evaluate(
        self,
        points: &ControlPointSet,
        level_of_detail: i32,
    ) -> CurveResult<CurveOutput> {
        let mut out = CurveOutput::new();

        match self {
            CurveKind::Linear => {
                linear::control_polygon(points.points(), &mut out);
            }
            CurveKind::BezierDeCasteljau => {
                let samples = de_casteljau::sample(&points.positions(), level_of_detail)?;
                linear::control_polygon(points.points(), &mut out);
                out.push_polyline(&samples, SegmentKind::Curve);
            }
            CurveKind::UniformCubicBSpline => {
                let mut curve = CurveOutput::new();
                bspline::evaluate(&points.positions(), level_of_detail, &mut curve)?;
                linear::control_polygon(points.points(), &mut out);
                out.segments.append(&mut curve.segments);
                out.markers.append(&mut curve.markers);
            }
            CurveKind::BezierRecursiveSubdivision => {
                let depth =
                    u32::try_from(level_of_detail).map_err(|_| CurveError::InvalidParameter {
                        parameter: "level_of_detail",
                        value: level_of_detail,
                        reason: "Rekursionstiefe darf nicht negativ sein",
                    })?;
                if depth > 0 {
                    linear::control_polygon(points.points(), &mut out);
                }
                subdivision::evaluate(&points.positions(), depth, &mut out);
            }
        }

        Ok(out)
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
