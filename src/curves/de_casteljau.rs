//! Bézier-Auswertung nach de Casteljau.
//!
//! Gewichtskonvention: bei jeder Reduktionsstufe erhält das *frühere* Element
//! das Gewicht `t`, das spätere `1 − t`. Gegenüber der Lehrbuchformel ist die
//! Parametrisierung damit gespiegelt (t = 0 liefert den letzten, t = 1 den
//! ersten Kontrollpunkt). Die Form der Kurve ist identisch.

use super::error::{positive_level_of_detail, CurveResult};
use super::{CurveOutput, SegmentKind};
use glam::Vec2;

/// Wertet die Bézier-Kurve an Parameter `t` aus.
///
/// `work` ist der Arbeitspuffer; er wird mit den Kontrollpunkten befüllt und
/// stufenweise in-place reduziert (N−1 Stufen). Leere Eingabe ergibt `None`.
pub fn point_at_with_buffer(points: &[Vec2], t: f32, work: &mut Vec<Vec2>) -> Option<Vec2> {
    work.clear();
    work.extend_from_slice(points);

    let inv = 1.0 - t;
    for len in (1..points.len()).rev() {
        // Element i hängt nur von i und i+1 ab, daher ist in-place von links nach rechts sicher.
        for i in 0..len {
            work[i] = t * work[i] + inv * work[i + 1];
        }
    }
    work.first().copied()
}

/// Wertet die Bézier-Kurve an Parameter `t` aus (allokiert einen eigenen Puffer).
pub fn point_at(points: &[Vec2], t: f32) -> Option<Vec2> {
    let mut work = Vec::with_capacity(points.len());
    point_at_with_buffer(points, t, &mut work)
}

/// Tastet die Kurve an `t = i / L` für `i = 0..=L` ab (L+1 Punkte, steigendes t).
///
/// Für weniger als 2 Kontrollpunkte ist das Ergebnis leer.
pub fn sample(points: &[Vec2], level_of_detail: i32) -> CurveResult<Vec<Vec2>> {
    let steps = positive_level_of_detail(level_of_detail)?;
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut work = Vec::with_capacity(points.len());
    let samples = (0..=steps)
        .filter_map(|i| {
            let t = i as f32 / steps as f32;
            point_at_with_buffer(points, t, &mut work)
        })
        .collect();
    Ok(samples)
}

/// Schreibt die abgetastete Kurve als Polyline in `out`.
pub fn evaluate(points: &[Vec2], level_of_detail: i32, out: &mut CurveOutput) -> CurveResult<()> {
    let samples = sample(points, level_of_detail)?;
    out.push_polyline(&samples, SegmentKind::Curve);
    Ok(())
}
