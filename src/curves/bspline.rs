//! Uniforme kubische B-Spline über Basis-Matrix-Blending.
//!
//! Jedes Fenster aus 4 aufeinanderfolgenden Kontrollpunkten wird unabhängig
//! ausgewertet; Fenster überlappen sich um 3 Punkte.

use super::error::{positive_level_of_detail, CurveResult};
use super::{CurveOutput, MarkerKind, SegmentKind};
use glam::{Mat4, Vec2, Vec4};

/// Zeilen der Basis-Matrix M (ohne Faktor 1/6).
///
/// Zeile = Monom-Komponente (u³, u², u, 1), Spalte = Gewicht für p1..p4.
const BASIS_ROWS: [[f32; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 0.0, 3.0, 0.0],
    [1.0, 4.0, 1.0, 0.0],
];

/// Transponierte Basis-Matrix, so dass `basis * [u³, u², u, 1]` die Gewichte liefert.
fn blend_matrix() -> Mat4 {
    // glam ist spaltenweise: Zeilen von M als Spalten übergeben ergibt Mᵀ.
    Mat4::from_cols_array_2d(&BASIS_ROWS) * (1.0 / 6.0)
}

/// Gewichte (w1..w4) für den lokalen Parameter `u ∈ [0, 1]`.
pub fn blend_weights(u: f32) -> Vec4 {
    blend_matrix() * Vec4::new(u * u * u, u * u, u, 1.0)
}

/// Wertet ein einzelnes Fenster an `u = j / L` für `j = 0..=L` aus.
pub fn evaluate_window(window: [Vec2; 4], level_of_detail: i32) -> CurveResult<Vec<Vec2>> {
    let steps = positive_level_of_detail(level_of_detail)?;
    let basis = blend_matrix();
    Ok((0..=steps)
        .map(|j| {
            let u = j as f32 / steps as f32;
            blend(&basis, &window, u)
        })
        .collect())
}

fn blend(basis: &Mat4, window: &[Vec2; 4], u: f32) -> Vec2 {
    let w = *basis * Vec4::new(u * u * u, u * u, u, 1.0);
    w.x * window[0] + w.y * window[1] + w.z * window[2] + w.w * window[3]
}

/// Schreibt alle Fenster-Polylines und je einen Knoten-Marker am Fensterende in `out`.
///
/// Für weniger als 4 Kontrollpunkte entsteht keine Ausgabe.
pub fn evaluate(points: &[Vec2], level_of_detail: i32, out: &mut CurveOutput) -> CurveResult<()> {
    let steps = positive_level_of_detail(level_of_detail)?;
    if points.len() < 4 {
        return Ok(());
    }

    let basis = blend_matrix();
    let mut samples = Vec::with_capacity(steps as usize + 1);
    for window in points.windows(4) {
        let window = [window[0], window[1], window[2], window[3]];
        samples.clear();
        samples.extend((0..=steps).map(|j| blend(&basis, &window, j as f32 / steps as f32)));

        out.push_polyline(&samples, SegmentKind::Curve);
        if let Some(&knot) = samples.last() {
            out.push_marker(knot, MarkerKind::Knot);
        }
    }
    Ok(())
}
