//! Bézier-Näherung durch rekursive geometrische Unterteilung.
//!
//! Ein Schritt ist ein einzelner Corner-Cutting-Durchlauf, der die Punktzahl
//! erhält. Er ist keine exakte de-Casteljau-Teilung bei t = 0.5; die beiden
//! Hälften beschreiben die Originalkurve nur näherungsweise.

use super::{CurveOutput, SegmentKind};
use glam::Vec2;

/// Ein Corner-Cutting-Schritt mit gleicher Punktzahl wie die Eingabe.
///
/// Rekursiv definiert über eine Folge P:
/// - leer → leer, ein Element → dieses Element
/// - sonst: jedes Element außer dem letzten durch den Mittelpunkt mit seinem
///   Nachfolger ersetzen, das letzte entfernen, den Rest ebenso behandeln und
///   das ursprüngliche letzte Element wieder anhängen.
///
/// Das Ergebnis endet daher immer mit dem letzten Eingabepunkt.
pub fn corner_cut(points: &[Vec2]) -> Vec<Vec2> {
    let mut level = points.to_vec();
    // Abgetrennte Endpunkte je Rekursionsstufe, innerste zuletzt
    let mut tails = Vec::with_capacity(points.len());

    while level.len() > 1 {
        for i in 0..level.len() - 1 {
            level[i] = (level[i] + level[i + 1]) * 0.5;
        }
        if let Some(last) = level.pop() {
            tails.push(last);
        }
    }

    level.extend(tails.into_iter().rev());
    level
}

/// Teilt eine Folge bei `mid = len / 2` in zwei Hälften mit gemeinsamem Mittelpunkt.
pub fn split_halves(points: &[Vec2]) -> (&[Vec2], &[Vec2]) {
    if points.is_empty() {
        return (points, points);
    }
    let mid = points.len() / 2;
    (&points[..=mid], &points[mid..])
}

/// Schreibt die Unterteilungs-Näherung mit Rekursionstiefe `depth` in `out`.
///
/// Bei `depth <= 1` werden die Punkte direkt verbunden. Sonst wird einmal
/// unterteilt und beide Hälften mit `depth − 1` weiterverarbeitet.
/// Weniger als 2 Punkte liefern keine Segmente.
pub fn evaluate(points: &[Vec2], depth: u32, out: &mut CurveOutput) {
    if points.len() < 2 {
        return;
    }

    if depth <= 1 {
        out.push_polyline(points, SegmentKind::Curve);
        return;
    }

    let refined = corner_cut(points);
    let (left, right) = split_halves(&refined);
    evaluate(left, depth - 1, out);
    evaluate(right, depth - 1, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corner_cut_keeps_length_and_last_point() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 2.0);
        let c = Vec2::new(4.0, 0.0);

        let cut = corner_cut(&[a, b, c]);
        assert_eq!(cut.len(), 3);

        let mab = (a + b) * 0.5;
        let mbc = (b + c) * 0.5;
        assert_eq!(cut[0], (mab + mbc) * 0.5);
        assert_eq!(cut[1], mbc);
        assert_eq!(cut[2], c);
    }

    #[test]
    fn corner_cut_of_trivial_inputs() {
        assert!(corner_cut(&[]).is_empty());
        assert_eq!(corner_cut(&[Vec2::ONE]), vec![Vec2::ONE]);

        let pair = corner_cut(&[Vec2::ZERO, Vec2::new(2.0, 0.0)]);
        assert_eq!(pair, vec![Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);
    }

    #[test]
    fn split_shares_middle_element() {
        let pts = [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE, Vec2::NEG_X];
        let (left, right) = split_halves(&pts);
        assert_eq!(left, &pts[..=2]);
        assert_eq!(right, &pts[2..]);
        assert_eq!(left.last(), right.first());
    }

    #[test]
    fn depth_one_draws_polyline_of_input() {
        let pts = [Vec2::ZERO, Vec2::new(0.5, 1.0), Vec2::X];
        let mut out = CurveOutput::new();
        evaluate(&pts, 1, &mut out);

        let segments: Vec<_> = out.curve_segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, pts[0]);
        assert_eq!(segments[1].end, pts[2]);
    }

    #[test]
    fn depth_two_recurses_into_both_halves() {
        let pts = [Vec2::ZERO, Vec2::Y, Vec2::ONE, Vec2::X];
        let mut out = CurveOutput::new();
        evaluate(&pts, 2, &mut out);
        // links 3 Punkte (2 Segmente) + rechts 2 Punkte (1 Segment)
        assert_eq!(out.curve_segments().count(), 3);
    }

    #[test]
    fn recursion_ends_on_last_control_point() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.3, 0.9),
            Vec2::new(0.7, 0.9),
            Vec2::new(1.0, 0.0),
        ];
        let mut out = CurveOutput::new();
        evaluate(&pts, 5, &mut out);

        let last = out.curve_segments().last().unwrap();
        assert_relative_eq!(last.end.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(last.end.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn single_point_produces_nothing() {
        let mut out = CurveOutput::new();
        evaluate(&[Vec2::ONE], 4, &mut out);
        assert!(out.is_empty());
    }
}
