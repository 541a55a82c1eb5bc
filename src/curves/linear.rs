//! Kontrollpolygon: verbindet aufeinanderfolgende Kontrollpunkte.

use super::{CurveOutput, MarkerKind, SegmentKind};
use crate::core::ControlPoint;

/// Schreibt das Kontrollpolygon in `out`.
///
/// N Punkte ergeben N−1 Segmente und N Marker. Für N < 2 entstehen keine
/// Segmente, die Marker werden trotzdem ausgegeben.
pub fn control_polygon(points: &[ControlPoint], out: &mut CurveOutput) {
    out.segments.reserve(points.len().saturating_sub(1));
    for pair in points.windows(2) {
        out.push_segment(pair[0].position, pair[1].position, SegmentKind::ControlPolygon);
    }

    out.markers.reserve(points.len());
    for point in points {
        out.push_marker(
            point.position,
            MarkerKind::ControlPoint {
                selected: point.selected,
            },
        );
    }
}
