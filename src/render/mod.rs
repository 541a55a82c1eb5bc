//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reine Präsentation: Segmente und Marker kommen fertig aus `curves`,
//! hier werden nur Koordinaten umgerechnet und Farben aus den Optionen gewählt.

use crate::curves::{MarkerKind, SegmentKind};
use crate::shared::{EditorOptions, RenderScene};
use crate::ui::normalized_to_screen;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe um.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn segment_color(kind: SegmentKind, options: &EditorOptions) -> egui::Color32 {
    match kind {
        SegmentKind::ControlPolygon => color32(options.polygon_color),
        SegmentKind::Curve => color32(options.curve_color),
    }
}

fn marker_color(kind: MarkerKind, options: &EditorOptions) -> egui::Color32 {
    match kind {
        MarkerKind::ControlPoint { selected: true } => color32(options.selected_point_color),
        MarkerKind::ControlPoint { selected: false } => color32(options.point_color),
        MarkerKind::Knot => color32(options.knot_color),
    }
}

/// Zeichnet alle Segmente und Marker der Szene in das Viewport-Rechteck.
///
/// Segmente werden in Ausgabereihenfolge gezeichnet (Polygon vor Kurve),
/// Marker liegen darüber.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;

    for segment in &scene.output.segments {
        let stroke = egui::Stroke::new(options.line_width_px, segment_color(segment.kind, options));
        painter.line_segment(
            [
                normalized_to_screen(segment.start, rect),
                normalized_to_screen(segment.end, rect),
            ],
            stroke,
        );
    }

    for marker in &scene.output.markers {
        let radius = match marker.kind {
            MarkerKind::Knot => options.marker_radius_px * 0.6,
            MarkerKind::ControlPoint { .. } => options.marker_radius_px,
        };
        painter.circle_filled(
            normalized_to_screen(marker.position, rect),
            radius,
            marker_color(marker.kind, options),
        );
    }
}
