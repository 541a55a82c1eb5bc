//! Zeichenbare Primitive als Ergebnis einer Kurven-Auswertung.
//!
//! Die Art-Tags (`SegmentKind`, `MarkerKind`) unterscheiden nur die Rolle
//! eines Primitivs. Farben und Linienstärken wählt die Präsentationsschicht.

use glam::Vec2;

/// Rolle eines Liniensegments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Kante des Kontrollpolygons
    ControlPolygon,
    /// Kante der ausgewerteten Kurve
    Curve,
}

/// Gerades Liniensegment zwischen zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }
}

/// Rolle eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Position eines Kontrollpunkts
    ControlPoint { selected: bool },
    /// Segmentgrenze einer B-Spline
    Knot,
}

/// Punktmarkierung an einer Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub kind: MarkerKind,
}

/// Geordnete Segmente und Marker eines Auswertungsdurchlaufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveOutput {
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
}

impl CurveOutput {
    /// Erstellt eine leere Ausgabe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn weder Segmente noch Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.markers.is_empty()
    }

    /// Fügt ein Segment hinzu.
    pub fn push_segment(&mut self, start: Vec2, end: Vec2, kind: SegmentKind) {
        self.segments.push(Segment::new(start, end, kind));
    }

    /// Verbindet aufeinanderfolgende Punkte einer Polyline mit Segmenten.
    pub fn push_polyline(&mut self, points: &[Vec2], kind: SegmentKind) {
        self.segments
            .extend(points.windows(2).map(|w| Segment::new(w[0], w[1], kind)));
    }

    /// Fügt einen Marker hinzu.
    pub fn push_marker(&mut self, position: Vec2, kind: MarkerKind) {
        self.markers.push(Marker { position, kind });
    }

    /// Segmente einer bestimmten Rolle in Ausgabereihenfolge.
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.kind == kind)
    }

    /// Kurvensegmente (ohne Kontrollpolygon).
    pub fn curve_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments_of(SegmentKind::Curve)
    }

    /// Kanten des Kontrollpolygons.
    pub fn polygon_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments_of(SegmentKind::ControlPolygon)
    }

    /// Positionen aller Knoten-Marker.
    pub fn knots(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.markers
            .iter()
            .filter(|m| m.kind == MarkerKind::Knot)
            .map(|m| m.position)
    }
}
