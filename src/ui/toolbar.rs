//! Toolbar für Kurvenvariante und Level-of-Detail.

use crate::app::{AppIntent, AppState};
use crate::curves::CurveKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.curve_kind;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Variante:");
            ui.separator();

            for (shortcut, kind) in (1..).zip(CurveKind::ALL) {
                let button = egui::Button::new(format!("{} ({})", kind.label(), shortcut));
                if ui.add(button.selected(active == kind)).clicked() {
                    events.push(AppIntent::SetCurveKindRequested { kind });
                }
            }

            ui.separator();

            // Für die Unterteilung ist der Wert die Rekursionstiefe
            let (label, max) = if active == CurveKind::BezierRecursiveSubdivision {
                ("Tiefe:", state.options.max_subdivision_depth)
            } else {
                ("LOD:", state.options.max_level_of_detail)
            };
            ui.label(label);

            let mut value = state.effective_level_of_detail();
            let slider = egui::Slider::new(&mut value, 1..=max.max(1));
            if ui.add(slider).changed() {
                events.push(AppIntent::SetLevelOfDetailRequested { value });
            }

            ui.separator();

            if ui
                .add_enabled(
                    !state.control_points.is_empty(),
                    egui::Button::new("🗑 Alle löschen (C)"),
                )
                .clicked()
            {
                events.push(AppIntent::ClearPointsRequested);
            }
        });
    });

    events
}
