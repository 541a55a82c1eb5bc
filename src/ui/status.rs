//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Kontrollpunkte: {}", state.point_count()));

            ui.separator();

            match state.control_points.active_point() {
                Some(point) => {
                    let index = state.control_points.active_index().unwrap_or_default();
                    ui.label(format!(
                        "Aktiv: #{} ({:.3}, {:.3})",
                        index, point.position.x, point.position.y
                    ));
                }
                None => {
                    ui.label("Aktiv: –");
                }
            }

            ui.separator();

            ui.label(format!("Variante: {}", state.curve_kind));

            ui.separator();

            let effective = state.effective_level_of_detail();
            if effective != state.level_of_detail {
                ui.label(format!(
                    "LOD: {} (Tiefe {})",
                    state.level_of_detail, effective
                ));
            } else {
                ui.label(format!("LOD: {}", state.level_of_detail));
            }

            if let Some(command) = state.command_log.last_edit() {
                ui.separator();
                ui.label(format!(
                    "Letzte Aktion: {} ({} Befehle)",
                    command.label(),
                    state.command_log.total()
                ));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
