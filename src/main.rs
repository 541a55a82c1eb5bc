//! Curve Modeling Editor.
//!
//! Interaktiver 2D-Editor für Kontrollpunkte mit vier Kurvendarstellungen:
//! Kontrollpolygon, Bézier (de Casteljau), uniforme kubische B-Spline und
//! Bézier per rekursiver Unterteilung.

use curve_modeling_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Curve Modeling Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title("Curve Modeling Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Modeling Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, &response));

                match self.controller.build_render_scene(&self.state) {
                    Ok(scene) => {
                        render::paint_scene(ui.painter(), rect, &scene);
                        if !scene.has_content() {
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "Linksklick: Punkt setzen · Rechtsklick: Punkt löschen",
                                egui::FontId::proportional(18.0),
                                egui::Color32::GRAY,
                            );
                        }
                    }
                    Err(e) => log::error!("Render-Szene fehlgeschlagen: {:#}", e),
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
