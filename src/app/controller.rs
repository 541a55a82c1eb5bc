//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Edits und Redraws laufen strikt nacheinander: jeder Intent wird vollständig
/// verarbeitet, bevor die nächste Render-Szene gebaut wird.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::UpdateActivePoint { position, radius } => {
                handlers::editing::update_active_point(state, position, radius)
            }
            AppCommand::AddPoint { position } => handlers::editing::add_point(state, position),
            AppCommand::DeleteActivePoint => handlers::editing::delete_active_point(state),
            AppCommand::MoveActivePoint { delta } => {
                handlers::editing::move_active_point(state, delta)
            }
            AppCommand::ClearControlPoints => handlers::editing::clear_points(state),

            // === Darstellung ===
            AppCommand::SetCurveKind { kind } => handlers::view::set_curve_kind(state, kind),
            AppCommand::SetLevelOfDetail { value } => {
                handlers::view::set_level_of_detail(state, value)
            }

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> anyhow::Result<RenderScene> {
        render_scene::build(state)
    }
}
