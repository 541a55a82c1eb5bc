//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { position } => vec![AppCommand::UpdateActivePoint {
            position,
            radius: state.options.active_radius,
        }],
        AppIntent::AddPointRequested { position } => vec![AppCommand::AddPoint { position }],
        AppIntent::DeletePointRequested { position } => vec![
            AppCommand::UpdateActivePoint {
                position,
                radius: state.options.active_radius,
            },
            AppCommand::DeleteActivePoint,
        ],
        AppIntent::DeleteActivePointRequested => vec![AppCommand::DeleteActivePoint],
        AppIntent::DragActivePointRequested { delta } => {
            vec![AppCommand::MoveActivePoint { delta }]
        }
        AppIntent::SetCurveKindRequested { kind } => vec![AppCommand::SetCurveKind { kind }],
        AppIntent::CycleCurveKindRequested => vec![AppCommand::SetCurveKind {
            kind: state.curve_kind.next(),
        }],
        AppIntent::IncreaseLevelOfDetailRequested => vec![AppCommand::SetLevelOfDetail {
            value: state
                .effective_level_of_detail()
                .saturating_add(state.options.level_of_detail_step),
        }],
        AppIntent::DecreaseLevelOfDetailRequested => vec![AppCommand::SetLevelOfDetail {
            value: state
                .effective_level_of_detail()
                .saturating_sub(state.options.level_of_detail_step),
        }],
        AppIntent::SetLevelOfDetailRequested { value } => {
            vec![AppCommand::SetLevelOfDetail { value }]
        }
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearControlPoints],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::CurveKind;
    use glam::Vec2;

    #[test]
    fn delete_point_maps_to_select_then_delete() {
        let state = AppState::new();
        let position = Vec2::new(0.4, 0.6);
        let commands =
            map_intent_to_commands(&state, AppIntent::DeletePointRequested { position });

        assert_eq!(
            commands,
            vec![
                AppCommand::UpdateActivePoint {
                    position,
                    radius: state.options.active_radius,
                },
                AppCommand::DeleteActivePoint,
            ]
        );
    }

    #[test]
    fn pointer_move_uses_configured_radius() {
        let mut state = AppState::new();
        state.options.active_radius = 0.1;
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerMoved {
                position: Vec2::splat(0.5),
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::UpdateActivePoint { radius, .. }] if *radius == 0.1
        ));
    }

    #[test]
    fn cycle_uses_next_kind() {
        let mut state = AppState::new();
        state.curve_kind = CurveKind::BezierRecursiveSubdivision;
        let commands = map_intent_to_commands(&state, AppIntent::CycleCurveKindRequested);
        assert_eq!(
            commands,
            vec![AppCommand::SetCurveKind {
                kind: CurveKind::Linear
            }]
        );
    }

    #[test]
    fn level_of_detail_steps_use_option_step() {
        let mut state = AppState::new();
        state.level_of_detail = 10;
        state.options.level_of_detail_step = 5;

        assert_eq!(
            map_intent_to_commands(&state, AppIntent::IncreaseLevelOfDetailRequested),
            vec![AppCommand::SetLevelOfDetail { value: 15 }]
        );
        assert_eq!(
            map_intent_to_commands(&state, AppIntent::DecreaseLevelOfDetailRequested),
            vec![AppCommand::SetLevelOfDetail { value: 5 }]
        );
    }

    #[test]
    fn subdivision_steps_from_capped_depth() {
        let mut state = AppState::new();
        state.curve_kind = CurveKind::BezierRecursiveSubdivision;
        state.level_of_detail = 20;
        state.options.max_subdivision_depth = 10;

        assert_eq!(
            map_intent_to_commands(&state, AppIntent::DecreaseLevelOfDetailRequested),
            vec![AppCommand::SetLevelOfDetail { value: 9 }]
        );
        assert_eq!(
            map_intent_to_commands(&state, AppIntent::IncreaseLevelOfDetailRequested),
            vec![AppCommand::SetLevelOfDetail { value: 11 }]
        );
    }
}
