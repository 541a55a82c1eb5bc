use curve_modeling_editor::{AppCommand, AppController, AppIntent, AppState, CurveKind};
use glam::Vec2;

fn add(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::AddPointRequested {
                position: Vec2::new(x, y),
            },
        )
        .expect("AddPointRequested sollte ohne Fehler durchlaufen");
}

fn hover(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerMoved {
                position: Vec2::new(x, y),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
}

#[test]
fn test_add_points_appends_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    add(&mut controller, &mut state, 0.1, 0.1);
    add(&mut controller, &mut state, 0.5, 0.9);
    add(&mut controller, &mut state, 0.9, 0.1);

    assert_eq!(
        state.control_points.positions(),
        vec![
            Vec2::new(0.1, 0.1),
            Vec2::new(0.5, 0.9),
            Vec2::new(0.9, 0.1)
        ]
    );
    assert!(!state.control_points.has_active());
}

#[test]
fn test_hover_selects_and_blocks_add() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.3, 0.3);

    hover(&mut controller, &mut state, 0.305, 0.3);
    assert_eq!(state.control_points.active_index(), Some(0));

    add(&mut controller, &mut state, 0.305, 0.3);
    assert_eq!(state.point_count(), 1);

    // Weg vom Punkt: Selektion wird aufgehoben, Hinzufügen wieder möglich
    hover(&mut controller, &mut state, 0.8, 0.8);
    assert_eq!(state.control_points.active_index(), None);
    add(&mut controller, &mut state, 0.8, 0.8);
    assert_eq!(state.point_count(), 2);
}

#[test]
fn test_drag_moves_active_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.5, 0.5);
    hover(&mut controller, &mut state, 0.5, 0.5);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragActivePointRequested {
                delta: Vec2::new(0.125, -0.25),
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");

    assert_eq!(state.control_points.positions(), vec![Vec2::new(0.625, 0.25)]);
    assert_eq!(state.control_points.active_index(), Some(0));
}

#[test]
fn test_drag_without_selection_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.5, 0.5);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragActivePointRequested {
                delta: Vec2::new(0.1, 0.1),
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");

    assert_eq!(state.control_points.positions(), vec![Vec2::new(0.5, 0.5)]);
}

#[test]
fn test_secondary_click_deletes_point_under_pointer() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.2, 0.2);
    add(&mut controller, &mut state, 0.7, 0.7);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeletePointRequested {
                position: Vec2::new(0.701, 0.7),
            },
        )
        .expect("DeletePointRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.control_points.positions(), vec![Vec2::new(0.2, 0.2)]);
    assert!(!state.control_points.has_active());

    let tail: Vec<_> = state.command_log.entries().iter().rev().take(2).collect();
    assert!(matches!(tail[0], AppCommand::DeleteActivePoint));
    assert!(matches!(tail[1], AppCommand::UpdateActivePoint { .. }));
}

#[test]
fn test_delete_active_twice_second_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.2, 0.2);
    add(&mut controller, &mut state, 0.7, 0.7);
    hover(&mut controller, &mut state, 0.2, 0.2);

    controller
        .handle_intent(&mut state, AppIntent::DeleteActivePointRequested)
        .expect("Löschen sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 1);

    controller
        .handle_intent(&mut state, AppIntent::DeleteActivePointRequested)
        .expect("Zweites Löschen sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_clear_removes_all_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.2, 0.2);
    add(&mut controller, &mut state, 0.7, 0.7);
    hover(&mut controller, &mut state, 0.7, 0.7);

    controller
        .handle_intent(&mut state, AppIntent::ClearPointsRequested)
        .expect("Clear sollte ohne Fehler durchlaufen");

    assert!(state.control_points.is_empty());
    assert_eq!(state.control_points.active_index(), None);
}

#[test]
fn test_curve_kind_selection_and_cycle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetCurveKindRequested {
                kind: CurveKind::UniformCubicBSpline,
            },
        )
        .expect("Variantenwechsel sollte ohne Fehler durchlaufen");
    assert_eq!(state.curve_kind, CurveKind::UniformCubicBSpline);

    controller
        .handle_intent(&mut state, AppIntent::CycleCurveKindRequested)
        .expect("Zyklus sollte ohne Fehler durchlaufen");
    assert_eq!(state.curve_kind, CurveKind::BezierRecursiveSubdivision);
}

#[test]
fn test_level_of_detail_is_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SetLevelOfDetailRequested { value: 1 })
        .expect("LOD setzen sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::DecreaseLevelOfDetailRequested)
        .expect("LOD verringern sollte ohne Fehler durchlaufen");
    assert_eq!(state.level_of_detail, 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetLevelOfDetailRequested { value: i32::MAX },
        )
        .expect("LOD setzen sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::IncreaseLevelOfDetailRequested)
        .expect("LOD erhöhen sollte ohne Fehler durchlaufen");
    assert_eq!(state.level_of_detail, state.options.max_level_of_detail);
}

#[test]
fn test_render_scene_reflects_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, 0.0, 0.0);
    add(&mut controller, &mut state, 1.0, 1.0);
    hover(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::SetLevelOfDetailRequested { value: 4 })
        .expect("LOD setzen sollte ohne Fehler durchlaufen");

    let scene = controller
        .build_render_scene(&state)
        .expect("Render-Szene sollte gebaut werden");

    assert_eq!(scene.curve_kind, CurveKind::BezierDeCasteljau);
    assert_eq!(scene.point_count, 2);
    assert_eq!(scene.active_index, Some(1));
    assert_eq!(scene.output.polygon_segments().count(), 1);
    assert_eq!(scene.output.curve_segments().count(), 4);

    let again = controller
        .build_render_scene(&state)
        .expect("Render-Szene sollte gebaut werden");
    assert_eq!(scene.output, again.output);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
