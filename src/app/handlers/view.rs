//! Handler für Darstellungsparameter und Anwendungssteuerung.

use crate::app::AppState;
use crate::curves::CurveKind;

/// Wechselt die Kurvenvariante.
pub fn set_curve_kind(state: &mut AppState, kind: CurveKind) {
    if state.curve_kind != kind {
        log::info!("Kurvenvariante: {} -> {}", state.curve_kind, kind);
        state.curve_kind = kind;
    }
}

/// Setzt das Level-of-Detail, begrenzt auf `1..=max_level_of_detail`.
pub fn set_level_of_detail(state: &mut AppState, value: i32) {
    let clamped = state.options.clamp_level_of_detail(value);
    if clamped != value {
        log::debug!("Level-of-Detail {} auf {} begrenzt", value, clamped);
    }
    state.level_of_detail = clamped;
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
