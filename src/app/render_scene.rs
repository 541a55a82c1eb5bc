//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use anyhow::Context;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Wertet die aktive Kurvenvariante frisch aus; ein unveränderter State
/// ergibt eine identische Szene.
pub fn build(state: &AppState) -> anyhow::Result<RenderScene> {
    let level_of_detail = state.effective_level_of_detail();
    let output = state
        .curve_kind
        .evaluate(&state.control_points, level_of_detail)
        .with_context(|| format!("Auswertung von {} fehlgeschlagen", state.curve_kind))?;

    Ok(RenderScene {
        output,
        curve_kind: state.curve_kind,
        level_of_detail,
        point_count: state.control_points.len(),
        active_index: state.control_points.active_index(),
        options: state.options.clone(),
    })
}
