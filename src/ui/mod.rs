//! UI-Komponenten: Toolbar, Status-Bar, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Panels liefern `AppIntent`s zurück und mutieren den State nie direkt.
pub mod status;
pub mod toolbar;

pub use input::{normalized_to_screen, screen_delta_to_normalized, screen_to_normalized, InputState};
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
