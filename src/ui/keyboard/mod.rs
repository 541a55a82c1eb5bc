//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::curves::CurveKind;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_q_pressed, key_c_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::C),
        )
    });

    // Ctrl+Q = Beenden
    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    // C = alle Kontrollpunkte entfernen
    if key_c_pressed && !modifiers.command {
        events.push(AppIntent::ClearPointsRequested);
    }

    // Variantenwahl 1–4 (Reihenfolge wie `CurveKind::ALL`)
    let kind_keys = [
        egui::Key::Num1,
        egui::Key::Num2,
        egui::Key::Num3,
        egui::Key::Num4,
    ];
    if !modifiers.command {
        for (key, kind) in kind_keys.into_iter().zip(CurveKind::ALL) {
            if ui.input(|i| i.key_pressed(key)) {
                events.push(AppIntent::SetCurveKindRequested { kind });
            }
        }
    }

    let (key_tab_pressed, key_plus_pressed, key_minus_pressed, key_del_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Tab),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            )
        });

    if key_tab_pressed {
        events.push(AppIntent::CycleCurveKindRequested);
    }

    if key_plus_pressed && !modifiers.command {
        events.push(AppIntent::IncreaseLevelOfDetailRequested);
    }
    if key_minus_pressed && !modifiers.command {
        events.push(AppIntent::DecreaseLevelOfDetailRequested);
    }

    if key_del_pressed {
        events.push(AppIntent::DeleteActivePointRequested);
    }

    events
}
