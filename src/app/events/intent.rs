use crate::curves::CurveKind;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen und Deltas sind bereits normalisiert (`[0,1]²`, Ursprung unten links).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger wurde ohne gedrückte Taste bewegt (aktiven Punkt aktualisieren)
    PointerMoved { position: Vec2 },
    /// Neuen Kontrollpunkt an Position setzen
    AddPointRequested { position: Vec2 },
    /// Kontrollpunkt unter der Position selektieren und löschen
    DeletePointRequested { position: Vec2 },
    /// Aktiven Kontrollpunkt löschen (Tastatur)
    DeleteActivePointRequested,
    /// Aktiven Kontrollpunkt um Delta verschieben
    DragActivePointRequested { delta: Vec2 },
    /// Kurvenvariante wählen
    SetCurveKindRequested { kind: CurveKind },
    /// Zur nächsten Kurvenvariante wechseln
    CycleCurveKindRequested,
    /// Level-of-Detail um einen Schritt erhöhen
    IncreaseLevelOfDetailRequested,
    /// Level-of-Detail um einen Schritt verringern
    DecreaseLevelOfDetailRequested,
    /// Level-of-Detail direkt setzen (Slider)
    SetLevelOfDetailRequested { value: i32 },
    /// Alle Kontrollpunkte entfernen
    ClearPointsRequested,
    /// Anwendung beenden
    ExitRequested,
}
