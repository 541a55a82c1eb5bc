use crate::curves::CurveKind;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Aktiven Punkt anhand der Zeigerposition neu bestimmen
    UpdateActivePoint { position: Vec2, radius: f32 },
    /// Kontrollpunkt anhängen (nur ohne aktive Selektion)
    AddPoint { position: Vec2 },
    /// Aktiven Kontrollpunkt löschen
    DeleteActivePoint,
    /// Aktiven Kontrollpunkt verschieben
    MoveActivePoint { delta: Vec2 },
    /// Kurvenvariante setzen
    SetCurveKind { kind: CurveKind },
    /// Level-of-Detail setzen (wird auf den gültigen Bereich begrenzt)
    SetLevelOfDetail { value: i32 },
    /// Alle Kontrollpunkte entfernen
    ClearControlPoints,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzbezeichnung für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::UpdateActivePoint { .. } => "Punkt aktivieren",
            AppCommand::AddPoint { .. } => "Punkt hinzufügen",
            AppCommand::DeleteActivePoint => "Punkt löschen",
            AppCommand::MoveActivePoint { .. } => "Punkt verschieben",
            AppCommand::SetCurveKind { .. } => "Variante wechseln",
            AppCommand::SetLevelOfDetail { .. } => "LOD ändern",
            AppCommand::ClearControlPoints => "Alle Punkte entfernen",
            AppCommand::RequestExit => "Beenden",
        }
    }

    /// `true` für Commands, die Punkte oder Darstellung ändern.
    ///
    /// Hover-Aktualisierungen fallen bei jeder Mausbewegung an und zählen nicht.
    pub fn is_edit(&self) -> bool {
        !matches!(self, AppCommand::UpdateActivePoint { .. })
    }
}
