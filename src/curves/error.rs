//! Fehlertypen der Kurven-Auswertung.

use thiserror::Error;

/// Result-Typ für Kurven-Auswertungen.
pub type CurveResult<T> = Result<T, CurveError>;

/// Fehler bei der Kurven-Auswertung.
///
/// Zu wenige Kontrollpunkte sind kein Fehler (die Auswertung liefert dann
/// einfach keine Kurvensegmente). Nur ungültige Parameter werden gemeldet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Parameter außerhalb des gültigen Bereichs (z.B. Level-of-Detail <= 0).
    #[error("ungültiger Parameter `{parameter}`: {value} ({reason})")]
    InvalidParameter {
        parameter: &'static str,
        value: i32,
        reason: &'static str,
    },
}

/// Prüft ein Level-of-Detail für stichprobenbasierte Verfahren (muss >= 1 sein).
pub(crate) fn positive_level_of_detail(level_of_detail: i32) -> CurveResult<u32> {
    u32::try_from(level_of_detail)
        .ok()
        .filter(|&steps| steps > 0)
        .ok_or(CurveError::InvalidParameter {
            parameter: "level_of_detail",
            value: level_of_detail,
            reason: "muss mindestens 1 sein",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative() {
        assert!(positive_level_of_detail(0).is_err());
        assert!(positive_level_of_detail(-3).is_err());
        assert_eq!(positive_level_of_detail(8), Ok(8));
    }

    #[test]
    fn error_message_names_parameter() {
        let err = positive_level_of_detail(0).unwrap_err();
        assert!(err.to_string().contains("level_of_detail"));
    }
}
