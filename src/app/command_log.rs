//! Begrenztes Protokoll der ausgeführten Commands (Status-Bar und Tests).

use super::AppCommand;

/// Obergrenze gehaltener Einträge; beim Überlauf fällt die ältere Hälfte weg.
const MAX_ENTRIES: usize = 1000;

/// Ausgeführte Commands in Reihenfolge plus Gesamtzähler.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    total: u64,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
        self.total += 1;
    }

    /// Anzahl aller jemals protokollierten Commands, auch verworfener.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Zuletzt ausgeführter Command, der Punkte oder Darstellung geändert hat.
    pub fn last_edit(&self) -> Option<&AppCommand> {
        self.entries.iter().rev().find(|command| command.is_edit())
    }

    /// Gehaltene Einträge, älteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
