//! Verlauf der zuletzt ausgeführten Commands, u. a. für die Replay-Zusammenfassung.

use std::collections::VecDeque;

use super::AppCommand;

/// Ringpuffer der letzten Commands plus Gesamtzähler seit Sitzungsbeginn.
///
/// Vorschau und Drag erzeugen pro Mausbewegung einen Command, daher wird nur ein
/// Fenster gehalten; `total` zählt trotzdem jeden Command.
#[derive(Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    const WINDOW: usize = 512;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == Self::WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl aller seit Sitzungsbeginn ausgeführten Commands.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Gehaltene Commands, älteste zuerst.
    pub fn recent(&self) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter()
    }
}
