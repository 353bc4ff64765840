//! Segment-Ledger: ordnet jedem Wegpunkt die Anzahl Pufferpunkte seines Teilpfads zu.
//!
//! Der Lauf (`run_length`) von Wegpunkt *i* umfasst alle Pufferpunkte nach
//! Wegpunkt *i-1* bis einschließlich der eigenen Position. Der Anker hat den
//! Lauf 1 (sein einzelner Startpunkt). Damit gilt `buffer.len() == total()`.

use super::WaypointId;
use std::ops::Range;

/// Ein Eintrag des Ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Zugehöriger Wegpunkt
    pub waypoint: WaypointId,
    /// Anzahl Pufferpunkte des Teilpfads, der an diesem Wegpunkt endet
    pub run_length: usize,
}

/// Ergebnis von [`SegmentLedger::split_at`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSplit {
    /// Logischer Segment-Index (Index des Wegpunkts, dessen Lauf den Pufferindex enthält)
    pub index: usize,
    /// Position innerhalb des Laufs (0-basiert)
    pub offset: usize,
}

/// Geordnete Lauflängen im Gleichschritt mit dem Pfad
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentLedger {
    entries: Vec<LedgerEntry>,
}

impl SegmentLedger {
    /// Erstellt einen leeren Ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Eintrag an logischer Position.
    pub fn get(&self, index: usize) -> Option<&LedgerEntry> {
        self.entries.get(index)
    }

    /// Lauflänge an logischer Position.
    pub fn run(&self, index: usize) -> Option<usize> {
        self.entries.get(index).map(|e| e.run_length)
    }

    /// Hängt einen Eintrag an.
    pub fn push(&mut self, waypoint: WaypointId, run_length: usize) {
        self.entries.push(LedgerEntry {
            waypoint,
            run_length,
        });
    }

    /// Fügt einen Eintrag an logischer Position ein.
    pub fn insert(&mut self, index: usize, waypoint: WaypointId, run_length: usize) {
        self.entries.insert(
            index,
            LedgerEntry {
                waypoint,
                run_length,
            },
        );
    }

    /// Entfernt den Eintrag an logischer Position.
    pub fn remove(&mut self, index: usize) -> Option<LedgerEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Setzt die Lauflänge eines Eintrags. Gibt `false` bei ungültigem Index zurück.
    pub fn set_run(&mut self, index: usize, run_length: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.run_length = run_length;
                true
            }
            None => false,
        }
    }

    /// Summe aller Lauflängen (= erwartete Pufferlänge).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.run_length).sum()
    }

    /// Logischer Index und kumulativer Pufferoffset (Start des Laufs) eines Wegpunkts.
    pub fn index_of(&self, waypoint: WaypointId) -> Option<(usize, usize)> {
        let mut offset = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.waypoint == waypoint {
                return Some((index, offset));
            }
            offset += entry.run_length;
        }
        None
    }

    /// Pufferbereich des Laufs an logischer Position.
    pub fn run_bounds(&self, index: usize) -> Option<Range<usize>> {
        let run = self.run(index)?;
        let start: usize = self.entries[..index].iter().map(|e| e.run_length).sum();
        Some(start..start + run)
    }

    /// Pufferindex, an dem der Wegpunkt an logischer Position selbst liegt.
    pub fn own_sample(&self, index: usize) -> Option<usize> {
        self.run_bounds(index)
            .and_then(|bounds| bounds.end.checked_sub(1))
    }

    /// Übersetzt einen Pufferindex in den logischen Segment-Index.
    pub fn split_at(&self, buffer_index: usize) -> Option<LedgerSplit> {
        let mut start = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            let end = start + entry.run_length;
            if buffer_index < end {
                return Some(LedgerSplit {
                    index,
                    offset: buffer_index - start,
                });
            }
            start = end;
        }
        None
    }
}
