//! IDs für Wegpunkte und Entitäten sowie deren Vergabe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ID eines Wegpunkts (eindeutig innerhalb einer Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaypointId(pub u64);

/// ID einer Szenario-Entität (Fahrzeug, Fußgänger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl From<u64> for WaypointId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wp#{}", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Vergibt fortlaufende IDs.
///
/// Gehört dem Session-Kontext und wird an alle Operationen übergeben,
/// die neue Wegpunkte oder Entitäten anlegen.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Erstellt einen Allocator, der bei 1 beginnt.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Erstellt einen Allocator mit vorgegebenem Startwert (z.B. nach dem Laden).
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Vergibt die nächste ID.
    pub fn allocate<T: From<u64>>(&mut self) -> T {
        let id = self.next;
        self.next += 1;
        T::from(id)
    }

    /// Gibt die als nächstes vergebene Roh-ID zurück, ohne sie zu verbrauchen.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_hands_out_increasing_ids_across_types() {
        let mut ids = IdAllocator::new();
        let entity: EntityId = ids.allocate();
        let waypoint: WaypointId = ids.allocate();

        assert_eq!(entity, EntityId(1));
        assert_eq!(waypoint, WaypointId(2));
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn starting_at_zero_is_clamped() {
        let mut ids = IdAllocator::starting_at(0);
        let id: WaypointId = ids.allocate();
        assert_eq!(id, WaypointId(1));
    }
}
