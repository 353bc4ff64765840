//! Geordnete Wegpunktfolge: das semantische Modell, das exportiert wird.

use super::{Waypoint, WaypointId};
use serde::Serialize;

/// Pfad einer Entität. Einfügereihenfolge = Fahrreihenfolge.
///
/// Der erste Wegpunkt ist der Anker (Spawn-Punkt). Mutationen laufen
/// ausschließlich über den `PathEditor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Wegpunkte.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt `true` zurück, solange noch kein Anker gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Der Anker (erster Wegpunkt).
    pub fn anchor(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Der letzte Wegpunkt.
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Wegpunkt an logischer Position.
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Sucht einen Wegpunkt anhand seiner ID.
    pub fn find(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Logische Position eines Wegpunkts.
    pub fn position_of(&self, id: WaypointId) -> Option<usize> {
        self.waypoints.iter().position(|w| w.id == id)
    }

    /// Iterator in Fahrreihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    /// Read-only Sicht auf alle Wegpunkte.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Waypoint> {
        self.waypoints.get_mut(index)
    }

    pub(crate) fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    pub(crate) fn insert(&mut self, index: usize, waypoint: Waypoint) {
        self.waypoints.insert(index, waypoint);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Waypoint {
        self.waypoints.remove(index)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
