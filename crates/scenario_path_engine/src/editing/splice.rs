//! Lokale Änderungen mitten im Pfad: Verschieben, Löschen, Einfügen.
//!
//! Jede Operation berechnet zuerst alle Teilstücke und mutiert erst danach,
//! sodass ein fehlgeschlagener Pathfinder-Aufruf keine Spuren hinterlässt.

use super::{EditError, InsertOutcome, InvalidTargetReason, PathEditor};
use crate::core::{ActionKind, IdAllocator, Location, TriggerCondition, Waypoint, WaypointId};
use crate::routing::Router;

impl PathEditor {
    /// Verschiebt einen Wegpunkt an eine (bereits aufgelöste) Position.
    ///
    /// Berechnet nur die Teilstücke Vorgänger → Wegpunkt und Wegpunkt → Nachfolger
    /// neu (höchstens zwei Pathfinder-Aufrufe). Der Anker hat keinen Vorgänger
    /// und bleibt erster Pufferpunkt; der Spawn-Marker wandert mit ihm.
    pub fn move_waypoint(
        &mut self,
        id: WaypointId,
        location: Location,
        router: &dyn Router,
    ) -> Result<(), EditError> {
        self.ensure_editable()?;
        let (index, offset) = self
            .ledger
            .index_of(id)
            .ok_or(InvalidTargetReason::UnknownWaypoint(id))?;

        let predecessor = index
            .checked_sub(1)
            .and_then(|i| self.path.get(i))
            .map(|w| w.location);
        let successor = self.path.get(index + 1).map(|w| w.location);

        let mut points = match predecessor {
            Some(from) => {
                let segment = self.route(from, location, router)?;
                segment.points.into_iter().skip(1).collect::<Vec<_>>()
            }
            None => vec![location],
        };
        let own_run = points.len();

        let successor_run = match successor {
            Some(to) => {
                let segment = self.route(location, to, router)?;
                let run = segment.points.len() - 1;
                points.extend(segment.points.into_iter().skip(1));
                Some(run)
            }
            None => None,
        };

        let old_count = self.ledger.run(index).unwrap_or(0)
            + successor_run
                .and_then(|_| self.ledger.run(index + 1))
                .unwrap_or(0);
        self.splice(offset, old_count, points)?;

        self.ledger.set_run(index, own_run);
        if let Some(run) = successor_run {
            self.ledger.set_run(index + 1, run);
        }
        if let Some(waypoint) = self.path.get_mut(index) {
            waypoint.location = location;
        }
        if index == 0 {
            self.spawn.position = location.position;
        }
        self.commit_check()
    }

    /// Verschiebt den Anker, z.B. wenn die Entität selbst bewegt wird.
    pub fn move_anchor(&mut self, location: Location, router: &dyn Router) -> Result<(), EditError> {
        let Some(anchor) = self.path.anchor().map(|w| w.id) else {
            self.spawn.position = location.position;
            return Ok(());
        };
        self.move_waypoint(anchor, location, router)
    }

    /// Löscht einen Wegpunkt; der Anker ist geschützt.
    ///
    /// Mit Nachfolger wird Vorgänger → Nachfolger neu berechnet, sonst wird
    /// der Puffer um den Lauf des Wegpunkts gekürzt.
    pub fn delete_waypoint(&mut self, id: WaypointId, router: &dyn Router) -> Result<(), EditError> {
        self.ensure_editable()?;
        let (index, offset) = self
            .ledger
            .index_of(id)
            .ok_or(InvalidTargetReason::UnknownWaypoint(id))?;
        if index == 0 {
            return Err(EditError::IllegalDeletion);
        }

        let run = self.ledger.run(index).unwrap_or(0);
        let predecessor = self.path.get(index - 1).map(|w| w.location);
        let successor = self.path.get(index + 1).map(|w| w.location);

        match (predecessor, successor) {
            (Some(from), Some(to)) => {
                let segment = self.route(from, to, router)?;
                let bridge: Vec<Location> = segment.points.into_iter().skip(1).collect();
                let bridge_run = bridge.len();
                let old_count = run + self.ledger.run(index + 1).unwrap_or(0);
                self.splice(offset, old_count, bridge)?;
                self.ledger.set_run(index + 1, bridge_run);
            }
            _ => self.splice(offset, run, Vec::new())?,
        }

        self.path.remove(index);
        self.ledger.remove(index);
        log::debug!("Wegpunkt {} gelöscht", id);
        self.commit_check()
    }

    /// Klick auf den Pfad an Pufferindex `buffer_index`.
    ///
    /// Liegt der Index auf einem Wegpunkt, wird dieser ausgewählt. Sonst wird
    /// ein neuer Wegpunkt am Pufferpunkt eingefügt, vorläufig in den Ledger
    /// gesplittet und per Verschieben auf seine eigene Position exakt
    /// nachberechnet. Schlägt das fehl, wird der Einschub zurückgerollt.
    pub fn insert_mid_path(
        &mut self,
        buffer_index: usize,
        router: &dyn Router,
        ids: &mut IdAllocator,
    ) -> Result<InsertOutcome, EditError> {
        self.ensure_editable()?;
        let split = self
            .ledger
            .split_at(buffer_index)
            .ok_or(InvalidTargetReason::IndexOutOfRange {
                index: buffer_index,
                len: self.buffer.len(),
            })?;
        let run = self.ledger.run(split.index).unwrap_or(0);

        if split.offset + 1 == run {
            let id = self.path.get(split.index).map(|w| w.id).ok_or_else(|| {
                EditError::InvariantViolation(format!("Kein Wegpunkt an Position {}", split.index))
            })?;
            return Ok(InsertOutcome::Selected(id));
        }

        let location = self.buffer.get(buffer_index).copied().ok_or(
            InvalidTargetReason::IndexOutOfRange {
                index: buffer_index,
                len: self.buffer.len(),
            },
        )?;
        let triggers = self
            .path
            .get(split.index - 1)
            .map(|prev| vec![TriggerCondition::distance_to(prev.location, self.rules.trigger_distance)])
            .unwrap_or_default();

        let id: WaypointId = ids.allocate();
        let head = split.offset + 1;
        self.path.insert(
            split.index,
            Waypoint::new(id, location, ActionKind::MoveTo, triggers),
        );
        self.ledger.insert(split.index, id, head);
        self.ledger.set_run(split.index + 1, run - head);

        match self.move_waypoint(id, location, router) {
            Ok(()) => {
                log::debug!("Wegpunkt {} bei Pufferindex {} eingefügt", id, buffer_index);
                Ok(InsertOutcome::Inserted(id))
            }
            Err(err @ (EditError::InvariantViolation(_) | EditError::PathPoisoned(_))) => Err(err),
            Err(err) => {
                self.path.remove(split.index);
                self.ledger.remove(split.index);
                self.ledger.set_run(split.index, run);
                Err(err)
            }
        }
    }

    fn splice(
        &mut self,
        start: usize,
        old_count: usize,
        points: Vec<Location>,
    ) -> Result<(), EditError> {
        self.buffer
            .splice_range(start, old_count, points)
            .map_err(|err| {
                let err = EditError::InvariantViolation(err.to_string());
                self.poison(err.to_string());
                err
            })
    }
}
