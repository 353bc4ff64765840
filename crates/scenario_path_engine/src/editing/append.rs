//! Anhängen am Pfadende (Vorschau und Commit) inklusive Spurwechsel-Seeding.

use std::collections::BTreeSet;

use super::{AppendOutcome, EditError, InvalidTargetReason, PathEditor};
use crate::core::{
    ActionKind, IdAllocator, Location, TriggerCondition, Waypoint, WaypointId,
};
use crate::routing::{PathSegment, Router};
use glam::Vec2;

impl PathEditor {
    /// Löst eine Zeigerposition in eine Zielposition auf.
    ///
    /// Im Ignore-Graph-Modus wird die rohe Position übernommen, sonst gesnappt.
    pub fn resolve_target(&self, raw: Location, router: &dyn Router) -> Result<Location, EditError> {
        if self.ignore_graph {
            return Ok(raw);
        }
        router
            .resolve(raw)
            .ok_or(EditError::InvalidTarget(InvalidTargetReason::OffGraph))
    }

    /// Prüft ein aufgelöstes Ziel gegen Wegpunkt-Marker, Spawn-Marker und eigenen Pfad.
    pub(super) fn check_collisions(&self, target: Vec2) -> Result<(), InvalidTargetReason> {
        if let Some(id) = self.waypoint_at(target) {
            return Err(InvalidTargetReason::OccupiedByWaypoint(id));
        }
        if !self.path.is_empty() && self.spawn.contains(target) {
            return Err(InvalidTargetReason::OnSpawnMarker);
        }
        if self.buffer.len() >= 2 && self.buffer.outline().hit(target, self.rules.path_hit_width) {
            return Err(InvalidTargetReason::OnOwnPath);
        }
        Ok(())
    }

    /// Hängt einen Wegpunkt am Pfadende an.
    ///
    /// Mit `preview` wird nur die Vorschau aktualisiert; Pfad, Ledger und
    /// Puffer bleiben unberührt und es werden keine IDs vergeben.
    pub fn append(
        &mut self,
        raw: Location,
        preview: bool,
        router: &dyn Router,
        ids: &mut IdAllocator,
    ) -> Result<AppendOutcome, EditError> {
        self.ensure_editable()?;

        let target = match self.resolve_target(raw, router) {
            Ok(target) => target,
            Err(err) => {
                if preview {
                    self.preview.clear();
                }
                return Err(err);
            }
        };

        if let Err(reason) = self.check_collisions(target.position) {
            if preview {
                self.preview.line.clear();
                self.preview.marker =
                    (reason == InvalidTargetReason::OnOwnPath).then_some(target);
            }
            return Err(reason.into());
        }

        let Some(last) = self.path.last().map(|w| w.location) else {
            if preview {
                self.preview.line.clear();
                self.preview.marker = Some(target);
                return Ok(AppendOutcome::Previewed);
            }
            let id = self.place_anchor(target, ids);
            self.commit_check()?;
            return Ok(AppendOutcome::Committed(vec![id]));
        };

        let segment = match self.route(last, target, router) {
            Ok(segment) => segment,
            Err(err) => {
                if preview {
                    self.preview.clear();
                }
                return Err(err);
            }
        };

        if preview {
            self.preview.line = segment.points;
            self.preview.marker = Some(target);
            return Ok(AppendOutcome::Previewed);
        }

        let created = self.commit_segment(segment, ids);
        self.preview.clear();
        self.commit_check()?;
        log::debug!("{} Wegpunkt(e) angehängt", created.len());
        Ok(AppendOutcome::Committed(created))
    }

    /// Aktualisiert den Geister-Marker im Bearbeitungsmodus.
    ///
    /// Liegt `pos` auf dem Pfad-Umriss, steht der Marker auf dem nächsten
    /// Pufferpunkt, sonst wird er ausgeblendet.
    pub fn hover(&mut self, pos: Vec2) {
        self.preview.line.clear();
        self.preview.marker = self
            .click_path(pos)
            .and_then(|index| self.buffer.get(index).copied());
    }

    fn place_anchor(&mut self, target: Location, ids: &mut IdAllocator) -> WaypointId {
        self.buffer.clear();
        self.buffer.extend([target]);
        self.push_waypoint(target, ActionKind::MoveTo, 1, ids)
    }

    /// Übernimmt ein Teilstück `last → target` in Pfad, Ledger und Puffer.
    ///
    /// Jeder Spurwechsel-Index `k` erzeugt Spurwechsel-Wegpunkte an den
    /// Punkten `k` und `k + 1`, sofern diese strikt zwischen Start und Ziel liegen.
    fn commit_segment(&mut self, segment: PathSegment, ids: &mut IdAllocator) -> Vec<WaypointId> {
        let last_index = segment.points.len() - 1;
        let mut cuts: BTreeSet<usize> = BTreeSet::new();
        for &k in &segment.lane_changes {
            for cut in [k, k + 1] {
                if cut > 0 && cut < last_index {
                    cuts.insert(cut);
                }
            }
        }

        let mut created = Vec::with_capacity(cuts.len() + 1);
        let mut previous = 0;
        for boundary in cuts.into_iter().chain(std::iter::once(last_index)) {
            let action = if boundary == last_index {
                ActionKind::MoveTo
            } else {
                ActionKind::LaneChange
            };
            self.buffer
                .extend(segment.points[previous + 1..=boundary].iter().copied());
            let location = segment.points[boundary];
            created.push(self.push_waypoint(location, action, boundary - previous, ids));
            previous = boundary;
        }
        created
    }

    fn push_waypoint(
        &mut self,
        location: Location,
        action: ActionKind,
        run_length: usize,
        ids: &mut IdAllocator,
    ) -> WaypointId {
        let triggers = self
            .path
            .last()
            .map(|prev| vec![TriggerCondition::distance_to(prev.location, self.rules.trigger_distance)])
            .unwrap_or_default();
        let id: WaypointId = ids.allocate();
        self.path.push(Waypoint::new(id, location, action, triggers));
        self.ledger.push(id, run_length);
        id
    }
}
