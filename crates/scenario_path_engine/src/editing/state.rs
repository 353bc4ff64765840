//! Zustand des Pfad-Editors und Invarianten-Prüfung.

use super::{EditError, EditMode, InvalidTargetReason, PathRules, SpawnMarker};
use crate::core::{GeometryBuffer, Location, Path, SegmentLedger, WaypointId};
use crate::routing::{PathSegment, Router, RoutingError};
use glam::Vec2;

/// Vorschau für das Zeichnen: Geisterlinie zum Zeiger und Marker an der Zielposition.
///
/// Wird nie in Pfad, Ledger oder Puffer übernommen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPreview {
    /// Letzter Wegpunkt gefolgt vom (gekürzten) Teilpfad zum Ziel
    pub line: Vec<Location>,
    /// Position des Geister-Markers
    pub marker: Option<Location>,
}

impl PathPreview {
    /// Entfernt Linie und Marker.
    pub fn clear(&mut self) {
        self.line.clear();
        self.marker = None;
    }
}

/// Editor für genau einen Pfad.
///
/// Besitzt Pfad, Ledger und Puffer exklusiv; alle Änderungen laufen über
/// die öffentlichen Operationen.
#[derive(Debug, Clone)]
pub struct PathEditor {
    pub(super) mode: EditMode,
    pub(super) path: Path,
    pub(super) ledger: SegmentLedger,
    pub(super) buffer: GeometryBuffer,
    pub(super) preview: PathPreview,
    pub(super) spawn: SpawnMarker,
    pub(super) ignore_graph: bool,
    pub(super) rules: PathRules,
    pub(super) poisoned: Option<String>,
}

impl PathEditor {
    /// Erstellt einen leeren Editor im Zustand `Building`.
    pub fn new(spawn: SpawnMarker, ignore_graph: bool, rules: PathRules) -> Self {
        Self {
            mode: EditMode::Building,
            path: Path::new(),
            ledger: SegmentLedger::new(),
            buffer: GeometryBuffer::new(),
            preview: PathPreview::default(),
            spawn,
            ignore_graph,
            rules,
            poisoned: None,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ledger(&self) -> &SegmentLedger {
        &self.ledger
    }

    pub fn buffer(&self) -> &GeometryBuffer {
        &self.buffer
    }

    pub fn preview(&self) -> &PathPreview {
        &self.preview
    }

    pub fn spawn(&self) -> &SpawnMarker {
        &self.spawn
    }

    pub fn ignore_graph(&self) -> bool {
        self.ignore_graph
    }

    pub fn rules(&self) -> &PathRules {
        &self.rules
    }

    /// Grund der Sperre nach einer Invariantenverletzung.
    pub fn poison_reason(&self) -> Option<&str> {
        self.poisoned.as_deref()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    /// Schaltet den Ignore-Graph-Modus um (gilt für alle künftigen Teilstücke).
    pub fn set_ignore_graph(&mut self, ignore_graph: bool) {
        self.ignore_graph = ignore_graph;
    }

    pub fn set_rules(&mut self, rules: PathRules) {
        self.rules = rules;
    }

    pub fn set_spawn_radius(&mut self, radius: f32) {
        self.spawn.radius = radius;
    }

    /// Beendet das Zeichnen (`Building` → `Editing`).
    pub fn finish(&mut self) {
        if self.mode == EditMode::Building {
            log::debug!("Pfad abgeschlossen mit {} Wegpunkten", self.path.len());
        }
        self.mode = EditMode::Editing;
        self.preview.clear();
    }

    /// Der fertige Pfad für den Export; `None` solange gezeichnet wird,
    /// der Pfad leer ist oder der Editor gesperrt ist.
    pub fn finished_path(&self) -> Option<&Path> {
        (self.mode == EditMode::Editing && !self.path.is_empty() && self.poisoned.is_none())
            .then_some(&self.path)
    }

    /// Entfernt die Zeichen-Vorschau.
    pub fn clear_preview(&mut self) {
        self.preview.clear();
    }

    /// Wegpunkt, dessen Marker `pos` trifft.
    pub fn waypoint_at(&self, pos: Vec2) -> Option<WaypointId> {
        self.path
            .iter()
            .find(|w| w.location.position.distance(pos) <= self.rules.marker_radius)
            .map(|w| w.id)
    }

    /// Pufferindex unter dem Zeiger, falls dieser auf dem Pfad-Umriss liegt.
    pub fn click_path(&self, pos: Vec2) -> Option<usize> {
        if self.buffer.len() < 2 || !self.buffer.outline().hit(pos, self.rules.path_hit_width) {
            return None;
        }
        self.buffer.nearest_index(pos)
    }

    /// Prüft Pfad, Ledger und Puffer auf Konsistenz.
    pub fn verify(&self) -> Result<(), EditError> {
        if self.path.len() != self.ledger.len() {
            return Err(EditError::InvariantViolation(format!(
                "Pfad hat {} Wegpunkte, Ledger {} Einträge",
                self.path.len(),
                self.ledger.len()
            )));
        }
        if self.buffer.len() != self.ledger.total() {
            return Err(EditError::InvariantViolation(format!(
                "Pufferlänge {} ≠ Ledger-Summe {}",
                self.buffer.len(),
                self.ledger.total()
            )));
        }

        let mut end = 0;
        for (index, (waypoint, entry)) in self.path.iter().zip(self.ledger.entries()).enumerate() {
            if waypoint.id != entry.waypoint {
                return Err(EditError::InvariantViolation(format!(
                    "Ledger-Eintrag {} gehört zu {}, erwartet {}",
                    index, entry.waypoint, waypoint.id
                )));
            }
            if entry.run_length == 0 || (index == 0 && entry.run_length != 1) {
                return Err(EditError::InvariantViolation(format!(
                    "Ungültige Lauflänge {} für {}",
                    entry.run_length, waypoint.id
                )));
            }
            end += entry.run_length;
            let own = self.buffer.get(end - 1).map(|p| p.position);
            if own != Some(waypoint.location.position) {
                return Err(EditError::InvariantViolation(format!(
                    "Pufferpunkt {} weicht von {} ab",
                    end - 1,
                    waypoint.id
                )));
            }
        }
        Ok(())
    }

    /// Baut den Puffer Teilstück für Teilstück aus den Wegpunkten neu auf
    /// und hebt die Sperre auf.
    pub fn rebuild(&mut self, router: &dyn Router) -> Result<(), EditError> {
        let mut points = Vec::new();
        let mut runs = Vec::with_capacity(self.path.len());
        let mut previous: Option<Location> = None;

        for waypoint in self.path.iter() {
            match previous {
                None => {
                    points.push(waypoint.location);
                    runs.push(1);
                }
                Some(from) => {
                    let segment = self.route(from, waypoint.location, router)?;
                    runs.push(segment.points.len() - 1);
                    points.extend(segment.points.into_iter().skip(1));
                }
            }
            previous = Some(waypoint.location);
        }

        self.buffer = GeometryBuffer::from_points(points);
        for (index, run) in runs.into_iter().enumerate() {
            self.ledger.set_run(index, run);
        }
        self.poisoned = None;
        log::info!("Pfad neu aufgebaut: {} Pufferpunkte", self.buffer.len());
        self.commit_check()
    }

    /// Fragt den Pathfinder an und normalisiert das Ergebnis auf exakte Endpunkte.
    pub(super) fn route(
        &self,
        from: Location,
        to: Location,
        router: &dyn Router,
    ) -> Result<PathSegment, EditError> {
        let mut segment = router.find_path(from, to, self.ignore_graph)?;
        let last = segment
            .points
            .len()
            .checked_sub(1)
            .ok_or(EditError::NoPathFound(RoutingError::EmptyResult))?;
        if last == 0 {
            return Err(InvalidTargetReason::ZeroLength.into());
        }
        segment.points[0] = from;
        segment.points[last] = to;
        Ok(segment)
    }

    pub(super) fn ensure_editable(&self) -> Result<(), EditError> {
        match &self.poisoned {
            Some(reason) => Err(EditError::PathPoisoned(reason.clone())),
            None => Ok(()),
        }
    }

    pub(super) fn poison(&mut self, reason: String) {
        log::error!("Pfad gesperrt: {}", reason);
        self.poisoned = Some(reason);
    }

    /// Abschluss jeder Mutation: Umriss neu aufbauen und Invarianten prüfen.
    pub(super) fn commit_check(&mut self) -> Result<(), EditError> {
        self.buffer.refresh_outline();
        if let Err(err) = self.verify() {
            self.poison(err.to_string());
            return Err(err);
        }
        Ok(())
    }
}
