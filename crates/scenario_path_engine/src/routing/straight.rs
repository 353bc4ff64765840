//! Freies Routing: gerade Strecken mit gleichmäßigem Punktabstand.

use super::{PathSegment, Pathfinder, RoutingError, Snapper};
use crate::core::location::assign_headings;
use crate::core::Location;
use crate::shared::options::FREE_SAMPLE_SPACING;

/// Berechnet die gleichmäßig verteilten Punkte einer geraden Strecke.
///
/// Gibt `segment_count + 1` Punkte zurück (inkl. Start und Ende), Start und
/// Ende exakt. Bei `distance < EPSILON` wird nur `[from]` zurückgegeben.
pub fn sample_line(from: Location, to: Location, max_segment_length: f32) -> Vec<Location> {
    let distance = from.distance(&to);
    if distance < f32::EPSILON {
        return vec![from];
    }
    let spacing = if max_segment_length > 0.0 {
        max_segment_length
    } else {
        FREE_SAMPLE_SPACING
    };
    let segment_count = (distance / spacing).ceil().max(1.0) as usize;

    let mut points: Vec<Location> = (0..=segment_count)
        .map(|i| {
            Location::new(
                from.position
                    .lerp(to.position, i as f32 / segment_count as f32),
            )
        })
        .collect();
    points[0] = from;
    points[segment_count] = to;
    assign_headings(&mut points);
    points
}

/// Router ohne Straßengraph: jede Position ist gültig, Pfade sind Geraden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLineRouter {
    /// Maximaler Abstand zwischen zwei Punkten (Meter)
    pub spacing: f32,
}

impl StraightLineRouter {
    /// Erstellt einen Router mit gegebenem Punktabstand.
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self::new(FREE_SAMPLE_SPACING)
    }
}

impl Pathfinder for StraightLineRouter {
    fn find_path(
        &self,
        from: Location,
        to: Location,
        _ignore_graph: bool,
    ) -> Result<PathSegment, RoutingError> {
        Ok(PathSegment::plain(sample_line(from, to, self.spacing)))
    }
}

impl Snapper for StraightLineRouter {
    fn resolve(&self, raw: Location) -> Option<Location> {
        Some(raw)
    }
}
