//! Geometrie-Puffer: die flache Polylinie eines Pfads plus abgeleiteter Umriss.
//!
//! Alle Operationen sind O(betroffener Bereich); der Umriss wird nicht
//! automatisch nachgeführt, sondern vom Editor nach jeder erfolgreichen
//! Änderung über [`GeometryBuffer::refresh_outline`] neu aufgebaut.

use super::{Location, Outline};
use glam::Vec2;
use thiserror::Error;

/// Fehler bei Bereichszugriffen auf den Puffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferRangeError {
    /// Der angefragte Bereich liegt (teilweise) hinter dem Pufferende.
    #[error("Bereich {start}..{end} liegt außerhalb des Puffers (Länge {len})")]
    OutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Geordnete, indexierbare Punktfolge des gerenderten Pfads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    points: Vec<Location>,
    outline: Outline,
}

impl GeometryBuffer {
    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Puffer aus Punkten; der Umriss wird sofort aufgebaut.
    pub fn from_points(points: Vec<Location>) -> Self {
        let outline = Outline::from_points(&points);
        Self { points, outline }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn der Puffer leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt an Index.
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.points.get(index)
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// Ersetzt den Punkt an Index.
    pub fn set(&mut self, index: usize, location: Location) -> Result<(), BufferRangeError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(BufferRangeError::OutOfRange {
                start: index,
                end: index + 1,
                len,
            })?;
        *slot = location;
        Ok(())
    }

    /// Ändert die Länge; der Präfix bleibt erhalten, Wachstum wiederholt den letzten Punkt.
    pub fn resize(&mut self, len: usize) {
        let fill = self.points.last().copied().unwrap_or_default();
        self.points.resize(len, fill);
    }

    /// Hängt Punkte an.
    pub fn extend(&mut self, points: impl IntoIterator<Item = Location>) {
        self.points.extend(points);
    }

    /// Ersetzt `old_count` Punkte ab `start` durch `new_points`.
    ///
    /// Punkte davor bleiben unverändert, Punkte danach verschieben sich um
    /// `new_points.len() - old_count`.
    pub fn splice_range(
        &mut self,
        start: usize,
        old_count: usize,
        new_points: Vec<Location>,
    ) -> Result<(), BufferRangeError> {
        let end = start + old_count;
        if end > self.points.len() {
            return Err(BufferRangeError::OutOfRange {
                start,
                end,
                len: self.points.len(),
            });
        }
        self.points.splice(start..end, new_points);
        Ok(())
    }

    /// Index des nächstgelegenen Punkts (bei Gleichstand der erste).
    pub fn nearest_index(&self, pos: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let dist = point.position.distance_squared(pos);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Abgeleiteter Umriss für Hit-Tests.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Baut den Umriss aus den aktuellen Punkten neu auf.
    pub fn refresh_outline(&mut self) {
        self.outline = Outline::from_points(&self.points);
    }

    /// Leert Puffer und Umriss.
    pub fn clear(&mut self) {
        self.points.clear();
        self.outline = Outline::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(xs: &[f32]) -> GeometryBuffer {
        GeometryBuffer::from_points(xs.iter().map(|x| Location::xy(*x, 0.0)).collect())
    }

    fn xs(buffer: &GeometryBuffer) -> Vec<f32> {
        buffer.points().iter().map(|p| p.position.x).collect()
    }

    #[test]
    fn splice_replaces_range_and_shifts_tail() {
        let mut buf = buffer(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        buf.splice_range(1, 2, vec![Location::xy(9.0, 0.0)])
            .expect("gültiger Bereich");

        assert_eq!(xs(&buf), vec![0.0, 9.0, 3.0, 4.0]);
    }

    #[test]
    fn splice_out_of_range_is_rejected_without_change() {
        let mut buf = buffer(&[0.0, 1.0]);
        let result = buf.splice_range(1, 2, Vec::new());

        assert_eq!(
            result,
            Err(BufferRangeError::OutOfRange {
                start: 1,
                end: 3,
                len: 2
            })
        );
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn resize_repeats_last_point() {
        let mut buf = buffer(&[0.0, 1.0]);
        buf.resize(4);
        assert_eq!(xs(&buf), vec![0.0, 1.0, 1.0, 1.0]);

        buf.resize(1);
        assert_eq!(xs(&buf), vec![0.0]);
    }

    #[test]
    fn nearest_index_prefers_first_on_tie() {
        let buf = buffer(&[0.0, 2.0, 4.0]);

        assert_eq!(buf.nearest_index(Vec2::new(1.0, 0.0)), Some(0));
        assert_eq!(buf.nearest_index(Vec2::new(3.6, 0.0)), Some(2));
        assert_eq!(GeometryBuffer::new().nearest_index(Vec2::ZERO), None);
    }

    #[test]
    fn outline_follows_refresh() {
        let mut buf = buffer(&[0.0, 10.0]);
        buf.extend([Location::xy(10.0, 10.0)]);
        assert_eq!(buf.outline().len(), 2);

        buf.refresh_outline();
        assert_eq!(buf.outline().len(), 3);
        assert!(buf.outline().hit(Vec2::new(10.2, 5.0), 0.5));
    }
}
