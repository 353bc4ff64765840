//! Abgeleitete Hit-Test-Form des Geometrie-Puffers.

use super::Location;
use glam::Vec2;

/// Polylinien-Umriss mit Bounding-Box für schnelle Treffer-Vorfilterung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    points: Vec<Vec2>,
    min: Vec2,
    max: Vec2,
}

impl Outline {
    /// Baut den Umriss aus den Pufferpunkten.
    pub fn from_points(points: &[Location]) -> Self {
        let points: Vec<Vec2> = points.iter().map(|p| p.position).collect();
        let (min, max) = points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        Self { points, min, max }
    }

    /// Gibt `true` zurück, wenn der Umriss keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der Stützpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Bounding-Box `(min, max)`, `None` bei leerem Umriss.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        (!self.points.is_empty()).then_some((self.min, self.max))
    }

    /// Kürzeste Distanz von `pos` zur Polylinie.
    ///
    /// Ein einzelner Punkt degeneriert zur Punktdistanz; leer → `f32::INFINITY`.
    pub fn distance_to(&self, pos: Vec2) -> f32 {
        match self.points.as_slice() {
            [] => f32::INFINITY,
            [single] => single.distance(pos),
            points => points
                .windows(2)
                .map(|w| distance_to_segment(pos, w[0], w[1]))
                .fold(f32::INFINITY, f32::min),
        }
    }

    /// Prüft ob `pos` höchstens `half_width` von der Polylinie entfernt liegt.
    pub fn hit(&self, pos: Vec2, half_width: f32) -> bool {
        let Some((min, max)) = self.bounds() else {
            return false;
        };
        let margin = Vec2::splat(half_width);
        let (min, max) = (min - margin, max + margin);
        if pos.x < min.x || pos.y < min.y || pos.x > max.x || pos.y > max.y {
            return false;
        }
        self.distance_to(pos) <= half_width
    }
}

fn distance_to_segment(pos: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return pos.distance(a);
    }
    let t = ((pos - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    pos.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn l_shape() -> Outline {
        Outline::from_points(&[
            Location::xy(0.0, 0.0),
            Location::xy(10.0, 0.0),
            Location::xy(10.0, 10.0),
        ])
    }

    #[test]
    fn distance_measures_closest_segment() {
        let outline = l_shape();

        assert_relative_eq!(outline.distance_to(Vec2::new(5.0, 2.0)), 2.0);
        assert_relative_eq!(outline.distance_to(Vec2::new(12.0, 5.0)), 2.0);
        assert_relative_eq!(outline.distance_to(Vec2::new(-3.0, -4.0)), 5.0);
    }

    #[test]
    fn hit_uses_half_width() {
        let outline = l_shape();

        assert!(outline.hit(Vec2::new(5.0, 0.4), 0.5));
        assert!(!outline.hit(Vec2::new(5.0, 0.6), 0.5));
        assert!(!outline.hit(Vec2::new(50.0, 50.0), 0.5));
    }

    #[test]
    fn single_point_and_empty_outline() {
        let single = Outline::from_points(&[Location::xy(1.0, 1.0)]);
        assert_relative_eq!(single.distance_to(Vec2::new(4.0, 5.0)), 5.0);

        let empty = Outline::default();
        assert!(empty.bounds().is_none());
        assert!(!empty.hit(Vec2::ZERO, 100.0));
    }
}
