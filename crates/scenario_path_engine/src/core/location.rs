//! Wertetyp für Positionen auf der Karte.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D-Position mit optionaler Ausrichtung und Höhe.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Position in Weltkoordinaten (Meter)
    pub position: Vec2,
    /// Ausrichtung in Radiant (0 = +X)
    #[serde(default)]
    pub heading: f32,
    /// Höhe über Grund
    #[serde(default)]
    pub elevation: f32,
}

impl Location {
    /// Erstellt eine Location ohne Ausrichtung und Höhe.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            heading: 0.0,
            elevation: 0.0,
        }
    }

    /// Erstellt eine Location aus Einzelkoordinaten.
    pub fn xy(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y))
    }

    /// Erstellt eine Location mit Ausrichtung.
    pub fn with_heading(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading,
            elevation: 0.0,
        }
    }

    /// Euklidische Distanz in der Ebene (Höhe wird ignoriert).
    pub fn distance(&self, other: &Location) -> f32 {
        self.position.distance(other.position)
    }

    /// Prüft ob beide Locations auf dieselbe Stelle zeigen.
    pub fn same_spot(&self, other: &Location) -> bool {
        self.position == other.position
    }
}

impl From<Vec2> for Location {
    fn from(position: Vec2) -> Self {
        Self::new(position)
    }
}

/// Setzt die Ausrichtung aller inneren Punkte entlang der Laufrichtung.
///
/// Start- und Endpunkt bleiben unverändert.
pub fn assign_headings(points: &mut [Location]) {
    if points.len() < 3 {
        return;
    }
    for i in 1..points.len() - 1 {
        let delta = points[i + 1].position - points[i].position;
        if delta.length_squared() > f32::EPSILON {
            points[i].heading = delta.y.atan2(delta.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_ignores_elevation() {
        let mut a = Location::xy(0.0, 0.0);
        a.elevation = 10.0;
        let b = Location::xy(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn headings_follow_direction_for_inner_points() {
        let mut points = vec![
            Location::xy(0.0, 0.0),
            Location::xy(1.0, 0.0),
            Location::xy(1.0, 1.0),
        ];
        assign_headings(&mut points);

        assert_eq!(points[0].heading, 0.0);
        assert_relative_eq!(points[1].heading, std::f32::consts::FRAC_PI_2);
        assert_eq!(points[2].heading, 0.0);
    }
}
