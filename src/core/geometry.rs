//! 2D-Geometrie-Helfer für Proximity-Abfragen und Bounding-Boxen.

use glam::Vec2;

/// Axis-aligned Bounding-Box in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimale Ecke
    pub min: Vec2,
    /// Maximale Ecke
    pub max: Vec2,
}

impl Bounds {
    /// Leere Box, die beim ersten `extend` kollabiert.
    pub fn empty() -> Self {
        Self {
            min: Vec2::splat(f32::MAX),
            max: Vec2::splat(f32::MIN),
        }
    }

    /// Erweitert die Box um einen Punkt.
    pub fn extend(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Gibt `true` zurück, wenn noch kein Punkt aufgenommen wurde.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Mittelpunkt der Box (`Vec2::ZERO` bei leerer Box).
    pub fn center(&self) -> Vec2 {
        if self.is_empty() {
            return Vec2::ZERO;
        }
        (self.min + self.max) * 0.5
    }
}

/// Kürzeste Distanz von `p` zur Strecke `a`–`b`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Seite von `p` relativ zur gerichteten Linie `a`→`b`.
///
/// Negativ = Front-Seite (rechts der Laufrichtung, Doom-Konvention),
/// positiv = Back-Seite, 0 = exakt auf der Linie.
pub fn side_of_line(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn segment_distance_interior_and_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        assert_abs_diff_eq!(
            point_segment_distance(Vec2::new(5.0, 3.0), a, b),
            3.0,
            epsilon = 1e-6
        );
        // Jenseits des Endpunkts zählt die Distanz zum Endpunkt
        assert_abs_diff_eq!(
            point_segment_distance(Vec2::new(14.0, 3.0), a, b),
            5.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let a = Vec2::new(2.0, 2.0);
        assert_abs_diff_eq!(
            point_segment_distance(Vec2::new(2.0, 5.0), a, a),
            3.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn side_of_line_signs() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(side_of_line(Vec2::new(5.0, -1.0), a, b) < 0.0);
        assert!(side_of_line(Vec2::new(5.0, 1.0), a, b) > 0.0);
        assert_eq!(side_of_line(Vec2::new(5.0, 0.0), a, b), 0.0);
    }

    #[test]
    fn bounds_center() {
        let mut bounds = Bounds::empty();
        assert!(bounds.is_empty());
        assert_eq!(bounds.center(), Vec2::ZERO);

        bounds.extend(Vec2::new(-4.0, 2.0));
        bounds.extend(Vec2::new(8.0, 10.0));
        assert_eq!(bounds.center(), Vec2::new(2.0, 6.0));
    }
}
