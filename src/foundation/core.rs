use crate::geometry::heading::normalize_heading;

pub use kurbo::{Point, Vec2};

/// Field tile edge length in inches.
pub const TILE_WIDTH: f64 = 23.5;
/// Distance from the field centre to a wall, in inches.
pub const FIELD_HALF: f64 = 72.0;
/// Robot footprint along the heading, in inches.
pub const ROBOT_LENGTH: f64 = 14.0;
/// Robot footprint across the heading, in inches.
pub const ROBOT_WIDTH: f64 = 14.0;

/// A robot pose in field inches with a heading in radians.
///
/// Every constructor normalizes `heading` into `(-pi, pi]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: normalize_heading(heading),
        }
    }

    /// Pose from tile coordinates and a heading in degrees.
    pub fn from_tiles(tx: f64, ty: f64, heading_deg: f64) -> Self {
        Self::new(tx * TILE_WIDTH, ty * TILE_WIDTH, heading_deg.to_radians())
    }

    pub fn from_point(p: Point, heading: f64) -> Self {
        Self::new(p.x, p.y, heading)
    }

    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn translated(self, delta: Vec2) -> Self {
        Self::from_point(self.position() + delta, self.heading)
    }

    pub fn distance_to(self, other: Pose) -> f64 {
        self.position().distance(other.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn new_normalizes_heading() {
        let p = Pose::new(1.0, 2.0, 3.0 * PI);
        assert!((p.heading - PI).abs() < 1e-12);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn from_tiles_scales_by_tile_width() {
        let p = Pose::from_tiles(2.0, -1.0, 90.0);
        assert_eq!(p.x, 47.0);
        assert_eq!(p.y, -23.5);
        assert!((p.heading - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn translated_keeps_heading() {
        let p = Pose::new(0.0, 0.0, 0.5).translated(Vec2::new(3.0, 4.0));
        assert_eq!(p.position(), Point::new(3.0, 4.0));
        assert_eq!(p.heading, 0.5);
        assert_eq!(p.distance_to(Pose::new(0.0, 0.0, 0.0)), 5.0);
    }
}
