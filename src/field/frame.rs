use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{FIELD_HALF, Point};

/// Square canvas onto which the field is drawn. Field origin is the canvas centre,
/// field +y points up, canvas +y points down.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldFrame {
    pub size_px: f64,
}

impl FieldFrame {
    pub fn new(size_px: f64) -> Self {
        Self { size_px }
    }

    fn scale(self) -> f64 {
        self.size_px / (FIELD_HALF * 2.0)
    }

    pub fn to_canvas(self, field: Point) -> Point {
        Point::new(
            (field.x + FIELD_HALF) * self.scale(),
            (FIELD_HALF - field.y) * self.scale(),
        )
    }

    pub fn to_field(self, canvas: Point) -> Point {
        let s = self.scale();
        Point::new(canvas.x / s - FIELD_HALF, FIELD_HALF - canvas.y / s)
    }

    /// Canvas rotation for a sprite drawn pointing up at zero rotation.
    pub fn sprite_rotation(heading: f64) -> f64 {
        -heading + FRAC_PI_2
    }
}
