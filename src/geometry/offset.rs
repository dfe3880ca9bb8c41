use std::f64::consts::FRAC_PI_2;

use crate::{
    foundation::core::{Point, Pose, ROBOT_LENGTH, ROBOT_WIDTH, Vec2},
    geometry::heading::normalize_heading,
};

/// Which end of the robot is placed on the target point.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Axial {
    Front,
    #[default]
    Center,
    Back,
}

impl Axial {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Front => 1.0,
            Self::Center => 0.0,
            Self::Back => -1.0,
        }
    }
}

/// Which side of the robot is placed on the target point.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lateral {
    Left,
    #[default]
    Center,
    Right,
}

impl Lateral {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Center => 0.0,
            Self::Right => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OffsetSpec {
    pub axial: Axial,
    pub lateral: Lateral,
    pub axial_offset: f64,   // inches along the heading
    pub lateral_offset: f64, // inches to the left of the heading
}

impl OffsetSpec {
    pub fn new(axial: Axial, lateral: Lateral) -> Self {
        Self {
            axial,
            lateral,
            ..Self::default()
        }
    }

    pub fn with_offsets(mut self, axial_offset: f64, lateral_offset: f64) -> Self {
        self.axial_offset = axial_offset;
        self.lateral_offset = lateral_offset;
        self
    }

    pub fn apply(self, pose: Pose) -> Pose {
        apply_offsets(
            pose.x,
            pose.y,
            pose.heading,
            self.axial,
            self.lateral,
            self.axial_offset,
            self.lateral_offset,
        )
    }
}

/// Moves `(x, y)` so that the requested part of the robot footprint sits on the point.
///
/// The axial term runs along `heading`, the lateral term along `heading + pi/2`.
/// Only the position changes.
pub fn apply_offsets(
    x: f64,
    y: f64,
    heading: f64,
    axial: Axial,
    lateral: Lateral,
    axial_offset: f64,
    lateral_offset: f64,
) -> Pose {
    let total_axial = axial_offset - axial.multiplier() * (ROBOT_LENGTH / 2.0);
    let total_lateral = lateral_offset - lateral.multiplier() * (ROBOT_WIDTH / 2.0);

    let along = Vec2::from_angle(normalize_heading(heading)) * total_axial;
    let across = Vec2::from_angle(normalize_heading(heading + FRAC_PI_2)) * total_lateral;

    Pose::from_point(Point::new(x, y) + along + across, heading)
}
