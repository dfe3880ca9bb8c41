use crate::{
    field::alliance::{Alliance, Side},
    foundation::core::{Pose, TILE_WIDTH},
    geometry::offset::{Axial, Lateral, apply_offsets},
};

/// Fixed field locations the route commands refer to by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedPose {
    SpikeNear,
    SpikeMiddle,
    SpikeFar,
    LoadingZone,
    LaunchNear,
    LaunchFar,
    Gate,
    Base,
}

impl NamedPose {
    pub const ALL: [NamedPose; 8] = [
        Self::SpikeNear,
        Self::SpikeMiddle,
        Self::SpikeFar,
        Self::LoadingZone,
        Self::LaunchNear,
        Self::LaunchFar,
        Self::Gate,
        Self::Base,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SpikeNear => "spike_near",
            Self::SpikeMiddle => "spike_middle",
            Self::SpikeFar => "spike_far",
            Self::LoadingZone => "loading_zone",
            Self::LaunchNear => "launch_near",
            Self::LaunchFar => "launch_far",
            Self::Gate => "gate",
            Self::Base => "base",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    // (x tiles, y tiles, heading degrees) before mirroring.
    fn canonical(self) -> (f64, f64, f64) {
        match self {
            Self::SpikeNear => (1.5, -1.5, -90.0),
            Self::SpikeMiddle => (0.5, -1.5, -90.0),
            Self::SpikeFar => (-0.5, -1.5, -90.0),
            Self::LoadingZone => (2.5, -2.5, -90.0),
            Self::LaunchNear => (-0.5, -0.5, 45.0),
            Self::LaunchFar => (2.5, -0.5, 20.0),
            Self::Gate => (0.0, -2.0, -90.0),
            Self::Base => (2.0, 1.4, 0.0),
        }
    }

    /// Resolves the pose for `alliance`. Pure: the alliance is the only input.
    pub fn resolve(self, alliance: Alliance) -> Pose {
        let sign = alliance.sign();
        let (tx, ty, heading_deg) = self.canonical();
        apply_offsets(
            tx * TILE_WIDTH,
            sign * ty * TILE_WIDTH,
            (sign * heading_deg).to_radians(),
            Axial::Center,
            Lateral::Center,
            0.0,
            0.0,
        )
    }
}

/// Starting pose for a robot. The footprint is placed against the tile line: front
/// edge on the north start, back edge on the south start.
pub fn start_position(alliance: Alliance, side: Side) -> Pose {
    let sign = alliance.sign();
    match side {
        Side::North => apply_offsets(
            3.0 * TILE_WIDTH,
            sign * -0.5 * TILE_WIDTH,
            0.0,
            Axial::Front,
            Lateral::Center,
            0.0,
            0.0,
        ),
        Side::South => apply_offsets(
            -3.0 * TILE_WIDTH,
            sign * -1.5 * TILE_WIDTH,
            0.0,
            Axial::Back,
            Lateral::Center,
            0.0,
            0.0,
        ),
    }
}
