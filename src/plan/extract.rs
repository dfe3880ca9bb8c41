use crate::{
    command::model::{Command, Spike},
    field::{alliance::AllianceContext, poses::NamedPose},
    foundation::{
        core::{Pose, TILE_WIDTH, Vec2},
        math::finite_or_zero,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    Drive,
    Intake,
    Deposit,
    Action,
    Delay,
}

/// A resolved route point in field inches.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub kind: WaypointKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_time: Option<f64>, // seconds, delay waypoints only
}

impl Waypoint {
    pub fn at(pose: Pose, kind: WaypointKind, label: impl Into<String>) -> Self {
        Self {
            x: pose.x,
            y: pose.y,
            heading: pose.heading,
            kind,
            label: label.into(),
            delay_time: None,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.heading)
    }
}

fn deposit_label(locale: &str, txo: f64, tyo: f64) -> String {
    if txo != 0.0 || tyo != 0.0 {
        format!("Deposit {locale} ({txo},{tyo})")
    } else {
        format!("Deposit {locale}")
    }
}

fn sanitize_delay(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds >= 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Resolves one robot's commands into waypoints.
///
/// Named poses are mirrored for `ctx.alliance` and delays anchor to `ctx`'s own start
/// pose, so the result depends on nothing but the two arguments.
pub fn extract_waypoints(commands: &[Command], ctx: &AllianceContext) -> Vec<Waypoint> {
    let mut path: Vec<Waypoint> = Vec::with_capacity(commands.len());

    for cmd in commands {
        let waypoint = match cmd {
            Command::Drive {
                tx,
                ty,
                heading_deg,
                ..
            } => Some(Waypoint::at(
                Pose::new(
                    finite_or_zero(*tx) * TILE_WIDTH,
                    finite_or_zero(*ty) * TILE_WIDTH,
                    finite_or_zero(*heading_deg).to_radians(),
                ),
                WaypointKind::Drive,
                "Drive",
            )),
            Command::Deposit {
                locale, txo, tyo, ..
            } => {
                let (txo, tyo) = (finite_or_zero(*txo), finite_or_zero(*tyo));
                let base = locale.launch_pose().resolve(ctx.alliance);
                let pose = base.translated(Vec2::new(txo * TILE_WIDTH, tyo * TILE_WIDTH));
                Some(Waypoint::at(
                    pose,
                    WaypointKind::Deposit,
                    deposit_label(locale.as_str(), txo, tyo),
                ))
            }
            Command::IntakeRow { spike } => match Spike::from_index(*spike) {
                Some(spike) => Some(Waypoint::at(
                    spike.pose().resolve(ctx.alliance),
                    WaypointKind::Intake,
                    spike.label(),
                )),
                None => {
                    tracing::debug!(spike, "intake index out of range, skipped");
                    None
                }
            },
            Command::IntakeHuman => Some(Waypoint::at(
                Spike::Human.pose().resolve(ctx.alliance),
                WaypointKind::Intake,
                Spike::Human.label(),
            )),
            Command::ReleaseGate => Some(Waypoint::at(
                NamedPose::Gate.resolve(ctx.alliance),
                WaypointKind::Action,
                "Release Gate",
            )),
            Command::Delay { seconds } => {
                let delay = sanitize_delay(*seconds);
                let anchor = path.last().map_or_else(|| ctx.start_pose(), Waypoint::pose);
                Some(Waypoint {
                    delay_time: Some(delay),
                    ..Waypoint::at(anchor, WaypointKind::Delay, format!("Wait {delay}s"))
                })
            }
            Command::Unrecognized { block } => {
                tracing::debug!(block = %block, "no waypoint for block kind, skipped");
                None
            }
        };

        path.extend(waypoint);
    }

    path
}
