use crate::{
    foundation::{
        core::Pose,
        error::{PlanError, PlanResult},
        math::finite_or_zero,
    },
    geometry::heading::shortest_angle_delta,
    plan::extract::{Waypoint, WaypointKind},
};

/// Drivetrain speeds and mechanism durations used to estimate route time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingModel {
    pub x_velocity: f64,        // in/s
    pub y_velocity: f64,        // in/s
    pub turn_velocity: f64,     // deg/s
    pub intake_time: f64,       // s
    pub deposit_time: f64,      // s
    pub release_gate_time: f64, // s
}

impl Default for TimingModel {
    fn default() -> Self {
        Self {
            x_velocity: 30.0,
            y_velocity: 30.0,
            turn_velocity: 90.0,
            intake_time: 1.5,
            deposit_time: 2.0,
            release_gate_time: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "action", rename_all = "lowercase")]
pub enum SegmentKind {
    Move,
    Action(WaypointKind),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub start_pose: Pose,
    pub end_pose: Pose,
    pub start_time: f64,
    pub duration: f64,
    pub kind: SegmentKind,
    pub label: String,
}

impl Segment {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Half-open: `[start_time, start_time + duration)`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start_time && t < self.end_time()
    }

    pub fn is_action(&self) -> bool {
        matches!(self.kind, SegmentKind::Action(_))
    }
}

/// Time-parameterized route for one robot. Always rebuilt as a whole.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trajectory {
    pub start: Option<Pose>,
    pub segments: Vec<Segment>,
    pub total_time: f64,
}

impl Trajectory {
    pub fn empty(start: Option<Pose>) -> Self {
        Self {
            start,
            segments: Vec::new(),
            total_time: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn end_pose(&self) -> Option<Pose> {
        self.segments.last().map(|s| s.end_pose).or(self.start)
    }
}

impl TimingModel {
    pub fn validate(&self) -> PlanResult<()> {
        let fields = [
            ("x_velocity", self.x_velocity),
            ("y_velocity", self.y_velocity),
            ("turn_velocity", self.turn_velocity),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v <= 0.0 {
                return Err(PlanError::validation(format!(
                    "timing.{name} must be finite and > 0"
                )));
            }
        }

        let durations = [
            ("intake_time", self.intake_time),
            ("deposit_time", self.deposit_time),
            ("release_gate_time", self.release_gate_time),
        ];
        for (name, v) in durations {
            if !v.is_finite() || v < 0.0 {
                return Err(PlanError::validation(format!(
                    "timing.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Translation and rotation run together, so the slower of the two sets the time.
    pub fn move_time(&self, from: Pose, to: Pose) -> f64 {
        let distance = from.distance_to(to);
        let turn_deg = shortest_angle_delta(from.heading, to.heading)
            .abs()
            .to_degrees();

        let linear_time = distance / self.x_velocity.hypot(self.y_velocity);
        let turn_time = turn_deg / self.turn_velocity;

        finite_or_zero(linear_time.max(turn_time))
    }

    /// Dwell time spent at `wp` after arriving; 0 means no action segment.
    pub fn action_time(&self, wp: &Waypoint) -> f64 {
        let t = match wp.kind {
            WaypointKind::Drive => 0.0,
            WaypointKind::Intake => self.intake_time,
            WaypointKind::Deposit => self.deposit_time,
            WaypointKind::Action => self.release_gate_time,
            WaypointKind::Delay => wp.delay_time.unwrap_or(0.0),
        };
        finite_or_zero(t).max(0.0)
    }

    #[tracing::instrument(skip_all, fields(waypoints = waypoints.len()))]
    pub fn build(&self, start: Option<Pose>, waypoints: &[Waypoint]) -> Trajectory {
        let Some(start_pose) = start else {
            return Trajectory::empty(None);
        };
        if waypoints.is_empty() {
            return Trajectory::empty(start);
        }

        let mut segments = Vec::with_capacity(waypoints.len() * 2);
        let mut current = start_pose;
        let mut elapsed = 0.0;

        for wp in waypoints {
            let target = wp.pose();
            let move_time = self.move_time(current, target);
            segments.push(Segment {
                start_pose: current,
                end_pose: target,
                start_time: elapsed,
                duration: move_time,
                kind: SegmentKind::Move,
                label: wp.label.clone(),
            });
            elapsed += move_time;

            let action_time = self.action_time(wp);
            if action_time > 0.0 {
                segments.push(Segment {
                    start_pose: target,
                    end_pose: target,
                    start_time: elapsed,
                    duration: action_time,
                    kind: SegmentKind::Action(wp.kind),
                    label: wp.label.clone(),
                });
                elapsed += action_time;
            }

            current = target;
        }

        tracing::debug!(segments = segments.len(), total_time = elapsed, "trajectory built");
        Trajectory {
            start,
            segments,
            total_time: elapsed,
        }
    }
}

/// [`TimingModel::move_time`] with the default drivetrain.
pub fn calculate_move_time(from: Pose, to: Pose) -> f64 {
    TimingModel::default().move_time(from, to)
}

/// [`TimingModel::build`] with the default drivetrain.
pub fn build_trajectory(start: Option<Pose>, waypoints: &[Waypoint]) -> Trajectory {
    TimingModel::default().build(start, waypoints)
}
