//! Route timing, pose sampling and plan export for block-built autonomous routines.
//!
//! The pipeline for each robot is independent and pure:
//!
//! - [`Command`]s (from editor blocks or a wire plan) plus an [`AllianceContext`]
//! - [`extract_waypoints`] resolves them into field [`Waypoint`]s
//! - [`TimingModel::build`] turns waypoints into a timed [`Trajectory`]
//! - [`pose_at_time`] samples the robot's pose at any elapsed time
//!
//! [`Planner`] ties the primary robot and an optional partner together and produces the
//! `base64(gzip(json))` [`Payload`] handed to the robot controller.
#![forbid(unsafe_code)]

mod animation;
mod command;
mod export;
mod field;
mod foundation;
mod geometry;
mod plan;
mod session;

pub use crate::foundation::core::{
    FIELD_HALF, Point, Pose, ROBOT_LENGTH, ROBOT_WIDTH, TILE_WIDTH, Vec2,
};
pub use crate::foundation::error::{PlanError, PlanResult};

pub use crate::geometry::heading::{normalize_heading, shortest_angle_delta};
pub use crate::geometry::offset::{Axial, Lateral, OffsetSpec, apply_offsets};

pub use crate::field::alliance::{Alliance, AllianceContext, Side};
pub use crate::field::frame::FieldFrame;
pub use crate::field::poses::{NamedPose, start_position};

pub use crate::command::block::{Block, BlockRecord, RobotRole, read_chain};
pub use crate::command::model::{Command, Locale, Spike};
pub use crate::command::wire::{
    FailedEntry, PARSE_FAILED, PlanEntry, WireCommand, commands_from_plan, encode_command,
    encode_plan, parse_plan, plan_to_json,
};

pub use crate::plan::extract::{Waypoint, WaypointKind, extract_waypoints};
pub use crate::plan::sample::{pose_at_time, pose_at_time_with};
pub use crate::plan::summary::{
    BudgetStatus, DEFAULT_PERIOD_SECS, PeriodBudget, TIGHT_MARGIN_SECS, TimelineEntry, timeline,
};
pub use crate::plan::timing::{
    Segment, SegmentKind, TimingModel, Trajectory, build_trajectory, calculate_move_time,
};

pub use crate::animation::ease::Ease;
pub use crate::animation::playback::{Frame, Playback};

pub use crate::export::payload::{Payload, decode_payload, export_payload};

pub use crate::session::config::PlannerConfig;
pub use crate::session::plan_file::{PlanFile, RobotPlan};
pub use crate::session::planner::{PlanSnapshot, Planner, RobotSetup, RobotTrack};
