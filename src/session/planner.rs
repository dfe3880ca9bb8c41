use crate::{
    animation::ease::Ease,
    command::{
        block::{BlockRecord, RobotRole, read_chain},
        model::Command,
        wire::encode_plan,
    },
    export::payload::{Payload, export_payload},
    field::alliance::AllianceContext,
    foundation::{
        core::Pose,
        error::{PlanError, PlanResult},
    },
    plan::{
        extract::{Waypoint, extract_waypoints},
        sample::pose_at_time_with,
        summary::{PeriodBudget, TimelineEntry, timeline},
        timing::{TimingModel, Trajectory},
    },
    session::{config::PlannerConfig, plan_file::PlanFile},
};

/// One robot's inputs: where it starts and what it was told to do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RobotSetup {
    pub context: AllianceContext,
    pub commands: Vec<Command>,
}

impl RobotSetup {
    pub fn new(context: AllianceContext, commands: Vec<Command>) -> Self {
        Self { context, commands }
    }

    /// Reads the chain that follows `role`'s start marker in the editor's stacks.
    pub fn from_blocks<B: BlockRecord>(
        context: AllianceContext,
        role: RobotRole,
        stacks: &[Vec<B>],
    ) -> Self {
        Self::new(context, read_chain(role, stacks))
    }

    fn track(&self, timing: &TimingModel) -> RobotTrack {
        let start_pose = self.context.start_pose();
        let waypoints = extract_waypoints(&self.commands, &self.context);
        let trajectory = timing.build(Some(start_pose), &waypoints);
        RobotTrack {
            context: self.context,
            start_pose,
            waypoints,
            trajectory,
        }
    }
}

/// Derived route for one robot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RobotTrack {
    pub context: AllianceContext,
    pub start_pose: Pose,
    pub waypoints: Vec<Waypoint>,
    pub trajectory: Trajectory,
}

impl RobotTrack {
    pub fn pose_at(&self, t: f64, ease: Ease) -> Option<Pose> {
        pose_at_time_with(&self.trajectory, t, ease)
    }

    pub fn timeline(&self) -> Vec<TimelineEntry> {
        timeline(&self.trajectory)
    }

    pub fn budget(&self, period_secs: f64) -> PeriodBudget {
        PeriodBudget::evaluate(self.trajectory.total_time, period_secs)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlanSnapshot {
    pub primary: RobotTrack,
    pub partner: Option<RobotTrack>,
}

/// Editing session: config plus the current inputs of both robots.
///
/// Nothing is cached. Every [`Planner::recompute`] derives both tracks from scratch, and
/// each robot's track reads only its own setup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Planner {
    pub config: PlannerConfig,
    pub primary: RobotSetup,
    pub partner: Option<RobotSetup>,
}

impl Planner {
    pub fn new(config: PlannerConfig, primary: RobotSetup) -> Self {
        Self {
            config,
            primary,
            partner: None,
        }
    }

    pub fn with_partner(mut self, partner: RobotSetup) -> Self {
        self.partner = Some(partner);
        self
    }

    pub fn from_plan_file(config: PlannerConfig, file: &PlanFile) -> Self {
        Self {
            config,
            primary: file.primary.to_setup(),
            partner: file.partner.as_ref().map(|p| p.to_setup()),
        }
    }

    #[tracing::instrument(skip(self), fields(
        primary = self.primary.commands.len(),
        partner = self.partner.as_ref().map_or(0, |p| p.commands.len()),
    ))]
    pub fn recompute(&self) -> PlanSnapshot {
        let timing = &self.config.timing;
        PlanSnapshot {
            primary: self.primary.track(timing),
            partner: self.partner.as_ref().map(|p| p.track(timing)),
        }
    }

    /// Encodes the primary robot's commands for transfer to the controller.
    pub fn export(&self) -> PlanResult<Payload> {
        let waypoints = extract_waypoints(&self.primary.commands, &self.primary.context);
        if waypoints.is_empty() {
            tracing::warn!("export refused: primary route has no waypoints");
            return Err(PlanError::export("no waypoints to export"));
        }
        export_payload(&encode_plan(&self.primary.commands))
    }
}
