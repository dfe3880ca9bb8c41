use std::path::Path;

use anyhow::Context;

use crate::{
    command::wire::{PlanEntry, commands_from_plan},
    field::alliance::{Alliance, AllianceContext, Side},
    foundation::error::PlanResult,
    session::planner::RobotSetup,
};

/// One robot's section of a plan file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RobotPlan {
    #[serde(default)]
    pub alliance: Alliance,
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub commands: Vec<PlanEntry>,
}

impl RobotPlan {
    pub fn context(&self) -> AllianceContext {
        AllianceContext::new(self.alliance, self.side)
    }

    pub fn to_setup(&self) -> RobotSetup {
        RobotSetup::new(self.context(), commands_from_plan(&self.commands))
    }
}

/// On-disk routine: the primary robot and an optional alliance partner.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanFile {
    pub primary: RobotPlan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<RobotPlan>,
}

impl PlanFile {
    pub fn from_json(json: &str) -> PlanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> PlanResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read plan '{}'", path.display()))?;
        Self::from_json(&json)
    }
}
