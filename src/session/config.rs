use std::path::Path;

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    foundation::error::{PlanError, PlanResult},
    plan::{summary::DEFAULT_PERIOD_SECS, timing::TimingModel},
};

/// Planner tuning. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub timing: TimingModel,
    pub ease: Ease,
    pub period_secs: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            timing: TimingModel::default(),
            ease: Ease::default(),
            period_secs: DEFAULT_PERIOD_SECS,
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> PlanResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> PlanResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> PlanResult<()> {
        self.timing.validate()?;
        if !self.period_secs.is_finite() || self.period_secs <= 0.0 {
            return Err(PlanError::validation("period_secs must be finite and > 0"));
        }
        Ok(())
    }
}
