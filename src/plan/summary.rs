use crate::plan::timing::{SegmentKind, Trajectory};

/// Autonomous period length in seconds.
pub const DEFAULT_PERIOD_SECS: f64 = 30.0;
/// Remaining time under which a plan is reported as tight.
pub const TIGHT_MARGIN_SECS: f64 = 5.0;

/// When the robot reaches a waypoint and when it is free to move on.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEntry {
    pub label: String,
    pub arrival: f64,
    pub completion: f64,
}

impl TimelineEntry {
    pub fn dwell(&self) -> f64 {
        self.completion - self.arrival
    }
}

/// One entry per waypoint, in route order. Completion includes action and delay time.
pub fn timeline(trajectory: &Trajectory) -> Vec<TimelineEntry> {
    let mut out: Vec<TimelineEntry> = Vec::new();
    for seg in &trajectory.segments {
        match seg.kind {
            SegmentKind::Move => out.push(TimelineEntry {
                label: seg.label.clone(),
                arrival: seg.end_time(),
                completion: seg.end_time(),
            }),
            SegmentKind::Action(_) => {
                if let Some(entry) = out.last_mut() {
                    entry.completion = seg.end_time();
                }
            }
        }
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Tight,
    Over,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::OnTrack => "on track",
            Self::Tight => "tight",
            Self::Over => "over",
        })
    }
}

/// A route's total time measured against the autonomous period.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PeriodBudget {
    pub total: f64,
    pub period: f64,
    pub remaining: f64, // negative when over
    pub status: BudgetStatus,
}

impl PeriodBudget {
    pub fn evaluate(total: f64, period: f64) -> Self {
        let remaining = period - total;
        let status = if total > period {
            BudgetStatus::Over
        } else if remaining < TIGHT_MARGIN_SECS {
            BudgetStatus::Tight
        } else {
            BudgetStatus::OnTrack
        };
        Self {
            total,
            period,
            remaining,
            status,
        }
    }
}

impl std::fmt::Display for PeriodBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}s / {}s ({})", self.total, self.period, self.status)
    }
}
