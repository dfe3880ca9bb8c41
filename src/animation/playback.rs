use crate::{
    animation::ease::Ease,
    foundation::core::Pose,
    session::{config::PlannerConfig, planner::PlanSnapshot},
};

/// Poses of both robots for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub elapsed: f64,
    pub playing: bool,
    pub primary: Option<Pose>,
    pub partner: Option<Pose>,
}

/// Start/stop clock for route preview. Times are host timestamps in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Playback {
    ease: Ease,
    started_at: Option<f64>,
}

impl Playback {
    pub fn new(ease: Ease) -> Self {
        Self {
            ease,
            started_at: None,
        }
    }

    /// Clock using the session's configured curve.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.ease)
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn toggle(&mut self, now: f64) {
        if self.is_playing() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        self.started_at.map_or(0.0, |t0| (now - t0).max(0.0))
    }

    /// Samples both robots at `now`. Stopped playback shows the start poses; playback
    /// stops itself on the frame where the primary route finishes.
    pub fn frame(&mut self, now: f64, snapshot: &PlanSnapshot) -> Frame {
        if !self.is_playing() {
            return Frame {
                elapsed: 0.0,
                playing: false,
                primary: Some(snapshot.primary.start_pose),
                partner: snapshot.partner.as_ref().map(|p| p.start_pose),
            };
        }

        let elapsed = self.elapsed(now);
        let frame = Frame {
            elapsed,
            playing: true,
            primary: snapshot.primary.pose_at(elapsed, self.ease),
            partner: snapshot
                .partner
                .as_ref()
                .and_then(|p| p.pose_at(elapsed, self.ease)),
        };

        if elapsed >= snapshot.primary.trajectory.total_time {
            tracing::debug!(elapsed, "playback finished");
            self.stop();
            return Frame {
                playing: false,
                ..frame
            };
        }
        frame
    }
}
