use crate::{
    animation::ease::Ease,
    foundation::core::Pose,
    geometry::heading::shortest_angle_delta,
    plan::timing::{Segment, SegmentKind, Trajectory},
};

/// Pose at elapsed time `t` using the default in-out cubic curve.
pub fn pose_at_time(trajectory: &Trajectory, t: f64) -> Option<Pose> {
    pose_at_time_with(trajectory, t, Ease::InOutCubic)
}

/// Pose at elapsed time `t` with `ease` shaping progress within move segments.
///
/// Negative and NaN `t` read as 0; `t` at or past the end holds the final pose. Without
/// segments the trajectory's start pose is returned, if it has one.
pub fn pose_at_time_with(trajectory: &Trajectory, t: f64, ease: Ease) -> Option<Pose> {
    let Some(last) = trajectory.segments.last() else {
        return trajectory.start;
    };

    let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
    if t >= trajectory.total_time {
        return Some(last.end_pose);
    }

    let pose = trajectory
        .segments
        .iter()
        .find(|s| s.contains(t))
        .map_or(last.end_pose, |s| pose_in_segment(s, t, ease));
    Some(pose)
}

fn pose_in_segment(seg: &Segment, t: f64, ease: Ease) -> Pose {
    match seg.kind {
        SegmentKind::Action(_) => seg.end_pose,
        SegmentKind::Move => {
            let u = if seg.duration > 0.0 {
                (t - seg.start_time) / seg.duration
            } else {
                1.0
            };
            let e = ease.apply(u);
            let p = seg.start_pose.position().lerp(seg.end_pose.position(), e);
            let dh = shortest_angle_delta(seg.start_pose.heading, seg.end_pose.heading);
            Pose::from_point(p, seg.start_pose.heading + dh * e)
        }
    }
}
