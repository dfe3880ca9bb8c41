use autoplan::{
    Alliance, AllianceContext, Command, NamedPose, Pose, SegmentKind, Side, TILE_WIDTH,
    WaypointKind, build_trajectory, calculate_move_time, extract_waypoints, pose_at_time,
};

fn red_north() -> AllianceContext {
    AllianceContext::new(Alliance::Red, Side::North)
}

fn fixed_start() -> Pose {
    Pose::new(3.0 * TILE_WIDTH, -0.5 * TILE_WIDTH, 0.0)
}

#[test]
fn single_drive_is_one_move_segment() {
    let start = fixed_start();
    let wps = extract_waypoints(&[Command::drive(0.0, 0.0, 0.0)], &red_north());
    let traj = build_trajectory(Some(start), &wps);

    assert_eq!(traj.segments.len(), 1);
    let seg = &traj.segments[0];
    assert_eq!(seg.kind, SegmentKind::Move);

    let expected = start.distance_to(Pose::new(0.0, 0.0, 0.0)) / (30.0f64.powi(2) * 2.0).sqrt();
    assert!((seg.duration - expected).abs() < 1e-12);
    assert_eq!(traj.total_time, seg.duration);
}

#[test]
fn intake_row_adds_fixed_action_after_move() {
    let start = fixed_start();
    let wps = extract_waypoints(&[Command::IntakeRow { spike: 1 }], &red_north());
    assert_eq!(wps[0].pose(), NamedPose::SpikeNear.resolve(Alliance::Red));

    let traj = build_trajectory(Some(start), &wps);
    assert_eq!(traj.segments.len(), 2);
    assert_eq!(traj.segments[0].kind, SegmentKind::Move);
    assert_eq!(traj.segments[1].kind, SegmentKind::Action(WaypointKind::Intake));
    assert_eq!(traj.segments[1].duration, 1.5);

    let move_time = calculate_move_time(start, wps[0].pose());
    assert_eq!(traj.segments[0].duration, move_time);
    assert_eq!(traj.total_time, move_time + 1.5);
}

#[test]
fn leading_delay_waits_at_start_pose() {
    let ctx = red_north();
    let start = ctx.start_pose();
    let wps = extract_waypoints(&[Command::Delay { seconds: 2.5 }], &ctx);
    assert_eq!(wps.len(), 1);
    assert_eq!(wps[0].pose(), start);
    assert_eq!(wps[0].delay_time, Some(2.5));

    let traj = build_trajectory(Some(start), &wps);
    assert_eq!(traj.segments.len(), 2);
    assert_eq!(traj.segments[0].kind, SegmentKind::Move);
    assert_eq!(traj.segments[0].start_pose, traj.segments[0].end_pose);
    assert_eq!(traj.segments[0].duration, 0.0);
    assert_eq!(traj.segments[1].duration, 2.5);
    assert_eq!(traj.total_time, 2.5);
}

#[test]
fn full_routine_has_contiguous_segments_and_clamped_sampling() {
    let ctx = AllianceContext::new(Alliance::Blue, Side::South);
    let cmds = vec![
        Command::Delay { seconds: 1.0 },
        Command::IntakeRow { spike: 3 },
        Command::deposit(autoplan::Locale::Near, 0.0, 0.0),
        Command::IntakeHuman,
        Command::drive(1.0, 1.0, 135.0),
        Command::deposit(autoplan::Locale::Far, -1.0, 0.5),
        Command::ReleaseGate,
    ];
    let wps = extract_waypoints(&cmds, &ctx);
    assert_eq!(wps.len(), cmds.len());
    let traj = build_trajectory(Some(ctx.start_pose()), &wps);

    assert_eq!(traj.segments[0].start_time, 0.0);
    for pair in traj.segments.windows(2) {
        assert_eq!(pair[0].start_time + pair[0].duration, pair[1].start_time);
    }
    let last = traj.segments.last().unwrap();
    assert_eq!(last.start_time + last.duration, traj.total_time);

    assert_eq!(pose_at_time(&traj, -1.0), pose_at_time(&traj, 0.0));
    for t in [traj.total_time, traj.total_time + 0.001, 1e9] {
        assert_eq!(pose_at_time(&traj, t), Some(last.end_pose));
    }
}

#[test]
fn move_samples_hit_both_endpoints() {
    let start = fixed_start();
    let end = Pose::new(-20.0, 35.0, 2.5);
    let wps = vec![autoplan::Waypoint::at(end, WaypointKind::Drive, "Drive")];
    let traj = build_trajectory(Some(start), &wps);
    let seg = &traj.segments[0];

    let at_start = pose_at_time(&traj, seg.start_time).unwrap();
    assert!((at_start.x - start.x).abs() < 1e-9);
    assert!((at_start.y - start.y).abs() < 1e-9);

    let near_end = pose_at_time(&traj, seg.start_time + seg.duration * (1.0 - 1e-9)).unwrap();
    assert!((near_end.x - end.x).abs() < 1e-6);
    assert!((near_end.y - end.y).abs() < 1e-6);

    // |delta| < pi: heading moves monotonically from 0 toward 2.5 without wrapping
    let mut prev = start.heading;
    for i in 1..50 {
        let h = pose_at_time(&traj, seg.duration * f64::from(i) / 50.0).unwrap().heading;
        assert!(h >= prev - 1e-12 && h <= end.heading + 1e-12, "i={i} h={h}");
        prev = h;
    }
}
