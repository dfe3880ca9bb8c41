use autoplan::{
    Alliance, AllianceContext, Command, Locale, NamedPose, Planner, PlannerConfig, RobotSetup,
    Side, extract_waypoints,
};

fn routine() -> Vec<Command> {
    vec![
        Command::Delay { seconds: 0.5 },
        Command::IntakeRow { spike: 2 },
        Command::deposit(Locale::Near, 0.0, 0.0),
        Command::ReleaseGate,
    ]
}

#[test]
fn partner_waypoints_use_only_partner_alliance() {
    let primary = AllianceContext::new(Alliance::Blue, Side::North);
    let partner = AllianceContext::new(Alliance::Red, Side::South);

    let planner = Planner::new(
        PlannerConfig::default(),
        RobotSetup::new(primary, routine()),
    )
    .with_partner(RobotSetup::new(partner, routine()));
    let snap = planner.recompute();

    let red_only = extract_waypoints(&routine(), &partner);
    let partner_track = snap.partner.unwrap();
    assert_eq!(partner_track.waypoints, red_only);

    assert_eq!(partner_track.waypoints[0].pose(), partner.start_pose());
    assert_eq!(
        partner_track.waypoints[1].pose(),
        NamedPose::SpikeMiddle.resolve(Alliance::Red)
    );
    assert_eq!(
        partner_track.waypoints[2].pose(),
        NamedPose::LaunchNear.resolve(Alliance::Red)
    );
    assert_eq!(
        partner_track.waypoints[3].pose(),
        NamedPose::Gate.resolve(Alliance::Red)
    );

    // mirrored across the x axis relative to the primary robot
    for (p, q) in snap.primary.waypoints[1..].iter().zip(&partner_track.waypoints[1..]) {
        assert!((p.x - q.x).abs() < 1e-9);
        assert!((p.y + q.y).abs() < 1e-9);
    }
}

#[test]
fn primary_is_unaffected_by_partner_presence() {
    let primary = AllianceContext::new(Alliance::Blue, Side::North);
    let alone = Planner::new(
        PlannerConfig::default(),
        RobotSetup::new(primary, routine()),
    )
    .recompute();
    let paired = Planner::new(
        PlannerConfig::default(),
        RobotSetup::new(primary, routine()),
    )
    .with_partner(RobotSetup::new(
        AllianceContext::new(Alliance::Red, Side::South),
        routine(),
    ))
    .recompute();

    assert_eq!(alone.primary, paired.primary);
}

#[test]
fn same_alliance_partner_shares_named_poses_but_not_start() {
    let a = AllianceContext::new(Alliance::Red, Side::North);
    let b = AllianceContext::new(Alliance::Red, Side::South);
    let wa = extract_waypoints(&routine(), &a);
    let wb = extract_waypoints(&routine(), &b);
    assert_ne!(wa[0].pose(), wb[0].pose());
    assert_eq!(wa[1..], wb[1..]);
}
