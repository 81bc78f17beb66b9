use std::collections::BTreeSet;

use approx::assert_abs_diff_eq;
use glam::Vec3;
use ik_walker::creature::{presets, AppendagePose, TickInput};
use ik_walker::terrain::{FlatGround, ProceduralTerrain, TerrainKind};
use ik_walker::{
    BendHint, Camera, CameraFollow, Error, FollowMode, GaitPattern, LimbConfiguration, LimbId,
    LimbState, LimbVisualDriver, MovementIntent, Transform, TwoBoneSolver,
};

const DT: f32 = 1.0 / 60.0;

/// Walks `creature` along +Z on flat ground, returning the set of moving
/// limb indices after every tick.
fn walk(creature: &mut ik_walker::Creature, ticks: usize, speed: f32) -> Vec<BTreeSet<usize>> {
    let ground = FlatGround::default();
    let mut body = Transform::from_position(Vec3::new(0.0, 1.2, 0.0));
    let intent = MovementIntent::moving(Vec3::Z * speed);
    let mut history = Vec::with_capacity(ticks);

    for _ in 0..ticks {
        body.position += intent.velocity * DT;
        let report = creature.tick(&TickInput::new(body, intent, DT), &ground);
        assert!(report.skipped.is_empty(), "{report:?}");

        let gait = creature.gait().unwrap();
        let moving = gait
            .states()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_moving())
            .map(|(i, _)| i)
            .collect();
        history.push(moving);
    }
    history
}

#[test]
fn quad_swings_diagonal_pairs() {
    let mut creature = presets::quad_walker().unwrap().build().unwrap();
    let history = walk(&mut creature, 400, 1.5);

    let front_right_back_left: BTreeSet<usize> = [0, 3].into();
    let front_left_back_right: BTreeSet<usize> = [1, 2].into();

    for moving in &history {
        assert!(
            moving.is_subset(&front_right_back_left) || moving.is_subset(&front_left_back_right),
            "non-diagonal swing: {moving:?}"
        );
    }
    assert!(history.contains(&front_right_back_left));
    assert!(history.contains(&front_left_back_right));
}

#[test]
fn swinging_limbs_always_share_a_group() {
    for pattern in [GaitPattern::Alternating, GaitPattern::Wave] {
        let mut creature = presets::spider()
            .unwrap()
            .pattern(pattern.clone())
            .build()
            .unwrap();
        let history = walk(&mut creature, 300, 2.0);
        let gait = creature.gait().unwrap();

        let mut swung = 0;
        for moving in &history {
            let groups: BTreeSet<_> = moving.iter().map(|&i| gait.group_of(i)).collect();
            assert!(groups.len() <= 1, "{pattern:?}: groups {groups:?} swing together");
            swung += moving.len();
        }
        assert!(swung > 0, "{pattern:?} never stepped");
    }
}

#[test]
fn feet_stay_within_reach_while_walking() {
    let mut creature = presets::quad_walker().unwrap().build().unwrap();
    walk(&mut creature, 240, 1.0);

    let body = *creature.body().unwrap();
    for appendage in creature.appendages() {
        let Some(AppendagePose::Limb(pose)) = appendage.pose() else {
            panic!("limb {} has no pose", appendage.id());
        };
        let shoulder = pose.upper.position * 2.0 - pose.joint.position;
        assert!(shoulder.distance(pose.foot.position) <= 2.0 * 0.99 + 1e-4);
        assert!(body.position.distance(shoulder) < 1.5);
        assert_abs_diff_eq!(pose.upper.scale.y, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(pose.lower.scale.y, 1.0, epsilon = 1e-3);
    }
}

#[test]
fn far_target_is_clamped_and_still_bends() {
    let shoulder = Vec3::new(1.0, 0.0, 1.0);
    let foot = Vec3::new(1.0, 0.0, 3.5);

    let effective = LimbVisualDriver::effective_foot(shoulder, foot, 2.0);
    assert_abs_diff_eq!(effective.distance(shoulder), 1.98, epsilon = 1e-5);
    assert_abs_diff_eq!(effective.x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(effective.y, 0.0, epsilon = 1e-6);

    let hint = BendHint::new(Vec3::Y, Vec3::Z);
    let joint = TwoBoneSolver::solve(shoulder, effective, 1.0, 1.0, &hint).unwrap();
    assert!(joint.y > 0.0);
    assert_abs_diff_eq!(joint.x, 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(joint.distance(shoulder), 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(joint.distance(effective), 1.0, epsilon = 1e-4);
}

#[test]
fn driver_recovers_after_unreachable_tick() {
    let limb = LimbConfiguration::builder(7)
        .origin_offset(Vec3::new(1.0, 0.0, 0.0))
        .lengths(1.0, 1.0)
        .build()
        .unwrap();
    let mut driver = LimbVisualDriver::new(limb);
    let body = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));

    // Foot on the shoulder: below the fold limit of equal segments.
    let coincident = LimbState::planted(Vec3::new(1.0, 1.0, 0.0), Vec3::Y);
    assert!(driver.drive(Some(&body), &coincident).is_err());
    assert!(!driver.has_pose());

    let planted = LimbState::planted(Vec3::new(1.6, 0.0, 0.0), Vec3::Y);
    assert!(driver.drive(Some(&body), &planted).unwrap().is_empty());
    assert!(driver.has_pose());
}

#[test]
fn hills_keep_feet_on_the_surface() {
    let ground = ProceduralTerrain::new(TerrainKind::Hills);
    let mut creature = presets::spider().unwrap().build().unwrap();
    let intent = MovementIntent::moving(Vec3::new(0.3, 0.0, 1.0));
    let mut body = Transform::from_position(Vec3::new(0.0, ground.height_at(0.0, 0.0) + 1.4, 0.0));

    for _ in 0..300 {
        body.position += intent.velocity * DT;
        body.position.y = ground.height_at(body.position.x, body.position.z) + 1.4;
        creature.tick(&TickInput::new(body, intent, DT), &ground);
    }

    let gait = creature.gait().unwrap();
    for state in gait.states().iter().filter(|s| s.is_grounded()) {
        let p = state.current_pos();
        assert_abs_diff_eq!(p.y, ground.height_at(p.x, p.z), epsilon = 1e-3);
        assert!(state.surface_normal().y > 0.0);
    }
}

#[test]
fn aero_creature_spins_and_faces_aim() {
    let mut creature = presets::aero_creature().build().unwrap();
    let ground = FlatGround::default();

    let first = creature.tick(
        &TickInput {
            body: None,
            intent: MovementIntent::IDLE,
            aim: None,
            dt: DT,
        },
        &ground,
    );
    assert_eq!(first.skipped.len(), 4);
    assert!(first
        .skipped
        .iter()
        .all(|(_, e)| matches!(e, Error::MissingFrame { .. })));

    let body = Transform::from_position(Vec3::new(0.0, 3.0, 0.0));
    let input = TickInput::new(body, MovementIntent::IDLE, DT).with_aim(Vec3::new(5.0, 0.0, 5.0));
    for _ in 0..10 {
        assert!(creature.tick(&input, &ground).is_clean());
    }

    assert_abs_diff_eq!(
        creature.body().unwrap().yaw(),
        std::f32::consts::FRAC_PI_4,
        epsilon = 1e-5
    );
    let heights: Vec<f32> = creature
        .appendages()
        .iter()
        .map(|a| match a.pose() {
            Some(AppendagePose::Rotor(pose)) => pose.rotor.position.y,
            other => panic!("unexpected pose {other:?}"),
        })
        .collect();
    assert!(heights.iter().all(|&y| y > 3.0));
    assert!(creature.limb_state(LimbId(0)).is_none());
}

#[test]
fn locked_camera_tracks_creature_root() {
    let mut creature = presets::quad_walker().unwrap().build().unwrap();
    let mut camera = Camera::default();
    let offset = camera.offset();
    let mut follow = CameraFollow::new(FollowMode::Locked);

    walk(&mut creature, 30, 1.0);
    let root = creature.root().unwrap();
    follow.update(&mut camera, root, DT);
    let first = camera.position;
    follow.update(&mut camera, root, DT);

    assert_eq!(camera.target, root);
    assert_eq!(camera.position, first);
    assert_abs_diff_eq!(camera.offset().distance(offset), 0.0, epsilon = 1e-4);
}
