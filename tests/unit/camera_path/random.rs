use super::*;

fn params(seed: u64) -> RandomParams {
    let pos = AxisRange::new(-1.0, 1.0).unwrap();
    let rot = AxisRange::new(-10.0, 10.0).unwrap();
    RandomParams {
        pose_count: 50,
        position_range: [pos, pos, AxisRange::new(0.0, 0.5).unwrap()],
        rotation_range: [rot, rot, rot],
        center: DVec3::new(2.0, 3.0, 1.0),
        center_rotation: DVec3::new(0.0, 0.0, 90.0),
        seed: Some(seed),
        max_attempts_per_pose: DEFAULT_MAX_ATTEMPTS_PER_POSE,
    }
}

#[test]
fn consecutive_poses_keep_min_baseline() {
    let p = params(7);
    let traj = generate_random(&p).unwrap();
    assert_eq!(traj.len(), p.pose_count);

    let mut prev = p.center;
    for pose in &traj.poses {
        assert!(pose.position.distance(prev) > MIN_BASELINE);
        prev = pose.position;
    }
}

#[test]
fn poses_stay_inside_the_sampling_box() {
    let p = params(11);
    let traj = generate_random(&p).unwrap();
    for pose in &traj.poses {
        let off = pose.position - p.center;
        assert!(p.position_range[0].contains(off.x));
        assert!(p.position_range[1].contains(off.y));
        assert!(p.position_range[2].contains(off.z));
        let rot = pose.rotation - p.center_rotation;
        assert!(p.rotation_range.iter().zip([rot.x, rot.y, rot.z]).all(|(r, v)| r.contains(v)));
    }
    assert_eq!(
        traj.poses.iter().map(|p| p.index).collect::<Vec<_>>(),
        (0..p.pose_count).collect::<Vec<_>>()
    );
}

#[test]
fn same_seed_same_trajectory() {
    assert_eq!(
        generate_random(&params(3)).unwrap(),
        generate_random(&params(3)).unwrap()
    );
}

#[test]
fn preview_includes_bounding_box_corners() {
    let p = params(5);
    let traj = generate_random(&p).unwrap();
    assert_eq!(traj.preview_extra.len(), 8);
    assert_eq!(traj.preview_extra[0], DVec3::new(1.0, 2.0, 1.0));
    assert_eq!(traj.preview_extra[7], DVec3::new(3.0, 4.0, 1.5));
}

#[test]
fn infeasible_range_fails_instead_of_looping() {
    let tiny = AxisRange::new(-0.01, 0.01).unwrap();
    let mut p = params(1);
    p.position_range = [tiny, tiny, tiny];
    p.max_attempts_per_pose = 200;
    let err = generate_random(&p).unwrap_err();
    assert!(matches!(err, PanoError::Configuration(_)));
}

#[test]
fn degenerate_axis_range_is_constant() {
    let mut p = params(9);
    p.position_range[2] = AxisRange::new(0.25, 0.25).unwrap();
    let traj = generate_random(&p).unwrap();
    assert!(traj.positions().all(|pos| pos.z == 1.25));
}
