use super::*;

#[test]
fn three_segments_over_six_meters() {
    let rotation = DVec3::new(0.0, 0.0, 45.0);
    let traj = generate_line(&LineParams {
        segment_count: 3,
        line_length: 6.0,
        center: DVec3::ZERO,
        rotation,
    })
    .unwrap();
    let xs: Vec<f64> = traj.positions().map(|p| p.x).collect();
    assert_eq!(xs, vec![-3.0, -1.0, 1.0]);
    assert!(traj.poses.iter().all(|p| p.rotation == rotation));
    assert!(traj.positions().all(|p| p.y == 0.0 && p.z == 0.0));
}

#[test]
fn follows_center_offset() {
    let traj = generate_line(&LineParams {
        segment_count: 2,
        line_length: 1.0,
        center: DVec3::new(5.0, 2.0, 1.5),
        rotation: DVec3::ZERO,
    })
    .unwrap();
    let pts: Vec<DVec3> = traj.positions().collect();
    assert_eq!(pts, vec![DVec3::new(4.5, 2.0, 1.5), DVec3::new(5.0, 2.0, 1.5)]);
}

#[test]
fn zero_segments_is_rejected() {
    let err = generate_line(&LineParams {
        segment_count: 0,
        line_length: 1.0,
        center: DVec3::ZERO,
        rotation: DVec3::ZERO,
    })
    .unwrap_err();
    assert!(matches!(err, PanoError::Configuration(_)));
}
