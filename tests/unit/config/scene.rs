use super::*;

const ROOM_CIRCLE: &str = r#"{
    "scene_name": "room_0",
    "render_type": "cubemap",
    "image": { "width": 1024, "height": 512 },
    "render_params": { "texture_exposure": 1.5, "texture_gamma": 1.0, "texture_saturation": 1.2 },
    "render_view": { "center_view": false, "traj_view": true },
    "camera_traj": {
        "type": "circle",
        "center_position": { "x": 0.5, "y": -1.0, "z": 1.2 },
        "start_orientations": { "x": 0.0, "y": 0.0, "z": 0.0 },
        "lock_direction": true,
        "radius": 0.8,
        "circle_step_number": 36,
        "grid_size": 0.2
    }
}"#;

#[test]
fn parses_full_scene_config() {
    let cfg = SceneConfig::from_reader(ROOM_CIRCLE.as_bytes()).unwrap();
    assert_eq!(cfg.scene_name, "room_0");
    assert_eq!(cfg.render_type, RenderType::Cubemap);
    assert_eq!(
        cfg.image,
        ImageSize {
            width: 1024,
            height: 512
        }
    );
    assert_eq!(cfg.render_params.texture_exposure, 1.5);
    assert_eq!(cfg.camera_traj.kind, "circle");
    assert_eq!(cfg.camera_traj.circle_step_number, Some(36));
    assert!(cfg.camera_traj.lock_direction);
    assert_eq!(cfg.camera_traj.center_position.unwrap().z, 1.2);
    assert_eq!(cfg.camera_traj.pose_count, None);
}

#[test]
fn optional_sections_take_defaults() {
    let json = r#"{
        "scene_name": "hotel_0",
        "image": { "width": 512, "height": 256 },
        "camera_traj": { "type": "grid", "grid_size": 0.5, "radius": 1.0 }
    }"#;
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.render_type, RenderType::Panorama);
    assert_eq!(cfg.render_params, RenderParams::default());
    assert!(cfg.render_view.traj_view);
    assert!(!cfg.render_view.center_view);
    assert_eq!(cfg.camera_traj.start_orientations, Xyz::default());
    assert!(!cfg.camera_traj.lock_direction);
}

#[test]
fn random_ranges_parse_as_axis_pairs() {
    let json = r#"{
        "scene_name": "office_0",
        "image": { "width": 512, "height": 256 },
        "camera_traj": {
            "type": "random",
            "center_position": { "x": 0.0, "y": 0.0, "z": 1.0 },
            "pose_count": 20,
            "seed": 7,
            "random_position_offset_range": [[-0.5, 0.5], [-0.5, 0.5], [-0.1, 0.1]],
            "random_rotation_offset_range": [[0, 0], [0, 0], [-10, 10]]
        }
    }"#;
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    let ranges = cfg.camera_traj.random_position_offset_range.unwrap();
    assert_eq!(ranges[2], AxisRange { min: -0.1, max: 0.1 });
    let rot = cfg.camera_traj.random_rotation_offset_range.unwrap();
    assert_eq!(rot[2].max, 10.0);
    assert_eq!(cfg.camera_traj.seed, Some(7));
}

#[test]
fn unknown_render_type_is_serde_error() {
    let json = ROOM_CIRCLE.replace("\"cubemap\"", "\"stereo\"");
    let err = SceneConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, PanoError::Serde(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let err = SceneConfig::from_path("target/definitely/missing/config.json").unwrap_err();
    match err {
        PanoError::Io { path, .. } => assert!(path.ends_with("config.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_path_names_file_in_parse_error() {
    let dir = crate::test_utils::scratch_dir("scene_config_bad_json");
    let path = dir.join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let msg = SceneConfig::from_path(&path).unwrap_err().to_string();
    assert!(msg.contains("config.json"), "{msg}");
}
