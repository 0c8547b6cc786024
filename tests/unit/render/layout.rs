use super::*;

#[test]
fn faces_follow_renderer_order() {
    let abbrs: Vec<&str> = CubeFace::ALL.iter().map(|f| f.abbr()).collect();
    assert_eq!(abbrs, ["R", "L", "U", "D", "F", "B"]);
}

#[test]
fn cubemap_names_are_zero_padded() {
    let root = Path::new("out/cubemap");
    let l = CubemapLayout::new(root);
    assert_eq!(l.rgb(7, CubeFace::Up), root.join("0007_U_rgb.jpg"));
    assert_eq!(l.depth(123, CubeFace::Back), root.join("0123_B_depth.dpt"));
    assert_eq!(
        l.flow(0, CubeFace::Right, FlowDirection::Backward),
        root.join("0000_R_motionvector_backward.flo")
    );
}

#[test]
fn pano_names() {
    let root = Path::new("out/pano");
    let l = PanoLayout::new(root);
    assert_eq!(l.rgb(3), root.join("0003_rgb_pano.png"));
    assert_eq!(l.depth(3), root.join("0003_depth_pano.dpt"));
    assert_eq!(l.depth_visual(3), root.join("0003_depth_pano_visual.jpg"));
    assert_eq!(l.mask(3), root.join("0003_mask_pano.png"));
    assert_eq!(
        l.flow(12, FlowDirection::Forward),
        root.join("0012_opticalflow_forward_pano.flo")
    );
}
