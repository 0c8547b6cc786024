use super::*;
use crate::test_utils::scratch_dir;

#[test]
fn jet_endpoints() {
    assert_eq!(jet(0.0), [0, 0, 128]);
    assert_eq!(jet(0.5), [128, 255, 128]);
    assert_eq!(jet(1.0), [128, 0, 0]);
    assert_eq!(jet(-3.0), jet(0.0));
}

#[test]
fn color_spans_min_to_max() {
    let depth = DepthMap::new(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let img = depth_to_color(&depth);
    assert_eq!(img.dimensions(), (3, 1));
    assert_eq!(img.get_pixel(0, 0).0, jet(0.0));
    assert_eq!(img.get_pixel(2, 0).0, jet(1.0));
}

#[test]
fn constant_depth_does_not_divide_by_zero() {
    let depth = DepthMap::new(2, 2, vec![4.0; 4]).unwrap();
    let img = depth_to_color(&depth);
    assert!(img.pixels().all(|p| p.0 == jet(0.0)));
}

#[test]
fn mask_marks_zero_depth() {
    let depth = DepthMap::new(2, 2, vec![0.0, 1.0, 2.0, 0.0]).unwrap();
    let mask = depth_mask(&depth);
    assert_eq!(mask.get_pixel(0, 0).0, [255]);
    assert_eq!(mask.get_pixel(1, 0).0, [0]);
    assert_eq!(mask.get_pixel(0, 1).0, [0]);
    assert_eq!(mask.get_pixel(1, 1).0, [255]);
}

#[test]
fn saves_png_files() {
    let dir = scratch_dir("depth_visual_save");
    let depth = DepthMap::from_fn(8, 4, |x, _| x as f32);
    save_depth_visual(&depth, dir.join("v.png")).unwrap();
    save_depth_mask(&depth, dir.join("m.png")).unwrap();
    let back = image::open(dir.join("m.png")).unwrap().to_luma8();
    assert_eq!(back.get_pixel(0, 0).0, [255]);
    assert_eq!(back.get_pixel(1, 0).0, [0]);
}
