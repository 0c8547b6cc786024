use super::*;
use crate::DepthMap;

#[test]
fn zero_depth_maps_to_infinity() {
    let depth = DepthMap::new(3, 1, vec![0.0, 2.0, -0.0]).unwrap();
    let disp = depth_to_disparity(&depth, 0.5, 4.0);
    assert_eq!(disp.as_slice(), &[f64::INFINITY, 1.0, f64::INFINITY]);
}

#[test]
fn roundtrip_is_identity_for_finite_nonzero_depth() {
    let depth = DepthMap::from_fn(8, 4, |x, y| 0.05 + x as f32 * 1.3 + y as f32 * 0.01);
    let disp = depth_to_disparity(&depth, 0.064, 512.0);
    let back = disparity_to_depth(&disp, 0.064, 512.0);
    for (a, b) in depth.as_slice().iter().zip(back.as_slice()) {
        let a = f64::from(*a);
        assert!((a - b).abs() <= a.abs() * 1e-12, "{a} vs {b}");
    }
}

#[test]
fn tiny_f32_depth_does_not_overflow() {
    let depth = DepthMap::new(1, 1, vec![f32::MIN_POSITIVE]).unwrap();
    let disp = depth_to_disparity(&depth, 1e6, 1e6);
    let v = disp.as_slice()[0];
    assert!(v.is_finite());
    assert!(v > f64::from(f32::MAX));
}

#[test]
fn infinity_disparity_converts_to_zero_depth() {
    let disp = DisparityMap::new(2, 1, vec![f64::INFINITY, 0.0]).unwrap();
    let depth = disparity_to_depth(&disp, 1.0, 1.0);
    assert_eq!(depth.as_slice(), &[0.0, f64::INFINITY]);
}
