use super::*;
use crate::depth::dpt::write_dpt;
use crate::depth::plane::DepthMap;

fn write_pano_depth(dir: &Path, frames: usize) {
    let pano = PanoLayout::new(dir);
    for frame in 0..frames {
        let depth = DepthMap::from_fn(4, 2, |x, _| if x == 0 { 0.0 } else { x as f32 });
        write_dpt(&depth, pano.depth(frame)).unwrap();
    }
}

#[test]
fn masks_mark_zero_depth() {
    let dir = crate::test_utils::scratch_dir("post_masks");
    write_pano_depth(&dir, 2);

    mask_folder(&dir, 2).unwrap();

    let mask = image::open(PanoLayout::new(&dir).mask(1)).unwrap().to_luma8();
    assert_eq!(mask.dimensions(), (4, 2));
    assert_eq!(mask.get_pixel(0, 1)[0], 255);
    assert_eq!(mask.get_pixel(3, 0)[0], 0);
}

#[test]
fn post_process_follows_toggles() {
    let dir = crate::test_utils::scratch_dir("post_toggles");
    write_pano_depth(&dir, 1);
    let env = RenderEnv {
        render_unavailable_mask: false,
        visualize: true,
        ..RenderEnv::default()
    };

    post_process(&env, &dir, 1).unwrap();

    let pano = PanoLayout::new(&dir);
    assert!(pano.depth_visual(0).exists());
    assert!(!pano.mask(0).exists());
}

#[test]
fn missing_depth_frame_is_io_error() {
    let dir = crate::test_utils::scratch_dir("post_missing_frame");
    write_pano_depth(&dir, 1);
    let err = visualize_depth_folder(&dir, 2).unwrap_err();
    assert!(err.to_string().contains("0001_depth_pano.dpt"), "{err}");
}
