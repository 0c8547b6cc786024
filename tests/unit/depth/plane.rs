use super::*;

#[test]
fn new_rejects_mismatched_length() {
    assert!(DepthMap::new(3, 2, vec![0.0; 5]).is_err());
    let p = DepthMap::new(3, 2, vec![0.0; 6]).unwrap();
    assert_eq!((p.width(), p.height()), (3, 2));
}

#[test]
fn from_fn_is_row_major() {
    let p = Plane::from_fn(3, 2, |x, y| (y * 10 + x) as f32);
    assert_eq!(p.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    assert_eq!(p.get(2, 1), Some(&12.0));
    assert_eq!(p.get(3, 0), None);
}

#[test]
fn flip_rows_reverses_row_order() {
    let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    flip_rows(&mut data, 3);
    assert_eq!(data, vec![7, 8, 9, 4, 5, 6, 1, 2, 3]);

    let mut even = vec![1, 2, 3, 4];
    flip_rows(&mut even, 2);
    assert_eq!(even, vec![3, 4, 1, 2]);
}

#[test]
fn min_max_skips_filtered_values() {
    let p = DepthMap::new(4, 1, vec![0.0, 2.5, 1.0, 7.0]).unwrap();
    assert_eq!(p.min_max_by(|v| v != 0.0), Some((1.0, 7.0)));
    let empty = DepthMap::new(2, 1, vec![0.0, 0.0]).unwrap();
    assert_eq!(empty.min_max_by(|v| v != 0.0), None);
}
