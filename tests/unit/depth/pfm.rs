use super::*;
use crate::test_utils::scratch_dir;

#[test]
fn grey_roundtrip_preserves_orientation_and_scale() {
    let dir = scratch_dir("pfm_grey");
    let path = dir.join("depth.pfm");
    let depth = DepthMap::from_fn(4, 3, |x, y| (y * 4 + x) as f32 * 0.5);
    write_pfm_depth(&depth, &path, 2.5).unwrap();

    let (img, scale) = read_pfm(&path).unwrap();
    assert_eq!(scale, 2.5);
    assert_eq!(img.channels, PfmChannels::Grey);
    assert_eq!(img.shape(), vec![3, 4]);
    assert_eq!(img.into_depth().unwrap(), depth);
}

#[test]
fn color_roundtrip() {
    let dir = scratch_dir("pfm_color");
    let path = dir.join("rgb.pfm");
    let data: Vec<f32> = (0..2 * 3 * 3).map(|i| i as f32 / 7.0).collect();
    write_pfm(&path, &[2, 3, 3], &data, 1.0).unwrap();

    let (img, scale) = read_pfm(&path).unwrap();
    assert_eq!(scale, 1.0);
    assert_eq!(img.channels, PfmChannels::Color);
    assert_eq!(img.shape(), vec![2, 3, 3]);
    assert_eq!(img.data, data);
    assert!(img.into_depth().is_err());
}

#[test]
fn payload_is_stored_bottom_row_first() {
    let dir = scratch_dir("pfm_flip");
    let path = dir.join("flip.pfm");
    write_pfm(&path, &[2, 1, 1], &[1.0f32, 2.0], 1.0).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = if cfg!(target_endian = "little") {
        "Pf\n1 2\n-1.0\n"
    } else {
        "Pf\n1 2\n1.0\n"
    };
    assert!(bytes.starts_with(header.as_bytes()));
    let payload = &bytes[header.len()..];
    assert_eq!(payload.len(), 8);
    assert_eq!(f32::from_ne_bytes(payload[0..4].try_into().unwrap()), 2.0);
    assert_eq!(f32::from_ne_bytes(payload[4..8].try_into().unwrap()), 1.0);
}

#[test]
fn reads_big_endian_payload_when_scale_is_positive() {
    let dir = scratch_dir("pfm_big_endian");
    let path = dir.join("be.pfm");
    let mut bytes = b"Pf\n2 1\n3.0\n".to_vec();
    bytes.extend_from_slice(&1.5f32.to_be_bytes());
    bytes.extend_from_slice(&(-4.0f32).to_be_bytes());
    std::fs::write(&path, bytes).unwrap();

    let (img, scale) = read_pfm(&path).unwrap();
    assert_eq!(scale, 3.0);
    assert_eq!(img.data, vec![1.5, -4.0]);
}

#[test]
fn non_f32_input_is_converted_not_rejected() {
    let dir = scratch_dir("pfm_cast");
    let path = dir.join("cast.pfm");
    write_pfm(&path, &[1, 2, 1], &[0.25f64, 1e3], 1.0).unwrap();
    let (img, _) = read_pfm(&path).unwrap();
    assert_eq!(img.data, vec![0.25, 1000.0]);
}

#[test]
fn bad_shape_fails_before_writing() {
    let dir = scratch_dir("pfm_bad_shape");
    let path = dir.join("never.pfm");
    let shapes: [&[usize]; 3] = [&[4], &[2, 2, 2], &[1, 1, 1, 1]];
    for shape in shapes {
        let err = write_pfm(&path, shape, &[0f32; 4], 1.0).unwrap_err();
        assert!(matches!(err, crate::PanoError::Format(_)), "{shape:?}");
    }
    assert!(write_pfm(&path, &[2, 2], &[0f32; 3], 1.0).is_err());
    assert!(!path.exists());
}

#[test]
fn scale_roundtrips_exactly_and_keeps_byte_order() {
    let dir = scratch_dir("pfm_scale_digits");
    for scale in [1e-7f32, 1.2345678, 3.0e12, f32::MIN_POSITIVE] {
        let path = dir.join("scale.pfm");
        write_pfm(&path, &[1, 2], &[1.5f32, 2.0], scale).unwrap();
        let (img, read_scale) = read_pfm(&path).unwrap();
        assert_eq!(read_scale, scale);
        assert_eq!(img.data, vec![1.5, 2.0], "scale {scale:?}");
    }
}

#[test]
fn non_positive_or_non_finite_scale_fails_before_writing() {
    let dir = scratch_dir("pfm_bad_scale");
    let path = dir.join("never.pfm");
    for scale in [0.0f32, -0.0, -2.0, f32::NAN, f32::INFINITY] {
        let err = write_pfm(&path, &[1, 2], &[1.5f32, 2.0], scale).unwrap_err();
        assert!(
            matches!(err, crate::PanoError::Format(ref m) if m.contains("scale")),
            "{scale:?}"
        );
    }
    assert!(!path.exists());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_dimensions_are_a_format_error() {
    let dir = scratch_dir("pfm_huge_dims");
    for magic in ["PF", "Pf"] {
        let path = dir.join(format!("{magic}.pfm"));
        let mut bytes = format!("{magic}\n4294967296 4294967296\n-1.0\n").into_bytes();
        bytes.extend_from_slice(&[0u8; 4]);
        std::fs::write(&path, bytes).unwrap();
        assert!(matches!(
            read_pfm(&path).unwrap_err(),
            crate::PanoError::Format(ref m) if m.contains("too large")
        ));
    }
}

#[test]
fn rejects_bad_magic_and_header() {
    let dir = scratch_dir("pfm_bad_header");

    let magic = dir.join("magic.pfm");
    std::fs::write(&magic, b"P6\n1 1\n-1.0\n\0\0\0\0").unwrap();
    assert!(matches!(
        read_pfm(&magic).unwrap_err(),
        crate::PanoError::Format(_)
    ));

    let dims = dir.join("dims.pfm");
    std::fs::write(&dims, b"Pf\n1  1\n-1.0\n\0\0\0\0").unwrap();
    assert!(matches!(
        read_pfm(&dims).unwrap_err(),
        crate::PanoError::Format(ref m) if m.contains("malformed PFM header")
    ));

    let short = dir.join("short.pfm");
    std::fs::write(&short, b"Pf\n2 2\n-1.0\n\0\0\0\0").unwrap();
    assert!(read_pfm(&short).is_err());
}

#[test]
fn dimension_line_matching() {
    assert_eq!(parse_dims("640 480\n"), Some((640, 480)));
    assert_eq!(parse_dims("640 480 \n"), Some((640, 480)));
    assert_eq!(parse_dims("640\t480\n"), Some((640, 480)));
    assert_eq!(parse_dims("640 480"), None);
    assert_eq!(parse_dims("640 -480\n"), None);
    assert_eq!(parse_dims("640 480 1\n"), None);
}
