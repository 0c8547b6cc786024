use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(PanoError::format("x").to_string().contains("format error:"));
    assert!(
        PanoError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        PanoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(PanoError::render("x").to_string().contains("render error:"));
}

#[test]
fn io_error_names_the_path() {
    let err = PanoError::io("some/dir/0000_depth.dpt", std::io::Error::other("boom"));
    let msg = err.to_string();
    assert!(msg.contains("some/dir/0000_depth.dpt"));
    assert!(msg.contains("boom"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PanoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    ensure_parent_dir(Path::new("bare.dpt")).unwrap();
}
