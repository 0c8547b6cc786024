use std::path::PathBuf;

/// Fresh, empty scratch directory under `target/test-scratch/<name>`.
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("test-scratch").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
