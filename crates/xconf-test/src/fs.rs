use std::io::Write;
use std::{fs::File, path::PathBuf};

pub type TempFile = PathBuf;

/// Writes `content` to a file named `name` in the system temp directory.
/// Callers pick unique names and clean up with `defer!`.
pub fn create_file(name: &str, content: &str) -> TempFile {
    let path = temp_path(name);
    let mut file = File::create(&path).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");

    path
}

/// A path in the system temp directory without creating the file.
pub fn temp_path(name: &str) -> TempFile {
    std::env::temp_dir().join(name)
}
