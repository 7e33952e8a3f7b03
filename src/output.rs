//! Writes the rendered table into its destination directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tempfile::NamedTempFile;

use crate::constants::OUTPUT_FILE_NAME;

/// Location and size of a successfully written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Final path of the generated file.
    pub path: PathBuf,
    /// Length of the file in bytes.
    pub bytes: u64,
}

impl GeneratedArtifact {
    /// Size in whole kilobytes, as reported by the confirmation line.
    #[must_use]
    pub const fn kilobytes(&self) -> u64 {
        self.bytes / 1024
    }
}

/// Writes `contents` to `DirLut.cs` inside `dir`, replacing any existing
/// copy.
///
/// The text lands in a temporary file in the same directory first and is
/// persisted over the destination, so a failed run never leaves a
/// truncated table behind. Reruns with the same contents are
/// byte-identical.
///
/// # Errors
/// Returns an error when `dir` does not exist or is not writable.
pub fn write_artifact(dir: impl AsRef<Path>, contents: &str) -> Result<GeneratedArtifact> {
    let dir = dir.as_ref();
    let path = dir.join(OUTPUT_FILE_NAME);

    let mut tmp = NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("creating temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .wrap_err("writing table contents")?;
    tmp.persist(&path)
        .wrap_err_with(|| format!("replacing {}", path.display()))?;

    let bytes = fs::metadata(&path)
        .wrap_err_with(|| format!("inspecting {}", path.display()))?
        .len();
    log::debug!("wrote {} ({bytes} bytes)", path.display());

    Ok(GeneratedArtifact { path, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn writes_the_named_file(temp_dir: TempDir) {
        let artifact = write_artifact(temp_dir.path(), "contents\n").unwrap();
        assert_eq!(artifact.path, temp_dir.path().join(OUTPUT_FILE_NAME));
        assert_eq!(fs::read_to_string(&artifact.path).unwrap(), "contents\n");
        assert_eq!(artifact.bytes, 9);
    }

    #[rstest]
    fn replaces_an_existing_copy(temp_dir: TempDir) {
        let path = temp_dir.path().join(OUTPUT_FILE_NAME);
        fs::write(&path, "stale table").unwrap();
        write_artifact(temp_dir.path(), "fresh table").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh table");
    }

    #[rstest]
    fn missing_directory_is_an_error(temp_dir: TempDir) {
        let missing = temp_dir.path().join("does-not-exist");
        assert!(write_artifact(&missing, "contents").is_err());
    }

    #[rstest]
    fn kilobytes_floors_to_whole_units() {
        let artifact = GeneratedArtifact {
            path: PathBuf::from(OUTPUT_FILE_NAME),
            bytes: 2500,
        };
        assert_eq!(artifact.kilobytes(), 2);
    }
}
