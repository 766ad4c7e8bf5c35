//! Writing figures to disk.
//!
//! Figures are encoded into a temporary file next to the destination and
//! renamed into place, so a reader never sees a partially written image.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::collaborators::Figure;

/// Encode `figure` as PNG and atomically replace `path` with it.
pub fn save_png(figure: &dyn Figure, path: &Path) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        figure.write_png(&mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), "Wrote figure");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BytesFigure(Vec<u8>);

    impl Figure for BytesFigure {
        fn write_png(&self, out: &mut dyn Write) -> std::io::Result<()> {
            out.write_all(&self.0)
        }
    }

    struct FailingFigure;

    impl Figure for FailingFigure {
        fn write_png(&self, out: &mut dyn Write) -> std::io::Result<()> {
            out.write_all(b"\x89PNG partial")?;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "encoder failed"))
        }
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conus/max_t.png");
        save_png(&BytesFigure(b"png-bytes".to_vec()), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_save_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("min_t.png");
        std::fs::write(&path, b"old").unwrap();
        save_png(&BytesFigure(b"new".to_vec()), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_failed_encode_leaves_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frost.png");
        std::fs::write(&path, b"previous").unwrap();

        assert!(save_png(&FailingFigure, &path).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
        // The temporary file is cleaned up on drop
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
