//! Writing generated image bytes to disk. Stand-in for the photo library
//! and share-sheet collaborators: takes bytes, reports success or failure.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;

/// Writes image bytes into a flat export directory.
pub struct FileExporter {
    export_dir: PathBuf,
}

impl FileExporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    /// Save raw image bytes under a fresh uuid filename, detecting the
    /// extension from the content. Returns the written path.
    pub async fn save(&self, data: &[u8]) -> Result<PathBuf> {
        self.ensure_export_dir().await?;

        let format = detect_image_format(data).unwrap_or("png");
        let filename = format!("{}.{}", Uuid::new_v4(), format);
        let path = self.export_dir.join(&filename);

        fs::write(&path, data).await?;
        debug!(path = ?path, size = data.len(), "Exported image file");

        Ok(path)
    }

    async fn ensure_export_dir(&self) -> Result<()> {
        if !self.export_dir.exists() {
            fs::create_dir_all(&self.export_dir).await?;
            debug!(path = ?self.export_dir, "Created export directory");
        }
        Ok(())
    }
}

/// Detect image format from binary data using magic bytes.
fn detect_image_format(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("png");
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("jpg");
    }

    // WebP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("webp");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(detect_image_format(&png_header), Some("png"));
    }

    #[test]
    fn test_detect_jpeg() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(detect_image_format(&jpeg_header), Some("jpg"));
    }

    #[tokio::test]
    async fn test_save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path());

        let path = exporter.save(b"not really an image").await.unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "png");
    }
}
