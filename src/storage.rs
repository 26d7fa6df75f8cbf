//! Media storage for uploaded material images. Files are written under the
//! configured media root and referenced from the database by relative path;
//! the bytes themselves are opaque to the rest of the system.

use chrono::{Datelike, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Clone, Debug)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist uploaded image bytes, returning the relative path to store on
    /// the material row. Layout mirrors `materials/{year}/{month}/` with a
    /// generated file name so concurrent uploads never collide.
    pub async fn save_material_image(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let relative = format!(
            "materials/{:04}/{:02}/{}.{}",
            now.year(),
            now.month(),
            Uuid::new_v4(),
            sanitized_extension(original_name),
        );

        let target = self.root.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::StorageError(format!("creating media dir: {e}")))?;
        }
        fs::write(&target, bytes)
            .await
            .map_err(|e| ServiceError::StorageError(format!("writing image: {e}")))?;

        Ok(relative)
    }

    /// Best-effort removal of a stored image; a missing file is not an error.
    pub async fn remove(&self, relative: &str) {
        let target = self.root.join(relative);
        if let Err(e) = fs::remove_file(&target).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %target.display(), error = %e, "failed to remove image");
            }
        }
    }
}

fn sanitized_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(sanitized_extension("shade.JPG"), "jpg");
        assert_eq!(sanitized_extension("no-extension"), "bin");
        assert_eq!(sanitized_extension("weird.j/pg"), "bin");
    }

    #[tokio::test]
    async fn save_and_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());
        let rel = store
            .save_material_image("swatch.png", b"not-really-a-png")
            .await
            .unwrap();
        assert!(rel.starts_with("materials/"));
        assert!(dir.path().join(&rel).exists());
        store.remove(&rel).await;
        assert!(!dir.path().join(&rel).exists());
    }
}
