use crate::error::MarketError;
use crate::market::traits::ImageReader;
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use std::path::Path;
use tracing::debug;

/// Default size cap for user images (5 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Reads image files from disk into base64 `data:` URLs
#[derive(Debug, Clone)]
pub struct FileImageReader {
    max_bytes: u64,
}

impl FileImageReader {
    pub fn new() -> Self {
        Self::with_max_bytes(DEFAULT_MAX_IMAGE_BYTES)
    }

    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    fn reject(path: &Path, reason: impl Into<String>) -> anyhow::Error {
        MarketError::Image {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }
}

impl Default for FileImageReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageReader for FileImageReader {
    async fn read_data_url(&self, path: &Path) -> Result<String> {
        let mime = mime_guess::from_path(path)
            .first()
            .filter(|m| m.type_() == mime_guess::mime::IMAGE)
            .ok_or_else(|| Self::reject(path, "not an image file"))?;

        let meta = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if meta.len() > self.max_bytes {
            return Err(Self::reject(
                path,
                format!("{} bytes exceeds limit of {}", meta.len(), self.max_bytes),
            ));
        }

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        debug!("Read {} bytes of {} from {}", bytes.len(), mime, path.display());

        Ok(format!(
            "data:{};base64,{}",
            mime.essence_str(),
            general_purpose::STANDARD.encode(&bytes)
        ))
    }

    fn reader_name(&self) -> &'static str {
        "file"
    }
}
