use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Source of creation timestamps for new listings
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Turns a user-selected file into an embeddable image reference.
/// Each call is a single-shot read with no cancellation.
#[async_trait]
pub trait ImageReader: Send + Sync {
    /// Read the file and return a `data:` URL for it
    async fn read_data_url(&self, path: &Path) -> Result<String>;

    /// Name of the reader, for logs
    fn reader_name(&self) -> &'static str;
}
