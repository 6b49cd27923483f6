use async_trait::async_trait;
use std::convert::Infallible;
use std::error::Error;
use std::path::PathBuf;

/// Trait for reading the raw text of a job document
#[async_trait]
pub trait DocumentSource: Send + Sync {
    type E: Error + Send + Sync + 'static;
    async fn read_text(&self) -> Result<String, Self::E>;
    /// Human readable origin, used in log lines
    fn describe(&self) -> String;
}

/// A document on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    type E = std::io::Error;

    async fn read_text(&self) -> Result<String, Self::E> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        log::debug!("read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document already held in memory
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl DocumentSource for TextSource {
    type E = Infallible;

    async fn read_text(&self) -> Result<String, Self::E> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory document ({} bytes)", self.text.len())
    }
}
