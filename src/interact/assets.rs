use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to load asset: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Asset not available: {0}")]
    Unavailable(String),
}

/// Resolves a logo URI to a displayable image.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn load(&self, uri: &str) -> Result<(), AssetError>;
}
