#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Not a valid absolute URL: {0}")]
    InvalidUrl(String),
    #[error("Unsupported link: only YouTube and Spotify are recognised")]
    UnsupportedProvider,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Could not read playlist data: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Could not encode playlist: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
