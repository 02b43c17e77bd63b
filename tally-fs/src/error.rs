use std::fmt::Display;

/// Errors that can occur during file storage operations.
#[derive(Debug)]
pub enum FileStoreError {
    /// An I/O error occurred while reading or writing files.
    Io(std::io::Error),
    /// A file in the data directory does not hold UTF-8 text.
    NotText { key: String },
}

impl Display for FileStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::NotText { key } => write!(f, "Payload of key `{}` is not UTF-8 text", key),
        }
    }
}

impl std::error::Error for FileStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NotText { .. } => None,
        }
    }
}

impl From<std::io::Error> for FileStoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
