//! Error types for zip-bundle

use std::io;

/// Result type for zip-bundle operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Error types that can occur while building an archive
#[derive(Debug)]
pub enum BundleError {
    /// A required input was missing or malformed
    InvalidArgument(&'static str),
    /// I/O error while reading a source or writing the output buffer
    Io(io::Error),
    /// The archive backend rejected an operation
    Archive(zip::result::ZipError),
    /// The async archive backend rejected an operation
    #[cfg(feature = "async")]
    AsyncArchive(async_zip::error::ZipError),
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            BundleError::Io(e) => write!(f, "I/O error: {}", e),
            BundleError::Archive(e) => write!(f, "archive error: {}", e),
            #[cfg(feature = "async")]
            BundleError::AsyncArchive(e) => write!(f, "archive error: {}", e),
        }
    }
}

impl std::error::Error for BundleError {}

impl From<io::Error> for BundleError {
    fn from(err: io::Error) -> Self {
        BundleError::Io(err)
    }
}

impl From<zip::result::ZipError> for BundleError {
    fn from(err: zip::result::ZipError) -> Self {
        BundleError::Archive(err)
    }
}

#[cfg(feature = "async")]
impl From<async_zip::error::ZipError> for BundleError {
    fn from(err: async_zip::error::ZipError) -> Self {
        BundleError::AsyncArchive(err)
    }
}
