//! Error types for publishing to the media transport controls

/// Result type alias for publish operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// A failed call into the OS media-session API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed: {message} (0x{code:08X})")]
pub struct PlatformError {
    pub operation: &'static str,
    /// HRESULT of the failed call, or zero when the OS gave none
    pub code: i32,
    pub message: String,
}

impl PlatformError {
    pub fn new(operation: &'static str, code: i32, message: impl Into<String>) -> Self {
        Self {
            operation,
            code,
            message: message.into(),
        }
    }
}

#[cfg(target_os = "windows")]
impl PlatformError {
    pub(crate) fn from_windows(operation: &'static str, err: windows::core::Error) -> Self {
        Self::new(operation, err.code().0, err.message())
    }
}

/// Where the media-session runtime gave out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableStage {
    RuntimeInit,
    AcquireControls,
}

impl std::fmt::Display for UnavailableStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableStage::RuntimeInit => write!(f, "runtime initialization"),
            UnavailableStage::AcquireControls => write!(f, "transport controls acquisition"),
        }
    }
}

/// Errors that can occur while publishing now-playing metadata
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Runtime could not be initialized or the controls singleton could not be obtained
    #[error("Media platform unavailable during {stage}: {source}")]
    PlatformUnavailable {
        stage: UnavailableStage,
        #[source]
        source: PlatformError,
    },

    /// A call on already-acquired controls failed; earlier steps are not rolled back
    #[error("Media platform call failed: {0}")]
    PlatformCall(#[source] PlatformError),
}

impl PublishError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PublishError::PlatformUnavailable { .. })
    }
}
