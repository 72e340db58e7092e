//! Seam between the publisher and the OS media-session API.
//!
//! The transport controls are a per-session singleton owned by the OS. Backends
//! hand out handles to it but the publisher never manages its lifetime.

use crate::error::PlatformError;
use crate::models::{DisplayUpdate, PlaybackStatus};

#[cfg(test)]
pub(crate) mod memory;

#[cfg(target_os = "windows")]
mod smtc;
#[cfg(not(target_os = "windows"))]
mod unsupported;

#[cfg(target_os = "windows")]
pub use smtc::{WindowsPlatform as NativePlatform, WindowsTransportControls};
#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedPlatform as NativePlatform;

/// Which view the transport controls are scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewScope {
    /// The calling thread's CoreWindow view (UWP-style hosts)
    #[default]
    CurrentView,
    /// A Win32 top-level window, given as its raw `HWND`
    Window(isize),
}

impl std::fmt::Display for ViewScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewScope::CurrentView => write!(f, "current view"),
            ViewScope::Window(hwnd) => write!(f, "window 0x{hwnd:X}"),
        }
    }
}

pub trait MediaPlatform {
    type Controls: TransportControls;

    /// Make the media-session runtime usable on the calling thread.
    /// Must succeed when the runtime was already initialized earlier.
    fn ensure_runtime(&self) -> Result<(), PlatformError>;

    fn acquire_controls(&self, scope: ViewScope) -> Result<Self::Controls, PlatformError>;
}

/// Operations on an acquired transport-controls handle.
pub trait TransportControls {
    fn set_play_enabled(&self, enabled: bool) -> Result<(), PlatformError>;

    fn set_pause_enabled(&self, enabled: bool) -> Result<(), PlatformError>;

    /// Apply every field of `update` and push it to the display in one commit.
    fn commit_display(&self, update: &DisplayUpdate) -> Result<(), PlatformError>;

    fn set_playback_status(&self, status: PlaybackStatus) -> Result<(), PlatformError>;
}
