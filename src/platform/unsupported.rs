use super::{MediaPlatform, TransportControls, ViewScope};
use crate::error::PlatformError;
use crate::models::{DisplayUpdate, PlaybackStatus};

/// Stand-in for targets without System Media Transport Controls.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPlatform;

/// Never constructed: acquiring controls always fails on this target.
pub enum NoControls {}

impl MediaPlatform for UnsupportedPlatform {
    type Controls = NoControls;

    fn ensure_runtime(&self) -> Result<(), PlatformError> {
        Err(PlatformError::new(
            "ensure_runtime",
            0,
            format!(
                "System Media Transport Controls require Windows (running on {})",
                std::env::consts::OS
            ),
        ))
    }

    fn acquire_controls(&self, _scope: ViewScope) -> Result<NoControls, PlatformError> {
        Err(PlatformError::new(
            "acquire_controls",
            0,
            "no media transport controls on this platform",
        ))
    }
}

impl TransportControls for NoControls {
    fn set_play_enabled(&self, _enabled: bool) -> Result<(), PlatformError> {
        match *self {}
    }

    fn set_pause_enabled(&self, _enabled: bool) -> Result<(), PlatformError> {
        match *self {}
    }

    fn commit_display(&self, _update: &DisplayUpdate) -> Result<(), PlatformError> {
        match *self {}
    }

    fn set_playback_status(&self, _status: PlaybackStatus) -> Result<(), PlatformError> {
        match *self {}
    }
}
