use tracing::debug;

use crate::error::{PublishError, Result, UnavailableStage};
use crate::models::{DisplayUpdate, NowPlayingMetadata, PlaybackStatus};
use crate::platform::{MediaPlatform, NativePlatform, TransportControls, ViewScope};

/// Pushes now-playing metadata to the OS media overlay.
///
/// Must be called from a thread that can enter a single-threaded apartment.
/// Calls are not serialized here: concurrent callers must coordinate
/// themselves, and the OS arbitrates access to its controls singleton.
pub struct MediaStatusPublisher<P: MediaPlatform> {
    platform: P,
    scope: ViewScope,
}

impl MediaStatusPublisher<NativePlatform> {
    pub fn native(scope: ViewScope) -> Self {
        Self::new(NativePlatform::default(), scope)
    }
}

impl<P: MediaPlatform> MediaStatusPublisher<P> {
    pub fn new(platform: P, scope: ViewScope) -> Self {
        Self { platform, scope }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn scope(&self) -> ViewScope {
        self.scope
    }

    /// Replace whatever the OS is showing with `metadata` and mark it playing.
    ///
    /// The status is always set to [`PlaybackStatus::Playing`], whatever the
    /// real state of the audio is. A failure after the controls were acquired
    /// leaves the already-applied steps in place.
    pub fn publish_now_playing(&self, metadata: &NowPlayingMetadata) -> Result<()> {
        self.platform
            .ensure_runtime()
            .map_err(|source| PublishError::PlatformUnavailable {
                stage: UnavailableStage::RuntimeInit,
                source,
            })?;

        let controls = self
            .platform
            .acquire_controls(self.scope)
            .map_err(|source| PublishError::PlatformUnavailable {
                stage: UnavailableStage::AcquireControls,
                source,
            })?;

        controls
            .set_play_enabled(true)
            .map_err(PublishError::PlatformCall)?;
        controls
            .set_pause_enabled(true)
            .map_err(PublishError::PlatformCall)?;

        let update = DisplayUpdate::from(metadata);
        controls
            .commit_display(&update)
            .map_err(PublishError::PlatformCall)?;

        controls
            .set_playback_status(PlaybackStatus::Playing)
            .map_err(PublishError::PlatformCall)?;

        debug!(
            title = %metadata.title,
            artist = %metadata.artist,
            media_type = %metadata.media_type,
            scope = %self.scope,
            "Published now playing"
        );
        Ok(())
    }
}
