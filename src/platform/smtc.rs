use std::ffi::c_void;

use tracing::debug;
use windows::Media::{
    MediaPlaybackStatus, MediaPlaybackType, SystemMediaTransportControls,
    SystemMediaTransportControlsDisplayUpdater,
};
use windows::Win32::Foundation::{HWND, RPC_E_CHANGED_MODE};
use windows::Win32::System::Com::{COINIT_APARTMENTTHREADED, CoInitializeEx};
use windows::Win32::System::WinRT::ISystemMediaTransportControlsInterop;
use windows::core::{HSTRING, factory};

use super::{MediaPlatform, TransportControls, ViewScope};
use crate::error::PlatformError;
use crate::models::{DisplayUpdate, MediaType, PlaybackStatus};

/// System Media Transport Controls through WinRT.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsPlatform;

impl MediaPlatform for WindowsPlatform {
    type Controls = WindowsTransportControls;

    fn ensure_runtime(&self) -> Result<(), PlatformError> {
        // SAFETY: no reserved pointer is passed. The apartment is never torn down
        // here because the host owns the thread.
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        if hr == RPC_E_CHANGED_MODE {
            debug!("Thread already joined a multithreaded apartment, reusing it");
            return Ok(());
        }
        hr.ok()
            .map_err(|e| PlatformError::from_windows("CoInitializeEx", e))
    }

    fn acquire_controls(&self, scope: ViewScope) -> Result<Self::Controls, PlatformError> {
        let smtc = match scope {
            ViewScope::CurrentView => SystemMediaTransportControls::GetForCurrentView()
                .map_err(|e| PlatformError::from_windows("GetForCurrentView", e))?,
            ViewScope::Window(hwnd) => {
                let interop = factory::<
                    SystemMediaTransportControls,
                    ISystemMediaTransportControlsInterop,
                >()
                .map_err(|e| PlatformError::from_windows("ISystemMediaTransportControlsInterop", e))?;
                // SAFETY: the handle comes from the host; the OS validates it and
                // reports E_INVALIDARG or similar for a stale window.
                unsafe { interop.GetForWindow(HWND(hwnd as *mut c_void)) }
                    .map_err(|e| PlatformError::from_windows("GetForWindow", e))?
            }
        };

        Ok(WindowsTransportControls { smtc })
    }
}

pub struct WindowsTransportControls {
    smtc: SystemMediaTransportControls,
}

impl WindowsTransportControls {
    fn write_properties(
        updater: &SystemMediaTransportControlsDisplayUpdater,
        update: &DisplayUpdate,
    ) -> windows::core::Result<()> {
        let title = HSTRING::from(update.title.as_str());
        let artist = HSTRING::from(update.artist.as_str());

        match update.media_type {
            MediaType::Music => {
                let music = updater.MusicProperties()?;
                music.SetTitle(&title)?;
                music.SetArtist(&artist)?;
            }
            MediaType::Video => {
                let video = updater.VideoProperties()?;
                video.SetTitle(&title)?;
                video.SetSubtitle(&artist)?;
            }
            MediaType::Image => {
                let image = updater.ImageProperties()?;
                image.SetTitle(&title)?;
                image.SetSubtitle(&artist)?;
            }
            // No property set exists for this type; ClearAll already blanked the text.
            MediaType::Unknown => {}
        }
        Ok(())
    }
}

impl TransportControls for WindowsTransportControls {
    fn set_play_enabled(&self, enabled: bool) -> Result<(), PlatformError> {
        self.smtc
            .SetIsPlayEnabled(enabled)
            .map_err(|e| PlatformError::from_windows("SetIsPlayEnabled", e))
    }

    fn set_pause_enabled(&self, enabled: bool) -> Result<(), PlatformError> {
        self.smtc
            .SetIsPauseEnabled(enabled)
            .map_err(|e| PlatformError::from_windows("SetIsPauseEnabled", e))
    }

    fn commit_display(&self, update: &DisplayUpdate) -> Result<(), PlatformError> {
        let updater = self
            .smtc
            .DisplayUpdater()
            .map_err(|e| PlatformError::from_windows("DisplayUpdater", e))?;

        // The updater keeps earlier property values; start from a blank record.
        updater
            .ClearAll()
            .map_err(|e| PlatformError::from_windows("DisplayUpdater.ClearAll", e))?;
        updater
            .SetType(playback_type(update.media_type))
            .map_err(|e| PlatformError::from_windows("DisplayUpdater.SetType", e))?;
        Self::write_properties(&updater, update)
            .map_err(|e| PlatformError::from_windows("DisplayUpdater properties", e))?;
        updater
            .Update()
            .map_err(|e| PlatformError::from_windows("DisplayUpdater.Update", e))
    }

    fn set_playback_status(&self, status: PlaybackStatus) -> Result<(), PlatformError> {
        self.smtc
            .SetPlaybackStatus(playback_status(status))
            .map_err(|e| PlatformError::from_windows("SetPlaybackStatus", e))
    }
}

fn playback_type(media_type: MediaType) -> MediaPlaybackType {
    match media_type {
        MediaType::Unknown => MediaPlaybackType::Unknown,
        MediaType::Music => MediaPlaybackType::Music,
        MediaType::Video => MediaPlaybackType::Video,
        MediaType::Image => MediaPlaybackType::Image,
    }
}

fn playback_status(status: PlaybackStatus) -> MediaPlaybackStatus {
    match status {
        PlaybackStatus::Closed => MediaPlaybackStatus::Closed,
        PlaybackStatus::Changing => MediaPlaybackStatus::Changing,
        PlaybackStatus::Stopped => MediaPlaybackStatus::Stopped,
        PlaybackStatus::Playing => MediaPlaybackStatus::Playing,
        PlaybackStatus::Paused => MediaPlaybackStatus::Paused,
    }
}
