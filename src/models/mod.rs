use serde::{Deserialize, Serialize};

/// Track information shown in the OS media overlay.
///
/// Nothing here is validated: empty strings are published as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlayingMetadata {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub media_type: MediaType,
}

impl NowPlayingMetadata {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            media_type: MediaType::Music,
        }
    }

    /// The fixed entry published by the argument-less `UpdateSMTCDisplay` export.
    pub fn placeholder() -> Self {
        Self::new("Your Song Title", "Your Artist Name")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Unknown,
    #[default]
    Music,
    Video,
    Image,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Unknown => write!(f, "unknown"),
            MediaType::Music => write!(f, "music"),
            MediaType::Video => write!(f, "video"),
            MediaType::Image => write!(f, "image"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(MediaType::Unknown),
            "music" => Ok(MediaType::Music),
            "video" => Ok(MediaType::Video),
            "image" => Ok(MediaType::Image),
            _ => Err(format!("Invalid media type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    #[default]
    Closed,
    Changing,
    Stopped,
    Playing,
    Paused,
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackStatus::Closed => write!(f, "closed"),
            PlaybackStatus::Changing => write!(f, "changing"),
            PlaybackStatus::Stopped => write!(f, "stopped"),
            PlaybackStatus::Playing => write!(f, "playing"),
            PlaybackStatus::Paused => write!(f, "paused"),
        }
    }
}

impl std::str::FromStr for PlaybackStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "closed" => Ok(PlaybackStatus::Closed),
            "changing" => Ok(PlaybackStatus::Changing),
            "stopped" => Ok(PlaybackStatus::Stopped),
            "playing" => Ok(PlaybackStatus::Playing),
            "paused" => Ok(PlaybackStatus::Paused),
            _ => Err(format!("Invalid playback status: {s}")),
        }
    }
}

/// One batched display transaction: every field lands in a single `Update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub media_type: MediaType,
    pub title: String,
    pub artist: String,
}

impl DisplayUpdate {
    /// The record as the OS shows it: an `Unknown` type has no property set,
    /// so its title and artist come out blank.
    pub fn as_displayed(&self) -> DisplayUpdate {
        match self.media_type {
            MediaType::Unknown => DisplayUpdate {
                media_type: MediaType::Unknown,
                title: String::new(),
                artist: String::new(),
            },
            _ => self.clone(),
        }
    }
}

impl From<&NowPlayingMetadata> for DisplayUpdate {
    fn from(metadata: &NowPlayingMetadata) -> Self {
        Self {
            media_type: metadata.media_type,
            title: metadata.title.clone(),
            artist: metadata.artist.clone(),
        }
    }
}
