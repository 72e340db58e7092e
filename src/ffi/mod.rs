//! C ABI loaded by the host's native-plugin bridge (e.g. `dart:ffi`).
//!
//! No export unwinds into the host: panics are caught and reported as
//! [`FfiStatus::Panicked`]. Strings are NUL-terminated UTF-8 owned by the caller.

use std::ffi::{CStr, c_char, c_void};
use std::panic::{self, AssertUnwindSafe};

use tracing::{error, warn};

use crate::config::Config;
use crate::error::PublishError;
use crate::logging;
use crate::models::NowPlayingMetadata;
use crate::platform::ViewScope;
use crate::publisher::MediaStatusPublisher;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStatus {
    Ok = 0,
    InvalidArgument = 1,
    PlatformUnavailable = 2,
    PlatformCallFailed = 3,
    Panicked = 4,
}

impl FfiStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FfiStatus::Ok),
            1 => Some(FfiStatus::InvalidArgument),
            2 => Some(FfiStatus::PlatformUnavailable),
            3 => Some(FfiStatus::PlatformCallFailed),
            4 => Some(FfiStatus::Panicked),
            _ => None,
        }
    }

    pub fn message(self) -> &'static CStr {
        match self {
            FfiStatus::Ok => c"ok",
            FfiStatus::InvalidArgument => c"invalid argument",
            FfiStatus::PlatformUnavailable => c"media transport controls unavailable",
            FfiStatus::PlatformCallFailed => c"media transport controls call failed",
            FfiStatus::Panicked => c"internal panic",
        }
    }
}

impl From<&PublishError> for FfiStatus {
    fn from(err: &PublishError) -> Self {
        match err {
            PublishError::PlatformUnavailable { .. } => FfiStatus::PlatformUnavailable,
            PublishError::PlatformCall(_) => FfiStatus::PlatformCallFailed,
        }
    }
}

fn guarded(f: impl FnOnce() -> FfiStatus) -> i32 {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(status) => status as i32,
        Err(_) => {
            error!("Panic caught at the plugin boundary");
            FfiStatus::Panicked as i32
        }
    }
}

/// # Safety
/// `ptr` must be null or point to a NUL-terminated string valid for `'a`.
unsafe fn read_str<'a>(ptr: *const c_char, name: &str) -> Result<&'a str, FfiStatus> {
    if ptr.is_null() {
        warn!("Null pointer passed for {name}");
        return Err(FfiStatus::InvalidArgument);
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let raw = unsafe { CStr::from_ptr(ptr) };
    raw.to_str().map_err(|e| {
        warn!("{name} is not valid UTF-8: {e}");
        FfiStatus::InvalidArgument
    })
}

fn publish(scope: ViewScope, metadata: &NowPlayingMetadata) -> FfiStatus {
    match MediaStatusPublisher::native(scope).publish_now_playing(metadata) {
        Ok(()) => FfiStatus::Ok,
        Err(e) => {
            error!("Failed to publish now playing: {e}");
            FfiStatus::from(&e)
        }
    }
}

/// Publishes the fixed placeholder track for the current view. Failures are
/// only logged since this export has no way to report them.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn UpdateSMTCDisplay() {
    guarded(|| publish(ViewScope::CurrentView, &NowPlayingMetadata::placeholder()));
}

/// # Safety
/// `title` and `artist` must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn smtc_publish_now_playing(
    title: *const c_char,
    artist: *const c_char,
) -> i32 {
    guarded(|| {
        // SAFETY: forwarded caller contract.
        let fields = unsafe { (read_str(title, "title"), read_str(artist, "artist")) };
        match fields {
            (Ok(title), Ok(artist)) => publish(
                ViewScope::CurrentView,
                &NowPlayingMetadata::new(title, artist),
            ),
            (Err(status), _) | (_, Err(status)) => status,
        }
    })
}

/// # Safety
/// `hwnd` must be a top-level window handle of the calling process; the
/// strings follow [`smtc_publish_now_playing`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn smtc_publish_now_playing_for_window(
    hwnd: *mut c_void,
    title: *const c_char,
    artist: *const c_char,
) -> i32 {
    guarded(|| {
        if hwnd.is_null() {
            warn!("Null window handle");
            return FfiStatus::InvalidArgument;
        }
        // SAFETY: forwarded caller contract.
        let fields = unsafe { (read_str(title, "title"), read_str(artist, "artist")) };
        match fields {
            (Ok(title), Ok(artist)) => publish(
                ViewScope::Window(hwnd as isize),
                &NowPlayingMetadata::new(title, artist),
            ),
            (Err(status), _) | (_, Err(status)) => status,
        }
    })
}

/// Takes a JSON object such as `{"title": "...", "artist": "..."}`.
///
/// # Safety
/// `json` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn smtc_publish_json(json: *const c_char) -> i32 {
    guarded(|| {
        // SAFETY: forwarded caller contract.
        let json = match unsafe { read_str(json, "json") } {
            Ok(json) => json,
            Err(status) => return status,
        };
        match serde_json::from_str::<NowPlayingMetadata>(json) {
            Ok(metadata) => publish(ViewScope::CurrentView, &metadata),
            Err(e) => {
                warn!("Malformed now playing JSON: {e}");
                FfiStatus::InvalidArgument
            }
        }
    })
}

/// Installs logging from the config file. Safe to call more than once.
#[unsafe(no_mangle)]
pub extern "C" fn smtc_init_logging() -> i32 {
    guarded(|| {
        let (config, load_error) = match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };
        logging::init(&config.logging);
        if let Some(e) = load_error {
            warn!("Using default logging config: {e:#}");
        }
        FfiStatus::Ok
    })
}

/// Static description of a status code; never null, never freed by the caller.
#[unsafe(no_mangle)]
pub extern "C" fn smtc_status_message(code: i32) -> *const c_char {
    FfiStatus::from_code(code)
        .map(FfiStatus::message)
        .unwrap_or(c"unknown status")
        .as_ptr()
}
