//! In-process stand-in for the OS transport controls.
//!
//! Holds the single "current display" record the OS would keep, so the
//! publisher can be exercised without a real media session. Every write
//! replaces the previous value.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{MediaPlatform, TransportControls, ViewScope};
use crate::error::PlatformError;
use crate::models::{DisplayUpdate, PlaybackStatus};

/// HRESULT the OS returns for a missing CoreWindow (`E_ELEMENTNOTFOUND`)
pub const ELEMENT_NOT_FOUND: i32 = 0x8007_0490_u32 as i32;

/// Call that should fail on the next attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    RuntimeInit,
    AcquireControls,
    PlayEnabled,
    PauseEnabled,
    CommitDisplay,
    PlaybackStatus,
}

/// What the OS would be showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmtcState {
    pub runtime_initialized: bool,
    pub runtime_init_calls: u32,
    pub acquired: Vec<ViewScope>,
    pub play_enabled: bool,
    pub pause_enabled: bool,
    pub display: Option<DisplayUpdate>,
    pub commits: u32,
    pub status: PlaybackStatus,
}

#[derive(Default)]
struct Shared {
    state: RefCell<SmtcState>,
    fail_at: Cell<Option<FailPoint>>,
}

impl Shared {
    fn check(&self, point: FailPoint, operation: &'static str) -> Result<(), PlatformError> {
        if self.fail_at.get() == Some(point) {
            return Err(PlatformError::new(
                operation,
                ELEMENT_NOT_FOUND,
                "Element not found.",
            ));
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryPlatform {
    shared: Rc<Shared>,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call at `point` fail until cleared with `None`.
    pub fn fail_at(&self, point: Option<FailPoint>) {
        self.shared.fail_at.set(point);
    }

    pub fn snapshot(&self) -> SmtcState {
        self.shared.state.borrow().clone()
    }
}

impl MediaPlatform for InMemoryPlatform {
    type Controls = InMemoryControls;

    fn ensure_runtime(&self) -> Result<(), PlatformError> {
        let mut state = self.shared.state.borrow_mut();
        state.runtime_init_calls += 1;
        self.shared.check(FailPoint::RuntimeInit, "CoInitializeEx")?;
        state.runtime_initialized = true;
        Ok(())
    }

    fn acquire_controls(&self, scope: ViewScope) -> Result<InMemoryControls, PlatformError> {
        self.shared
            .check(FailPoint::AcquireControls, "GetForCurrentView")?;
        self.shared.state.borrow_mut().acquired.push(scope);
        Ok(InMemoryControls {
            shared: Rc::clone(&self.shared),
        })
    }
}

pub struct InMemoryControls {
    shared: Rc<Shared>,
}

impl TransportControls for InMemoryControls {
    fn set_play_enabled(&self, enabled: bool) -> Result<(), PlatformError> {
        self.shared.check(FailPoint::PlayEnabled, "SetIsPlayEnabled")?;
        self.shared.state.borrow_mut().play_enabled = enabled;
        Ok(())
    }

    fn set_pause_enabled(&self, enabled: bool) -> Result<(), PlatformError> {
        self.shared
            .check(FailPoint::PauseEnabled, "SetIsPauseEnabled")?;
        self.shared.state.borrow_mut().pause_enabled = enabled;
        Ok(())
    }

    fn commit_display(&self, update: &DisplayUpdate) -> Result<(), PlatformError> {
        self.shared
            .check(FailPoint::CommitDisplay, "DisplayUpdater.Update")?;
        let mut state = self.shared.state.borrow_mut();
        state.display = Some(update.as_displayed());
        state.commits += 1;
        Ok(())
    }

    fn set_playback_status(&self, status: PlaybackStatus) -> Result<(), PlatformError> {
        self.shared
            .check(FailPoint::PlaybackStatus, "SetPlaybackStatus")?;
        self.shared.state.borrow_mut().status = status;
        Ok(())
    }
}
