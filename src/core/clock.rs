use std::cell::RefCell;

/// Whether the frame loop has produced its first frame yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running,
}

/// Frame counter that owns the global spin.
///
/// Rotation is derived from the frame count instead of being accumulated,
/// so after `n` ticks it is exactly `initial - n * step` up to one rounding.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    state: ClockState,
    frames: u64,
    initial_rotation: f64,
    step: f64,
}

impl AnimationClock {
    pub fn new(initial_rotation: f64, step: f64) -> Self {
        Self {
            state: ClockState::Idle,
            frames: 0,
            initial_rotation,
            step,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rotation(&self) -> f64 {
        self.initial_rotation - self.frames as f64 * self.step
    }

    /// Idle -> Running. There is no way back.
    pub fn start(&mut self) {
        if self.state == ClockState::Idle {
            self.state = ClockState::Running;
            log::debug!("[clock] running, step={}", self.step);
        }
    }

    /// Advance one frame, starting the clock if needed. Returns the new rotation.
    pub fn tick(&mut self) -> f64 {
        self.start();
        self.frames += 1;
        self.rotation()
    }
}

/// One step of a self-rescheduling frame loop. The next step is queued
/// before this one runs, so a frame that throws or panics cannot stop the
/// loop. A frame whose state is still borrowed is skipped. Returns whether
/// the frame ran.
pub fn drive_tick<T: ?Sized>(
    state: &RefCell<T>,
    reschedule: impl FnOnce(),
    frame: impl FnOnce(&mut T),
) -> bool {
    reschedule();
    match state.try_borrow_mut() {
        Ok(mut s) => {
            frame(&mut s);
            true
        }
        Err(_) => {
            log::warn!("[frame] state still borrowed; skipping frame");
            false
        }
    }
}
