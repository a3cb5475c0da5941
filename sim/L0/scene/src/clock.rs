//! Explicit simulation time.
//!
//! Procedural animation reads time from a [`FrameTime`] handed in by the
//! caller, never from a global timer, so a run can be replayed exactly by
//! feeding the same sequence of timesteps.

use sim_types::{Result, validate_timestep};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time information for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameTime {
    /// Elapsed simulated time at the end of this frame.
    pub t: f64,
    /// Timestep of this frame.
    pub dt: f64,
    /// Zero-based frame counter.
    pub frame: u64,
}

impl FrameTime {
    /// A frame at time `t` with timestep `dt`.
    #[must_use]
    pub const fn new(t: f64, dt: f64, frame: u64) -> Self {
        Self { t, dt, frame }
    }
}

/// Accumulates simulated time from caller-supplied timesteps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationClock {
    elapsed: f64,
    last_dt: f64,
    frames: u64,
}

impl SimulationClock {
    /// A clock at `t = 0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_dt: 0.0,
            frames: 0,
        }
    }

    /// Advance by `dt` and return the new frame time.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidTimestep`](sim_types::SimError::InvalidTimestep)
    /// if `dt` is negative or not finite. The clock is unchanged on error.
    pub fn advance(&mut self, dt: f64) -> Result<FrameTime> {
        validate_timestep(dt)?;
        let frame = FrameTime::new(self.elapsed + dt, dt, self.frames);
        self.elapsed = frame.t;
        self.last_dt = dt;
        self.frames += 1;
        Ok(frame)
    }

    /// Elapsed simulated time.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Timestep of the last frame.
    #[must_use]
    pub const fn last_dt(&self) -> f64 {
        self.last_dt
    }

    /// Number of frames advanced.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Back to `t = 0`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
