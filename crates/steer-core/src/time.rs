//! Frame clock and update phases.
//!
//! # Design
//!
//! The engine is driven by a real-time frame loop rather than an abstract
//! tick counter.  Each host frame, [`FrameClock::begin_frame`] converts the
//! real elapsed time into an ordered list of [`StepTiming`]s:
//!
//! 1. zero or more `FixedUpdate` sub-steps (a classic fixed-timestep
//!    accumulator, drained in whole `fixed_delta` chunks),
//! 2. exactly one `Update`,
//! 3. exactly one `LateUpdate`.
//!
//! Every motion manager is configured with the single phase it integrates
//! in; the other phases pass it by.  Within one phase the caller steps
//! agents in ascending `AgentId` order, so a whole frame has a total,
//! deterministic order of operations.
//!
//! # Scaled vs. unscaled time
//!
//! `delta` is the phase duration after applying `time_scale` (slow-motion /
//! fast-forward); `unscaled_delta` is the raw wall-clock duration.  Inside a
//! fixed sub-step `delta` is always exactly `fixed_delta`, and the unscaled
//! variant is derived by dividing the scale back out.

use std::fmt;

// ── UpdatePhase ───────────────────────────────────────────────────────────────

/// The per-frame phase a [`StepTiming`] belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdatePhase {
    /// The regular once-per-frame update.
    #[default]
    Update,
    /// Runs after all `Update` integration for the frame.
    LateUpdate,
    /// Fixed-timestep sub-steps; zero or more per frame.
    FixedUpdate,
}

impl fmt::Display for UpdatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdatePhase::Update => "update",
            UpdatePhase::LateUpdate => "late-update",
            UpdatePhase::FixedUpdate => "fixed-update",
        };
        f.write_str(name)
    }
}

// ── StepTiming ────────────────────────────────────────────────────────────────

/// Timing information for one update phase of one frame.
///
/// This is the clock contract consumed by behaviors and motion managers:
/// which phase is running and how much (scaled and unscaled) time it covers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepTiming {
    pub phase: UpdatePhase,
    /// Elapsed seconds for this phase, after `time_scale`.
    pub delta: f32,
    /// Elapsed wall-clock seconds for this phase, ignoring `time_scale`.
    pub unscaled_delta: f32,
}

impl StepTiming {
    #[inline]
    pub fn new(phase: UpdatePhase, delta: f32, unscaled_delta: f32) -> Self {
        Self { phase, delta, unscaled_delta }
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Converts real frame durations into the per-frame phase sequence.
///
/// `FrameClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Multiplier applied to real time before integration.  1.0 = real time,
    /// 0.0 = paused (fixed steps stop accumulating, `Update.delta` is zero).
    pub time_scale: f32,

    /// Duration of one `FixedUpdate` sub-step in scaled seconds.
    pub fixed_delta: f32,

    /// Scaled time left over from previous frames, not yet covered by a
    /// fixed sub-step.  Always in `[0, fixed_delta)` between frames.
    accumulator: f32,

    /// Frames started so far.  The frame currently being processed is
    /// `frame - 1` after `begin_frame` returns.
    frame: u64,

    /// Total scaled seconds elapsed across all frames.
    elapsed: f32,

    /// Total wall-clock seconds elapsed across all frames.
    unscaled_elapsed: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0, 0.02)
    }
}

impl FrameClock {
    pub fn new(time_scale: f32, fixed_delta: f32) -> Self {
        Self {
            time_scale: time_scale.max(0.0),
            fixed_delta: fixed_delta.max(f32::EPSILON),
            accumulator: 0.0,
            frame: 0,
            elapsed: 0.0,
            unscaled_elapsed: 0.0,
        }
    }

    /// Index of the next frame to begin.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total scaled seconds elapsed.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    /// Total wall-clock seconds elapsed.
    #[inline]
    pub fn unscaled_elapsed_secs(&self) -> f32 {
        self.unscaled_elapsed
    }

    /// Begin a new frame that spans `real_dt` wall-clock seconds.
    ///
    /// Returns the phase timings for this frame in execution order: the
    /// drained `FixedUpdate` sub-steps, then `Update`, then `LateUpdate`.
    pub fn begin_frame(&mut self, real_dt: f32) -> Vec<StepTiming> {
        let real_dt = real_dt.max(0.0);
        let scaled = real_dt * self.time_scale;

        let mut timings = Vec::with_capacity(3);

        // Drain the fixed-step accumulator in whole fixed_delta chunks.
        self.accumulator += scaled;
        let fixed_unscaled = if self.time_scale > 0.0 {
            self.fixed_delta / self.time_scale
        } else {
            0.0
        };
        while self.accumulator >= self.fixed_delta {
            self.accumulator -= self.fixed_delta;
            timings.push(StepTiming::new(
                UpdatePhase::FixedUpdate,
                self.fixed_delta,
                fixed_unscaled,
            ));
        }

        timings.push(StepTiming::new(UpdatePhase::Update, scaled, real_dt));
        timings.push(StepTiming::new(UpdatePhase::LateUpdate, scaled, real_dt));

        self.frame += 1;
        self.elapsed += scaled;
        self.unscaled_elapsed += real_dt;

        timings
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{} ({:.3} s)", self.frame, self.elapsed)
    }
}
