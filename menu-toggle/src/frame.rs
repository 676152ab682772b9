//! Frame scheduling for coalesced flushes.

use std::time::Duration;

use crate::coalesce::EventKind;
use crate::config::Scheduling;

/// How a flush was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Next animation frame (`requestAnimationFrame`).
    AnimationFrame,
    /// One-shot timer (`setTimeout`).
    Timeout(Duration),
}

/// The host's deferred-execution primitive.
pub trait FrameScheduler {
    /// Arrange for `kind` to be flushed later, returning the mechanism used.
    fn request_flush(&mut self, kind: EventKind) -> Schedule;

    /// Withdraw a queued flush for `kind`, if one is waiting.
    fn cancel_flush(&mut self, kind: EventKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFlush {
    kind: EventKind,
    /// `None` until the next frame; otherwise time left on the timer.
    remaining: Option<Duration>,
}

/// Deterministic scheduler driven by the host loop.
///
/// Each call to [`FrameQueue::advance`] is one frame: animation-frame
/// requests fire on it, timers fire once enough time has elapsed.
#[derive(Debug, Clone)]
pub struct FrameQueue {
    animation_frames: bool,
    fallback: Duration,
    pending: Vec<PendingFlush>,
}

impl FrameQueue {
    pub fn new(animation_frames: bool, fallback: Duration) -> Self {
        Self {
            animation_frames,
            fallback,
            pending: Vec::new(),
        }
    }

    pub fn from_config(scheduling: &Scheduling) -> Self {
        Self::new(scheduling.animation_frames, scheduling.fallback_delay())
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of flushes waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Let `elapsed` pass and return the kinds whose flush is now due, in request order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<EventKind> {
        let mut due = Vec::new();
        self.pending.retain_mut(|flush| {
            let fire = match &mut flush.remaining {
                None => true,
                Some(remaining) => {
                    *remaining = remaining.saturating_sub(elapsed);
                    remaining.is_zero()
                }
            };
            if fire {
                due.push(flush.kind);
            }
            !fire
        });
        due
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::from_config(&Scheduling::default())
    }
}

impl FrameScheduler for FrameQueue {
    fn request_flush(&mut self, kind: EventKind) -> Schedule {
        let (schedule, remaining) = if self.animation_frames {
            (Schedule::AnimationFrame, None)
        } else {
            (Schedule::Timeout(self.fallback), Some(self.fallback))
        };
        self.pending.push(PendingFlush { kind, remaining });
        schedule
    }

    fn cancel_flush(&mut self, kind: EventKind) {
        self.pending.retain(|flush| flush.kind != kind);
    }
}
