//! Coalescing of high-frequency window events.
//!
//! Any number of native `resize`/`scroll` events arriving before the next
//! frame collapse into a single flush that runs every registered callback
//! once.
//!
//! ```
//! use menu_toggle::coalesce::{Coalescer, FlushState};
//! use menu_toggle::frame::FrameQueue;
//! use std::time::Duration;
//!
//! let mut frames = FrameQueue::default();
//! let mut resize = Coalescer::<u32>::resize();
//! resize.add(|count| *count += 1);
//!
//! for _ in 0..5 {
//!     resize.notify(&mut frames);
//! }
//! assert_eq!(resize.state(), FlushState::Pending);
//!
//! let mut count = 0;
//! assert_eq!(frames.advance(Duration::from_millis(16)).len(), 1);
//! resize.flush(&mut count);
//! assert_eq!(count, 1);
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::extract_panic_message;
use crate::frame::FrameScheduler;

/// Window event kinds that can be coalesced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    Scroll,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Scroll => "scroll",
        }
    }

    /// Scroll listeners never cancel the event, so they register as passive.
    pub fn passive(&self) -> bool {
        matches!(self, Self::Scroll)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushState {
    #[default]
    Idle,
    Pending,
}

/// The native listener, attached on first registration and never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub kind: EventKind,
    pub passive: bool,
}

pub type Callback<C> = Box<dyn FnMut(&mut C)>;

/// A callback that panicked during a flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackFailure {
    pub kind: EventKind,
    /// Registration index of the callback.
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub invoked: usize,
    pub failures: Vec<CallbackFailure>,
}

impl FlushReport {
    pub fn merge(&mut self, other: FlushReport) {
        self.invoked += other.invoked;
        self.failures.extend(other.failures);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Per-event-kind callback registry with a one-flush-per-frame state machine.
///
/// Callbacks receive a context `C`, which is how they reach state without
/// shared ownership.
pub struct Coalescer<C> {
    kind: EventKind,
    callbacks: Vec<Callback<C>>,
    state: FlushState,
    listener: Option<Listener>,
    /// Set while a batch is out for a flush.
    flushing: bool,
    /// `clear` ran during the current flush; the batch must not come back.
    cleared: bool,
}

impl<C> Coalescer<C> {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            callbacks: Vec::new(),
            state: FlushState::Idle,
            listener: None,
            flushing: false,
            cleared: false,
        }
    }

    pub fn resize() -> Self {
        Self::new(EventKind::Resize)
    }

    pub fn scroll() -> Self {
        Self::new(EventKind::Scroll)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn state(&self) -> FlushState {
        self.state
    }

    pub fn listener(&self) -> Option<Listener> {
        self.listener
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Register a callback for every future flush. The first registration
    /// attaches the native listener. Duplicates are kept and run twice.
    pub fn add(&mut self, callback: impl FnMut(&mut C) + 'static) {
        if self.listener.is_none() {
            log::debug!("[coalesce] attaching {} listener", self.kind.name());
            self.listener = Some(Listener {
                kind: self.kind,
                passive: self.kind.passive(),
            });
        }
        self.callbacks.push(Box::new(callback));
    }

    /// Handle one native event. Returns true if it scheduled a flush; events
    /// arriving while a flush is pending, or before any listener exists, are dropped.
    pub fn notify(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.listener.is_none() || self.state == FlushState::Pending {
            return false;
        }
        self.state = FlushState::Pending;
        let schedule = scheduler.request_flush(self.kind);
        log::trace!("[coalesce] {} flush scheduled via {:?}", self.kind.name(), schedule);
        true
    }

    /// Run the pending flush against `ctx`.
    pub fn flush(&mut self, ctx: &mut C) -> FlushReport {
        let Some(mut batch) = self.begin_flush() else {
            return FlushReport::default();
        };
        let report = run_batch(self.kind, &mut batch, ctx);
        self.finish_flush(batch);
        report
    }

    /// Take the callbacks out for a flush. `None` when no flush is pending.
    ///
    /// For contexts that own their coalescer: take the batch, run it with
    /// [`run_batch`], then hand it back through [`Coalescer::finish_flush`].
    pub fn begin_flush(&mut self) -> Option<Vec<Callback<C>>> {
        if self.state != FlushState::Pending {
            return None;
        }
        self.flushing = true;
        Some(std::mem::take(&mut self.callbacks))
    }

    /// Restore the batch ahead of anything registered during the flush and go idle.
    /// If [`Coalescer::clear`] ran mid-flush the batch is dropped instead.
    pub fn finish_flush(&mut self, mut batch: Vec<Callback<C>>) {
        if self.cleared {
            log::debug!("[coalesce] {} cleared during flush, dropping batch", self.kind.name());
        } else {
            batch.append(&mut self.callbacks);
            self.callbacks = batch;
        }
        self.flushing = false;
        self.cleared = false;
        self.state = FlushState::Idle;
    }

    /// Drop every callback, including a batch currently being flushed.
    /// The native listener stays attached.
    ///
    /// The coalescer goes idle; a flush already handed to a scheduler must be
    /// cancelled there too (see [`FrameScheduler::cancel_flush`]).
    pub fn clear(&mut self) {
        self.callbacks.clear();
        if self.flushing {
            self.cleared = true;
        } else {
            self.state = FlushState::Idle;
        }
    }

    /// [`Coalescer::clear`], and withdraw any flush queued on `scheduler`.
    pub fn clear_scheduled(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.state == FlushState::Pending && !self.flushing {
            scheduler.cancel_flush(self.kind);
        }
        self.clear();
    }
}

impl<C> fmt::Debug for Coalescer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coalescer")
            .field("kind", &self.kind)
            .field("callbacks", &self.callbacks.len())
            .field("state", &self.state)
            .field("listener", &self.listener)
            .field("flushing", &self.flushing)
            .finish()
    }
}

/// Invoke every callback once, in order. A panicking callback is logged and
/// reported; the rest of the batch still runs.
pub fn run_batch<C>(kind: EventKind, batch: &mut [Callback<C>], ctx: &mut C) -> FlushReport {
    let mut report = FlushReport::default();
    for (index, callback) in batch.iter_mut().enumerate() {
        report.invoked += 1;
        if let Err(panic) = panic::catch_unwind(AssertUnwindSafe(|| callback(ctx))) {
            let message = extract_panic_message(&*panic);
            log::error!("[coalesce] {} callback {index} panicked: {message}", kind.name());
            report.failures.push(CallbackFailure {
                kind,
                index,
                message,
            });
        }
    }
    report
}
