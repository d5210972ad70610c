//! Timer scheduling seam
//!
//! Reveal staggering and the contact-form success reset both run on delayed
//! one-shot callbacks. The trait keeps the core platform-agnostic: the web
//! crate backs it with browser timeouts, tests with a manual clock.

/// One-shot delayed callback scheduler; every scheduled callback is
/// cancellable until it fires
pub trait TimerScheduler {
    type TimerId;

    fn schedule_ms(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::TimerId;

    /// Cancelling an already-fired or unknown timer is a no-op
    fn cancel(&mut self, id: Self::TimerId);
}

/// Deterministic scheduler driven by an explicit clock, for tests
#[derive(Default)]
pub struct FakeScheduler {
    now_ms: u64,
    next_id: u32,
    pending: Vec<PendingTimer>,
}

struct PendingTimer {
    id: u32,
    fire_at_ms: u64,
    callback: Box<dyn FnOnce()>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock, firing due callbacks in deadline order
    /// (insertion order on ties)
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        let now = self.now_ms;

        self.pending.sort_by_key(|timer| timer.fire_at_ms);
        let (ready, later): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.fire_at_ms <= now);
        self.pending = later;
        for timer in ready {
            (timer.callback)();
        }
    }
}

impl TimerScheduler for FakeScheduler {
    type TimerId = u32;

    fn schedule_ms(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            fire_at_ms: self.now_ms + u64::from(delay_ms),
            callback,
        });
        id
    }

    fn cancel(&mut self, id: u32) {
        self.pending.retain(|timer| timer.id != id);
    }
}
