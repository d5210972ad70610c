//! Viewport reveal state machine
//!
//! Each watched section goes `Hidden -> Visible` exactly once; repeated
//! intersection signals after that are ignored. Entering the viewport
//! schedules one delayed callback per staggered child so bars, cards and
//! timeline entries cascade in index order instead of appearing at once.
//! Teardown cancels every still-pending child timer.

use crate::schedule::TimerScheduler;

/// Minimum fraction of a section that must be visible to trigger a reveal
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Delay schedule for staggered children: `base_ms + step_ms * index`.
/// `step_ms` is kept >= 1 so successive delays strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    base_ms: u32,
    step_ms: u32,
}

impl Stagger {
    pub fn new(base_ms: u32, step_ms: u32) -> Self {
        Self {
            base_ms,
            step_ms: step_ms.max(1),
        }
    }

    /// Project cards: 100ms lead-in, 100ms apart
    pub fn cards() -> Self {
        Self::new(100, 100)
    }

    /// Skill bars: 300ms lead-in, 100ms apart
    pub fn bars() -> Self {
        Self::new(300, 100)
    }

    /// Certificate timeline entries: 300ms lead-in, 150ms apart
    pub fn timeline() -> Self {
        Self::new(300, 150)
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_ms + self.step_ms * index as u32
    }
}

/// Per-section reveal state; `Visible` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// One-shot reveal coordinator for a single section
pub struct RevealController<S: TimerScheduler> {
    state: RevealState,
    stagger: Stagger,
    pending: Vec<S::TimerId>,
}

impl<S: TimerScheduler> RevealController<S> {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            state: RevealState::Hidden,
            stagger,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Handle an intersection signal. The first call marks the section
    /// visible, schedules every child reveal at its stagger delay and
    /// returns true; any later call is a no-op returning false.
    pub fn enter_viewport<F>(
        &mut self,
        scheduler: &mut S,
        child_count: usize,
        reveal_child: F,
    ) -> bool
    where
        F: Fn(usize) + Clone + 'static,
    {
        if self.is_visible() {
            return false;
        }
        self.state = RevealState::Visible;

        for index in 0..child_count {
            let reveal_child = reveal_child.clone();
            let id = scheduler.schedule_ms(
                self.stagger.delay_for(index),
                Box::new(move || reveal_child(index)),
            );
            self.pending.push(id);
        }
        true
    }

    /// Cancel pending child timers; called when the section leaves the
    /// document so no callback touches a removed element
    pub fn teardown(&mut self, scheduler: &mut S) {
        for id in self.pending.drain(..) {
            scheduler.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::FakeScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_stagger_strictly_increasing() {
        for stagger in [Stagger::cards(), Stagger::bars(), Stagger::timeline()] {
            for index in 1..10 {
                assert!(stagger.delay_for(index) > stagger.delay_for(index - 1));
            }
        }
    }

    #[test]
    fn test_stagger_zero_step_clamped() {
        let stagger = Stagger::new(100, 0);
        assert!(stagger.delay_for(1) > stagger.delay_for(0));
    }

    #[test]
    fn test_enter_viewport_one_shot() {
        let mut scheduler = FakeScheduler::new();
        let mut controller = RevealController::new(Stagger::cards());

        assert_eq!(controller.state(), RevealState::Hidden);
        assert!(controller.enter_viewport(&mut scheduler, 0, |_| {}));
        assert_eq!(controller.state(), RevealState::Visible);

        // repeated intersection signals do not re-trigger
        assert!(!controller.enter_viewport(&mut scheduler, 0, |_| {}));
        assert!(!controller.enter_viewport(&mut scheduler, 0, |_| {}));
    }

    #[test]
    fn test_children_cascade_in_index_order() {
        let mut scheduler = FakeScheduler::new();
        let mut controller = RevealController::new(Stagger::new(300, 100));
        let revealed = Rc::new(RefCell::new(Vec::new()));

        let sink = revealed.clone();
        controller.enter_viewport(&mut scheduler, 3, move |index| {
            sink.borrow_mut().push(index);
        });

        scheduler.advance(299);
        assert!(revealed.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*revealed.borrow(), vec![0]);
        scheduler.advance(200);
        assert_eq!(*revealed.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_teardown_cancels_pending_reveals() {
        let mut scheduler = FakeScheduler::new();
        let mut controller = RevealController::new(Stagger::cards());
        let revealed = Rc::new(RefCell::new(Vec::new()));

        let sink = revealed.clone();
        controller.enter_viewport(&mut scheduler, 4, move |index| {
            sink.borrow_mut().push(index);
        });

        scheduler.advance(150); // only child 0 (delay 100) has fired
        controller.teardown(&mut scheduler);
        scheduler.advance(10_000);

        assert_eq!(*revealed.borrow(), vec![0]);
        assert_eq!(scheduler.pending_count(), 0);
    }
}
