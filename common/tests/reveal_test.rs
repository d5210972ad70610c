//! Reveal coordinator tests
//!
//! Drive the section state machine with the fake scheduler and verify the
//! one-shot and staggering guarantees end to end.

use portfolio_common::{FakeScheduler, RevealController, RevealState, Stagger};
use std::cell::RefCell;
use std::rc::Rc;

/// A section stays visible no matter how often the intersection signal fires
#[test]
fn test_repeated_intersection_signals_reveal_once() {
    let mut scheduler = FakeScheduler::new();
    let mut controller = RevealController::new(Stagger::bars());
    let reveals = Rc::new(RefCell::new(0u32));

    for round in 0..5 {
        let counter = reveals.clone();
        let first = controller.enter_viewport(&mut scheduler, 2, move |_| {
            *counter.borrow_mut() += 1;
        });
        assert_eq!(first, round == 0);
    }

    scheduler.advance(10_000);
    assert_eq!(controller.state(), RevealState::Visible);
    // two children, revealed exactly once each
    assert_eq!(*reveals.borrow(), 2);
}

/// Every child's delay is strictly greater than its predecessor's
#[test]
fn test_stagger_delays_strictly_increase() {
    let stagger = Stagger::new(100, 150);
    let mut previous = None;
    for index in 0..8 {
        let delay = stagger.delay_for(index);
        if let Some(prev) = previous {
            assert!(delay > prev);
        }
        previous = Some(delay);
    }
}

/// Children fire in index order as the clock advances past each deadline
#[test]
fn test_cascade_order_matches_index_order() {
    let mut scheduler = FakeScheduler::new();
    let mut controller = RevealController::new(Stagger::timeline());
    let order = Rc::new(RefCell::new(Vec::new()));

    let sink = order.clone();
    controller.enter_viewport(&mut scheduler, 4, move |index| {
        sink.borrow_mut().push(index);
    });

    // timeline stagger: 300, 450, 600, 750
    scheduler.advance(500);
    assert_eq!(*order.borrow(), vec![0, 1]);
    scheduler.advance(500);
    assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
}

/// Tearing a section down cancels every reveal that has not fired yet
#[test]
fn test_teardown_stops_pending_children() {
    let mut scheduler = FakeScheduler::new();
    let mut controller = RevealController::new(Stagger::cards());
    let revealed = Rc::new(RefCell::new(Vec::new()));

    let sink = revealed.clone();
    controller.enter_viewport(&mut scheduler, 3, move |index| {
        sink.borrow_mut().push(index);
    });

    scheduler.advance(100); // child 0 fires
    controller.teardown(&mut scheduler);
    scheduler.advance(60_000);

    assert_eq!(*revealed.borrow(), vec![0]);
    assert_eq!(scheduler.pending_count(), 0);
}
