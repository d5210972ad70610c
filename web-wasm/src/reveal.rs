//! Browser adapters for the reveal machinery
//!
//! `GlooScheduler` backs the platform-agnostic timer seam with browser
//! timeouts; `SectionObserver` wraps `IntersectionObserver`; and
//! `use_section_reveal` wires both to a section's node ref so components
//! only deal with two signals: "section entered" and per-child flags.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use portfolio_common::reveal::{RevealController, Stagger, INTERSECTION_THRESHOLD};
use portfolio_common::schedule::TimerScheduler;

/// Timer seam over `setTimeout`. Pending timeouts are owned by the map, and
/// each callback holds only a weak handle back to it, so dropping the
/// scheduler drops the map and cancels everything still outstanding.
#[derive(Default)]
pub struct GlooScheduler {
    next_id: u32,
    pending: Rc<RefCell<HashMap<u32, Timeout>>>,
}

impl GlooScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimerScheduler for GlooScheduler {
    type TimerId = u32;

    fn schedule_ms(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        // weak, or the callback would keep its own Timeout (and the whole
        // map) alive past the scheduler's drop
        let pending = Rc::downgrade(&self.pending);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().remove(&id);
            }
            callback();
        });
        self.pending.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&mut self, id: u32) {
        if let Some(timeout) = self.pending.borrow_mut().remove(&id) {
            timeout.cancel();
        }
    }
}

/// Viewport watcher for one section root, threshold 10%. Detached after the
/// first visibility signal and disconnected on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl SectionObserver {
    pub fn attach(
        element: &web_sys::Element,
        mut on_visible: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        on_visible();
                    }
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _closure: closure,
        })
    }

    pub fn detach(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch a section and return `(entered, children)`: `entered` flips true
/// the first time the section is 10% visible, each child flag flips at its
/// stagger delay afterwards. Pending reveals are cancelled when the section
/// is torn down.
pub fn use_section_reveal(
    section_ref: NodeRef<html::Section>,
    child_count: usize,
    stagger: Stagger,
) -> (ReadSignal<bool>, ReadSignal<Vec<bool>>) {
    let (entered, set_entered) = signal(false);
    let (children, set_children) = signal(vec![false; child_count]);

    Effect::new(move |_| {
        let Some(element) = section_ref.get() else {
            return;
        };

        let controller = Rc::new(RefCell::new(RevealController::new(stagger)));
        let scheduler = Rc::new(RefCell::new(GlooScheduler::new()));
        let observer_slot: Rc<RefCell<Option<SectionObserver>>> = Rc::new(RefCell::new(None));

        let on_visible = {
            let controller = Rc::clone(&controller);
            let scheduler = Rc::clone(&scheduler);
            let observer_slot = Rc::clone(&observer_slot);
            move || {
                let first = controller.borrow_mut().enter_viewport(
                    &mut *scheduler.borrow_mut(),
                    child_count,
                    move |index| {
                        set_children.update(|flags| {
                            if let Some(flag) = flags.get_mut(index) {
                                *flag = true;
                            }
                        });
                    },
                );
                if first {
                    set_entered.set(true);
                    // one-shot: stop watching this section
                    if let Some(observer) = observer_slot.borrow().as_ref() {
                        observer.detach();
                    }
                }
            }
        };

        match SectionObserver::attach(element.as_ref(), on_visible) {
            Ok(observer) => {
                *observer_slot.borrow_mut() = Some(observer);
                // cleanup closures must be Send; the JS handles are not,
                // so park them in a SendWrapper (wasm is single-threaded)
                let parked = SendWrapper::new((observer_slot, controller, scheduler));
                on_cleanup(move || {
                    let (slot, controller, scheduler) = parked.take();
                    slot.borrow_mut().take();
                    controller.borrow_mut().teardown(&mut *scheduler.borrow_mut());
                });
            }
            Err(err) => {
                web_sys::console::error_2(&JsValue::from_str("reveal: observer failed"), &err);
                // degrade: show the section without the entry animation
                set_entered.set(true);
                set_children.set(vec![true; child_count]);
            }
        }
    });

    (entered, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Dropping the scheduler must release the pending map so its timeouts
    /// are cleared, not kept alive through their own callbacks
    #[wasm_bindgen_test]
    fn test_drop_releases_pending_timeouts() {
        let weak = {
            let mut scheduler = GlooScheduler::new();
            scheduler.schedule_ms(60_000, Box::new(|| {}));
            scheduler.schedule_ms(60_000, Box::new(|| {}));
            Rc::downgrade(&scheduler.pending)
        };
        assert!(weak.upgrade().is_none());
    }

    #[wasm_bindgen_test]
    fn test_cancel_clears_the_entry() {
        let mut scheduler = GlooScheduler::new();
        let id = scheduler.schedule_ms(60_000, Box::new(|| {}));
        scheduler.cancel(id);
        assert!(scheduler.pending.borrow().is_empty());
    }
}
