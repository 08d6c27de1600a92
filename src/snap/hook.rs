use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::controller::{Outcome, SnapController};
use super::intent::InputEvent;
use super::surface::DomSurface;
use crate::config::SnapConfig;

type SharedController = Rc<RefCell<SnapController>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Clone, Copy, Debug, PartialEq)]
struct SnapView {
    current: usize,
    transitioning: bool,
}

impl SnapView {
    fn of(controller: &SnapController) -> Self {
        Self {
            current: controller.current(),
            transitioning: controller.is_transitioning(),
        }
    }
}

/// Records the controller's view in `last` and returns it if it differs
/// from what was published before.
fn refresh(last: &RefCell<SnapView>, controller: &SnapController) -> Option<SnapView> {
    let view = SnapView::of(controller);
    (last.replace(view) != view).then_some(view)
}

/// What the page sees of the scroll-snap controller.
pub struct UseScrollSnapHandle {
    /// Attach to the snap container; its children are the sections.
    pub container: NodeRef,
    pub current: usize,
    pub is_transitioning: bool,
    pub labels: Vec<String>,
    /// Jump to a section. Ignored while a transition is running.
    pub go_to: Callback<usize>,
}

fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

/// Everything the DOM callbacks need to drive the controller.
#[derive(Clone)]
struct Driver {
    controller: SharedController,
    container: NodeRef,
    view: UseStateSetter<SnapView>,
    published: Rc<RefCell<SnapView>>,
    enabled: Rc<RefCell<bool>>,
    settle_ms: f64,
}

impl Driver {
    fn enabled(&self) -> bool {
        *self.enabled.borrow()
    }

    /// Pushes the controller state to the page if it changed. Any input can
    /// re-arm a settled controller, so this runs after every step.
    fn publish(&self) {
        if let Some(view) = refresh(&self.published, &self.controller.borrow()) {
            self.view.set(view);
        }
    }

    /// Feeds one event through the controller and starts the frame loop if
    /// it kicked off a transition.
    fn dispatch(&self, event: InputEvent) {
        self.step(|controller, surface| {
            controller.push(event);
            controller.drain(surface)
        });
    }

    fn go_to(&self, index: usize) {
        self.step(|controller, surface| vec![controller.go_to(index, now(), surface)]);
    }

    fn step(&self, run: impl FnOnce(&mut SnapController, &mut DomSurface) -> Vec<Outcome>) {
        let Some(element) = self.container.cast::<HtmlElement>() else {
            return;
        };
        let mut surface = DomSurface::new(element);
        let outcomes = run(&mut *self.controller.borrow_mut(), &mut surface);
        self.publish();
        if outcomes
            .iter()
            .any(|outcome| matches!(outcome, Outcome::Started { .. }))
        {
            self.run_frames();
        }
    }

    fn run_frames(&self) {
        let Some(window) = web_sys::window() else {
            gloo_console::error!("No window available for scroll animation");
            return;
        };

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let next = callback.clone();
        let driver = self.clone();
        let frame_window = window.clone();

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(element) = driver.container.cast::<HtmlElement>() else {
                let _ = next.borrow_mut().take();
                return;
            };
            let mut surface = DomSurface::new(element);
            let outcome = driver.controller.borrow_mut().frame(timestamp, &mut surface);

            match outcome {
                Outcome::InFlight => {
                    if let Some(closure) = next.borrow().as_ref() {
                        let _ = frame_window
                            .request_animation_frame(closure.as_ref().unchecked_ref());
                    }
                }
                Outcome::Completed { .. } => {
                    driver.publish();
                    let settle = driver.clone();
                    Timeout::new(driver.settle_ms.ceil() as u32, move || {
                        settle.controller.borrow_mut().rearm(now());
                        settle.publish();
                    })
                    .forget();
                    let _ = next.borrow_mut().take();
                }
                _ => {
                    driver.publish();
                    let _ = next.borrow_mut().take();
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback.borrow();
        if let Some(closure) = first.as_ref() {
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        }
    }
}

fn is_editable(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .map(|element| {
            matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
                || element.is_content_editable()
        })
        .unwrap_or(false)
}

/// Turns wheel, touch and keyboard input on the container into animated
/// section-to-section transitions. Input is ignored while `enabled` is false.
#[hook]
pub fn use_scroll_snap(labels: Vec<String>, config: SnapConfig, enabled: bool) -> UseScrollSnapHandle {
    let container = use_node_ref();
    let controller = use_mut_ref(|| SnapController::new(labels, config));
    let view = use_state(|| SnapView::of(&controller.borrow()));
    let published = use_mut_ref(|| *view);
    let enabled_flag = use_mut_ref(|| enabled);
    *enabled_flag.borrow_mut() = enabled;

    let driver = Driver {
        controller: controller.clone(),
        container: container.clone(),
        view: view.setter(),
        published,
        enabled: enabled_flag,
        settle_ms: config.settle_ms,
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                let element = driver.container.cast::<HtmlElement>();
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if let Some(element) = element {
                    element.set_scroll_top(0);

                    let wheel_driver = driver.clone();
                    let on_wheel = Closure::wrap(Box::new(move |e: WheelEvent| {
                        if !wheel_driver.enabled() {
                            return;
                        }
                        e.prevent_default();
                        wheel_driver.dispatch(InputEvent::Wheel {
                            delta_y: e.delta_y(),
                            at: now(),
                        });
                    }) as Box<dyn FnMut(WheelEvent)>);

                    let touch_driver = driver.clone();
                    let on_touch_start = Closure::wrap(Box::new(move |e: TouchEvent| {
                        if let Some(touch) = e.touches().get(0) {
                            touch_driver.dispatch(InputEvent::TouchStart {
                                y: touch.client_y() as f64,
                            });
                        }
                    }) as Box<dyn FnMut(TouchEvent)>);

                    let touch_driver = driver.clone();
                    let on_touch_end = Closure::wrap(Box::new(move |e: TouchEvent| {
                        if !touch_driver.enabled() {
                            return;
                        }
                        if let Some(touch) = e.changed_touches().get(0) {
                            touch_driver.dispatch(InputEvent::TouchEnd {
                                y: touch.client_y() as f64,
                                at: now(),
                            });
                        }
                    }) as Box<dyn FnMut(TouchEvent)>);

                    let active = AddEventListenerOptions::new();
                    active.set_passive(false);
                    let passive = AddEventListenerOptions::new();
                    passive.set_passive(true);

                    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        on_wheel.as_ref().unchecked_ref(),
                        &active,
                    );
                    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                        "touchstart",
                        on_touch_start.as_ref().unchecked_ref(),
                        &passive,
                    );
                    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                        "touchend",
                        on_touch_end.as_ref().unchecked_ref(),
                        &passive,
                    );

                    cleanup = Some(Box::new(move || {
                        let _ = element.remove_event_listener_with_callback(
                            "wheel",
                            on_wheel.as_ref().unchecked_ref(),
                        );
                        let _ = element.remove_event_listener_with_callback(
                            "touchstart",
                            on_touch_start.as_ref().unchecked_ref(),
                        );
                        let _ = element.remove_event_listener_with_callback(
                            "touchend",
                            on_touch_end.as_ref().unchecked_ref(),
                        );
                    }));
                } else {
                    log::warn!("Scroll-snap container is not mounted");
                }

                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            (),
        );
    }

    {
        let driver = driver.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !driver.enabled() || is_editable(e.target()) {
                return;
            }
            let key = e.key();
            if !driver.controller.borrow().claims_key(&key) {
                return;
            }
            e.prevent_default();
            driver.dispatch(InputEvent::Key { key, at: now() });
        });
    }

    let go_to = {
        let driver = driver.clone();
        Callback::from(move |index: usize| {
            if driver.enabled() {
                driver.go_to(index);
            }
        })
    };

    let labels = controller.borrow().labels().to_vec();
    UseScrollSnapHandle {
        container,
        current: view.current,
        is_transitioning: view.transitioning,
        labels,
        go_to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::surface::FakeSurface;

    fn controller(count: usize) -> (SnapController, FakeSurface) {
        let labels = (0..count).map(|i| format!("Section {}", i + 1)).collect();
        (
            SnapController::new(labels, SnapConfig::default()),
            FakeSurface::stacked(count, 900.0),
        )
    }

    #[test]
    fn unchanged_view_is_not_republished() {
        let (ctl, _) = controller(3);
        let last = RefCell::new(SnapView::of(&ctl));
        assert_eq!(refresh(&last, &ctl), None);
    }

    #[test]
    fn input_that_rearms_publishes_the_idle_view() {
        let (mut ctl, mut surface) = controller(5);
        let last = RefCell::new(SnapView::of(&ctl));

        ctl.go_to(4, 0.0, &mut surface);
        assert!(refresh(&last, &ctl).is_some());
        assert_eq!(ctl.frame(1200.0, &mut surface), Outcome::Completed { index: 4 });
        assert_eq!(refresh(&last, &ctl), None);

        // Arrives after the settle window but before the settle timer runs.
        let outcome = ctl.handle(InputEvent::Key { key: "End".into(), at: 1450.0 }, &mut surface);
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(
            refresh(&last, &ctl),
            Some(SnapView { current: 4, transitioning: false })
        );

        // The late timer then finds nothing left to do.
        assert!(!ctl.rearm(1500.0));
        assert_eq!(refresh(&last, &ctl), None);
    }
}
