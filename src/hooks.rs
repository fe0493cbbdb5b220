use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{SPY_ROOT_MARGIN, SPY_THRESHOLD};
use crate::content::SiteContent;
use crate::dom::{element_by_id, IntersectionWatch};
use crate::frame::{BrowserFrames, Coalescer};
use crate::nav::{ActiveSection, NavAction, NavState, Section};
use crate::scroll_spy::{Observation, ScrollSpy};
use crate::spring::{Spring, SpringConfig};

#[hook]
pub fn use_site_content() -> Rc<SiteContent> {
    use_context::<Rc<SiteContent>>().expect("SiteContent is provided at the root of App")
}

#[hook]
pub fn use_active_section() -> ActiveSection {
    use_context::<UseReducerHandle<NavState>>().expect("NavState is provided at the root of App")
}

/// Frame coalescer owned by the calling component. Anything still queued
/// is cancelled when the component unmounts.
#[hook]
pub fn use_frame_coalescer() -> Coalescer<BrowserFrames> {
    let coalescer = use_state(Coalescer::<BrowserFrames>::default);
    let coalescer = (*coalescer).clone();
    {
        let coalescer = coalescer.clone();
        use_unmount(move || coalescer.cancel());
    }
    coalescer
}

/// Follow `target` with a spring. Returns `None` until the first target
/// arrives; that first value is shown without animating.
#[hook]
pub fn use_spring(target: Option<f64>, config: SpringConfig) -> Option<f64> {
    let shown = use_state(|| target);
    let spring = use_mut_ref(|| Spring::new(config));
    let frames = use_frame_coalescer();

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |target| {
                if let Some(target) = *target {
                    let was_primed = spring.borrow().is_primed();
                    spring.borrow_mut().set_target(target);
                    if was_primed {
                        animate(spring, frames, shown.setter(), None);
                    } else if *shown != Some(target) {
                        shown.set(Some(target));
                    }
                }
                || ()
            },
            target,
        );
    }

    *shown
}

fn animate(
    spring: Rc<RefCell<Spring>>,
    frames: Coalescer<BrowserFrames>,
    shown: UseStateSetter<Option<f64>>,
    last_frame: Option<f64>,
) {
    let next = frames.clone();
    frames.schedule(move |now| {
        let dt = last_frame.map(|t| (now - t) / 1000.0).unwrap_or(1.0 / 60.0);
        let (position, settled) = {
            let mut spring = spring.borrow_mut();
            let position = spring.step(dt);
            (position, spring.is_settled())
        };
        shown.set(Some(position));
        if !settled {
            animate(spring, next, shown, Some(now));
        }
    });
}

/// Keep the active navigation entry in step with the section being read.
///
/// One intersection observer per section is attached when the calling
/// component mounts and disconnected when it unmounts. Reports are resolved
/// once per animation frame.
#[hook]
pub fn use_scroll_spy(sections: &'static [Section]) {
    let active = use_active_section();
    let spy = use_mut_ref(|| ScrollSpy::new(active.active));

    {
        let spy = spy.clone();
        use_effect_with_deps(
            move |section| {
                spy.borrow_mut().set_active(*section);
                || ()
            },
            active.active,
        );
    }

    use_effect_with_deps(
        move |_| {
            let frames = Coalescer::<BrowserFrames>::default();
            spy.borrow_mut().attach(sections);

            let mut watches = Vec::with_capacity(sections.len());
            for &section in sections {
                let Some(element) = element_by_id(section.id()) else {
                    debug!("scroll spy: #{} is not on the page", section);
                    continue;
                };
                let spy = spy.clone();
                let frames = frames.clone();
                let dispatcher = active.dispatcher();
                let watch = IntersectionWatch::new(&element, SPY_ROOT_MARGIN, SPY_THRESHOLD, move |entries| {
                    let mut recorded = false;
                    for entry in entries {
                        recorded |= spy.borrow_mut().record(Observation {
                            section,
                            intersecting: entry.is_intersecting(),
                            time: entry.time(),
                        });
                    }
                    if !recorded {
                        return;
                    }
                    let spy = spy.clone();
                    let dispatcher = dispatcher.clone();
                    frames.schedule(move |_| {
                        let changed = spy.borrow_mut().resolve();
                        if let Some(section) = changed {
                            dispatcher.dispatch(NavAction::Activate(section));
                        }
                    });
                });
                watches.extend(watch);
            }
            info!("Scroll spy watching {} of {} sections", watches.len(), sections.len());

            move || {
                drop(watches);
                frames.cancel();
                spy.borrow_mut().detach();
                debug!("Scroll spy detached");
            }
        },
        (),
    );
}
