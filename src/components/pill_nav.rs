//! Desktop tab bar with a highlight that slides under the active tab.
//!
//! The highlight is positioned from live measurements of the tab buttons,
//! re-taken whenever the active tab changes, the bar resizes, the window
//! resizes or rotates, and once web fonts have finished loading (text width
//! shifts when the real font replaces the fallback).

use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::components::buttons::Icon;
use crate::config::INDICATOR_SPRING;
use crate::dom::{rect_of, smooth_scroll_to_id, Listener, ResizeWatch};
use crate::geometry::IndicatorRect;
use crate::hooks::{use_active_section, use_spring};
use crate::indicator::IndicatorTracker;
use crate::nav::{tab_index, NavAction, TABS};

#[function_component(PillNav)]
pub fn pill_nav() -> Html {
    let active = use_active_section();
    let bar = use_node_ref();
    let buttons = use_memo(|_| TABS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let tracker = use_mut_ref(IndicatorTracker::default);
    let current = use_mut_ref(|| tab_index(active.active));
    let rect = use_state_eq(|| None::<IndicatorRect>);

    *current.borrow_mut() = tab_index(active.active);

    let measure: Rc<dyn Fn()> = {
        let bar = bar.clone();
        let buttons = buttons.clone();
        let current = current.clone();
        let rect = rect.setter();
        Rc::new(move || {
            let button = (*current.borrow()).and_then(|i| buttons.get(i)).and_then(rect_of);
            let measured = tracker.borrow_mut().update(rect_of(&bar), button);
            rect.set(measured);
        })
    };

    {
        let measure = measure.clone();
        use_effect_with_deps(
            move |_| {
                measure();
                || ()
            },
            active.active,
        );
    }

    {
        let bar = bar.clone();
        let measure = measure.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                let mut resize_watch = None;

                if let Some(element) = bar.cast::<Element>() {
                    let measure = measure.clone();
                    resize_watch = ResizeWatch::new(&element, move || measure());
                }
                if let Some(window) = window() {
                    for event in ["resize", "orientationchange"] {
                        let measure = measure.clone();
                        listeners.extend(Listener::new(&window, event, move |_| measure()));
                    }
                    if let Some(document) = window.document() {
                        match document.fonts().ready() {
                            Ok(ready) => {
                                let measure = measure.clone();
                                spawn_local(async move {
                                    if JsFuture::from(ready).await.is_ok() {
                                        debug!("Fonts ready, re-measuring tab indicator");
                                        measure();
                                    }
                                });
                            }
                            Err(e) => debug!("document.fonts unavailable: {:?}", e),
                        }
                    }
                }

                move || {
                    drop(resize_watch);
                    drop(listeners);
                }
            },
            (),
        );
    }

    let left = use_spring((*rect).map(|r| r.offset), INDICATOR_SPRING);
    let width = use_spring((*rect).map(|r| r.width), INDICATOR_SPRING);

    let indicator = match (left, width) {
        (Some(left), Some(width)) => html! {
            <div class="pill-indicator" data-pill-indicator="" style={format!("left: {:.2}px; width: {:.2}px;", left, width)}></div>
        },
        _ => html! {},
    };

    html! {
        <div class="pill-nav" data-role="pillnav">
            <div class="pill-bar" ref={bar}>
                { indicator }
                { for TABS.iter().zip(buttons.iter()).map(|(tab, node)| {
                    let is_active = active.active == tab.key;
                    let onclick = {
                        let active = active.clone();
                        let key = tab.key;
                        Callback::from(move |_: MouseEvent| {
                            active.dispatch(NavAction::Activate(key));
                            smooth_scroll_to_id(key.id());
                        })
                    };
                    html! {
                        <button
                            key={tab.key.id()}
                            ref={node.clone()}
                            type="button"
                            data-tab={tab.key.id()}
                            class={classes!("pill-tab", is_active.then_some("active"))}
                            aria-current={is_active.then_some("page")}
                            {onclick}
                        >
                            <Icon name={tab.icon} />
                            {tab.label}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
