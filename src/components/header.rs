use web_sys::{window, Element, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::buttons::{open_booking, Action, ButtonKind, Icon, Logo};
use crate::components::pill_nav::PillNav;
use crate::config::HEADER_HEIGHT_FALLBACK_PX;
use crate::dom::{publish_header_height, smooth_scroll_to_id, Listener, ResizeWatch};
use crate::hooks::use_active_section;
use crate::nav::{NavAction, Section, TABS};
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let on_home = route.as_ref().is_some_and(Route::is_home);
    let menu_open = use_state(|| false);
    let header_ref = use_node_ref();
    let active = use_active_section();

    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let header = header_ref.cast::<Element>();
                let publish = move || {
                    let height = header_ref
                        .cast::<HtmlElement>()
                        .map(|h| h.offset_height())
                        .filter(|h| *h > 0)
                        .unwrap_or(HEADER_HEIGHT_FALLBACK_PX);
                    publish_header_height(height);
                };
                publish();

                let mut listeners = Vec::new();
                let resize_watch = header.and_then(|header| ResizeWatch::new(&header, publish.clone()));
                if let Some(window) = window() {
                    for event in ["resize", "orientationchange"] {
                        let publish = publish.clone();
                        listeners.extend(Listener::new(&window, event, move |_| publish()));
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let go = |key: Section| {
        let menu_open = menu_open.clone();
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.dispatch(NavAction::Activate(key));
            smooth_scroll_to_id(key.id());
            menu_open.set(false);
        })
    };

    let contact = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            open_booking();
        })
    };

    html! {
        <header class="site-header" ref={header_ref}>
            <div class="header-glow" aria-hidden="true"></div>
            <div class="header-inner">
                <div class="header-bar">
                    <div class="header-logo">
                        <Link<Route> to={Route::Home}>
                            <Logo />
                        </Link<Route>>
                    </div>
                    if on_home {
                        <>
                        <nav class="desktop-nav">
                            <PillNav />
                        </nav>
                        <div class="mobile-actions">
                            <Action kind={ButtonKind::Ghost} to={Section::Offres} class="compact">
                                <Icon name="sell" />{" Offres"}
                            </Action>
                            <button type="button" class="menu-toggle" aria-expanded={menu_open.to_string()} onclick={toggle_menu}>
                                <Icon name={if *menu_open { "close" } else { "add" }} />
                            </button>
                        </div>
                        </>
                    }
                </div>
            </div>
            if *menu_open && on_home {
                <>
                <div class="menu-backdrop" onclick={close_menu.clone()}></div>
                <div class="mobile-menu">
                    <div class="mobile-menu-header">
                        <p>{"MENU"}</p>
                        <button type="button" class="menu-close" onclick={close_menu}>
                            <Icon name="close" />
                        </button>
                    </div>
                    <div class="mobile-menu-items">
                        { for TABS.iter().map(|tab| html! {
                            <button key={tab.key.id()} type="button" class="mobile-menu-item" onclick={go(tab.key)}>
                                <span>{tab.label}</span>
                                <Icon name="arrow_forward" />
                            </button>
                        }) }
                    </div>
                    <button type="button" class="action action-primary" onclick={contact}>
                        <Icon name="event" />{" Contact / Devis"}
                    </button>
                </div>
                </>
            }
        </header>
    }
}
