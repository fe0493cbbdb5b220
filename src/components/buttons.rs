use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::BOOKING_URL;
use crate::dom::{open_in_new_tab, smooth_scroll_to_id};
use crate::nav::Section;

/// Material Symbols glyph.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("material-symbols-rounded", props.class.clone())} aria-hidden="true">
            {&props.name}
        </span>
    }
}

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div class="logo">
            <svg width="28" height="28" viewBox="0 0 64 64" fill="none" aria-hidden="true">
                <defs>
                    <linearGradient id="logo-gradient" x1="0" y1="0" x2="64" y2="64" gradientUnits="userSpaceOnUse">
                        <stop stop-color="#0A0A0A" />
                        <stop offset="1" stop-color="#2B2B2B" />
                    </linearGradient>
                </defs>
                <rect x="4" y="4" width="56" height="56" rx="14" fill="url(#logo-gradient)" />
                <path d="M20 38c8-2 12-14 12-14s4 12 12 14c-5 4-12 8-12 8s-7-4-12-8Z" fill="white" />
            </svg>
            <span class="logo-text">{"SOCIQL"}</span>
        </div>
    }
}

pub fn open_booking() {
    open_in_new_tab(BOOKING_URL);
}

/// Anchor to a home-page section that scrolls smoothly instead of jumping.
pub fn scroll_to(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        smooth_scroll_to_id(section.id());
    })
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonKind {
    /// Black, call to action.
    Primary,
    /// White with gold border.
    Ghost,
}

#[derive(Properties, PartialEq)]
pub struct ActionProps {
    pub kind: ButtonKind,
    /// Section to scroll to. Ignored when `onclick` is set.
    #[prop_or_default]
    pub to: Option<Section>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Action)]
pub fn action(props: &ActionProps) -> Html {
    let class = classes!(
        "action",
        match props.kind {
            ButtonKind::Primary => "action-primary",
            ButtonKind::Ghost => "action-ghost",
        },
        props.class.clone()
    );
    let arrow = (props.kind == ButtonKind::Primary).then(|| html! { <Icon name="arrow_forward" /> });

    match (&props.onclick, props.to) {
        (Some(onclick), _) => html! {
            <button type="button" {class} onclick={onclick.clone()}>
                { for props.children.iter() }
                { arrow }
            </button>
        },
        (None, Some(section)) => html! {
            <a href={section.href()} {class} onclick={scroll_to(section)}>
                { for props.children.iter() }
                { arrow }
            </a>
        },
        (None, None) => html! {
            <span {class}>{ for props.children.iter() }</span>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub gold: bool,
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.gold.then_some("badge-gold"))}>
            <Icon name="auto_awesome" class="badge-icon" />
            { for props.children.iter() }
        </span>
    }
}
