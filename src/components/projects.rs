//! "Nos réalisations": horizontally scrolling strip of project cards where
//! the card nearest the middle is in focus.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use crate::carousel::{card_style, emphasis, CarouselState, ImageSource};
use crate::components::buttons::Icon;
use crate::config::{CARD_SPRING, CAROUSEL_SETTLE_DELAY_MS};
use crate::content::Project;
use crate::dom::{rect_of, scroll_into_view_centered, Listener};
use crate::frame::{BrowserFrames, Coalescer};
use crate::hooks::{use_frame_coalescer, use_spring};
use crate::nav::Section;

/// Measure every card against the track and update the focus.
fn sample(
    track: &NodeRef,
    cards: &[NodeRef],
    state: &RefCell<CarouselState>,
    focused: &UseStateSetter<usize>,
) {
    let Some(track_rect) = rect_of(track) else {
        debug!("carousel: track not laid out");
        return;
    };
    let card_rects: Vec<_> = cards.iter().map(rect_of).collect();
    let mut state = state.borrow_mut();
    if state.sample(track_rect, &card_rects) {
        focused.set(state.focused());
    }
}

/// Throttle sampling to one per animation frame; the latest request wins.
fn schedule_sample(
    frames: &Coalescer<BrowserFrames>,
    track: NodeRef,
    cards: Rc<Vec<NodeRef>>,
    state: Rc<RefCell<CarouselState>>,
    focused: UseStateSetter<usize>,
) {
    frames.schedule(move |_| sample(&track, &cards, &state, &focused));
}

fn goto(cards: &[NodeRef], index: Option<usize>) {
    let Some(node) = index.and_then(|i| cards.get(i)) else {
        return;
    };
    if let Some(card) = node.cast::<Element>() {
        scroll_into_view_centered(&card);
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let count = props.projects.len();
    let track = use_node_ref();
    let cards = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), count);
    let state = use_mut_ref(|| CarouselState::new(count));
    let focused = use_state_eq(|| 0usize);
    let frames = use_frame_coalescer();

    {
        let track = track.clone();
        let cards = cards.clone();
        let state = state.clone();
        let focused = focused.setter();
        use_effect_with_deps(
            move |_| {
                let request = {
                    let frames = frames.clone();
                    let track = track.clone();
                    let cards = cards.clone();
                    let state = state.clone();
                    let focused = focused.clone();
                    move |_: Event| {
                        schedule_sample(&frames, track.clone(), cards.clone(), state.clone(), focused.clone())
                    }
                };

                let mut listeners = Vec::new();
                if let Some(element) = track.cast::<Element>() {
                    listeners.extend(Listener::passive(&element, "scroll", request.clone()));
                }
                if let Some(window) = window() {
                    listeners.extend(Listener::new(&window, "resize", request));
                }

                // Images and fonts are still settling right after mount.
                let settle = Timeout::new(CAROUSEL_SETTLE_DELAY_MS, move || {
                    schedule_sample(&frames, track, cards, state, focused);
                });

                move || {
                    drop(listeners);
                    settle.cancel();
                }
            },
            (),
        );
    }

    let prev = {
        let state = state.clone();
        let cards = cards.clone();
        Callback::from(move |_: MouseEvent| goto(&cards, state.borrow().prev()))
    };
    let next = {
        let state = state.clone();
        let cards = cards.clone();
        Callback::from(move |_: MouseEvent| goto(&cards, state.borrow().next()))
    };

    html! {
        <section id={Section::Realisations.id()} class="projects-section">
            <div class="container">
                <h2>{"Nos réalisations"}</h2>
                <p class="lead">{"Faites défiler ou utilisez les flèches. L’élément centré est mis en avant."}</p>

                <div class="carousel">
                    <button class="carousel-arrow carousel-prev" aria-label="Projet précédent" onclick={prev}>
                        <Icon name="chevron_left" />
                    </button>
                    <button class="carousel-arrow carousel-next" aria-label="Projet suivant" onclick={next}>
                        <Icon name="chevron_right" />
                    </button>

                    <div class="carousel-track" ref={track}>
                        <div class="carousel-strip">
                            { for props.projects.iter().zip(cards.iter()).enumerate().map(|(i, (project, node))| {
                                let onclick = {
                                    let cards = cards.clone();
                                    Callback::from(move |_: MouseEvent| goto(&cards, Some(i)))
                                };
                                html! {
                                    <ProjectCard
                                        key={project.key.clone()}
                                        project={project.clone()}
                                        node={node.clone()}
                                        focused={*focused == i}
                                        {onclick}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    node: NodeRef,
    focused: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let source = use_state_eq(|| ImageSource::Primary);
    let weight = use_spring(Some(emphasis(props.focused)), CARD_SPRING).unwrap_or_default();

    let onerror = {
        let source = source.clone();
        let key = props.project.key.clone();
        Callback::from(move |_: Event| match source.after_error() {
            Some(next) => {
                debug!("Image for '{}' failed, using fallback", key);
                source.set(next);
            }
            None => debug!("Fallback image for '{}' failed too, leaving it", key),
        })
    };

    let project = &props.project;
    html! {
        <article
            ref={props.node.clone()}
            class={classes!("project-card", props.focused.then_some("focused"))}
            style={card_style(weight)}
            onclick={props.onclick.clone()}
        >
            <div class="project-frame">
                <div class="project-image">
                    <img
                        src={source.pick(&project.image, &project.fallback).to_string()}
                        alt={project.title.clone()}
                        loading="lazy"
                        {onerror}
                    />
                </div>
                <div class="project-body">
                    <h3>{&project.title}</h3>
                    <p>{&project.description}</p>
                    <a href={project.href.clone()} target="_blank" rel="noreferrer">
                        {"Voir la version live ↗"}
                    </a>
                </div>
            </div>
        </article>
    }
}
