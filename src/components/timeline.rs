use yew::prelude::*;

use crate::content::Step;
use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct ProcessTimelineProps {
    pub steps: Vec<Step>,
}

#[function_component(ProcessTimeline)]
pub fn process_timeline(props: &ProcessTimelineProps) -> Html {
    html! {
        <section id={Section::Process.id()} class="process-section">
            <div class="container narrow">
                <h2>{"Comment ça marche ?"}</h2>
                <div class="timeline">
                    <div class="timeline-rail" aria-hidden="true"></div>
                    <ul>
                        { for props.steps.iter().enumerate().map(|(i, step)| {
                            // Even steps hang on the left of the rail, odd ones on the right.
                            let side = if i % 2 == 0 { "timeline-left" } else { "timeline-right" };
                            html! {
                                <li key={i} class={classes!("timeline-step", side)}>
                                    <span class="timeline-dot" aria-hidden="true"></span>
                                    <div class="timeline-card">
                                        <div class="timeline-heading">
                                            <span class="timeline-number">{i + 1}</span>
                                            <h3>{&step.title}</h3>
                                        </div>
                                        <p>{&step.detail}</p>
                                    </div>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
