use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::buttons::{open_booking, Action, ButtonKind, Icon};
use crate::content::FaqEntry;
use crate::nav::Section;

/// Accordion rule: clicking the open item closes it, clicking another one
/// opens it instead.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" {onclick} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="toggle-icon">
                    <Icon name={if props.is_open { "remove" } else { "add" }} />
                </span>
            </button>
            if props.is_open {
                <div class="faq-answer">{&props.entry.answer}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id={Section::Faq.id()} class="faq-section">
            <div class="container faq-grid">
                <div>
                    <h2>{"Les questions fréquentes"}</h2>
                    <p class="lead">{"Vous avez des questions supplémentaires ? Réservez un appel dès maintenant."}</p>
                    <div class="action-row">
                        <Action kind={ButtonKind::Primary} to={Section::Offres}>
                            <Icon name="sell" />{" Je lance ma marque"}
                        </Action>
                        <Action kind={ButtonKind::Ghost} onclick={Callback::from(|_: MouseEvent| open_booking())}>
                            {"Réserver un appel"}
                        </Action>
                    </div>
                </div>
                <div class="faq-list">
                    { for props.entries.iter().enumerate().map(|(i, entry)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle(*open, i)))
                        };
                        html! {
                            <FaqItem key={i} entry={entry.clone()} is_open={*open == Some(i)} {on_toggle} />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn at_most_one_item_open() {
        let open = toggle(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle(open, 0);
        assert_eq!(open, Some(0));
        assert_eq!(toggle(open, 0), None);
    }
}
