use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::buttons::Icon;
use crate::dom::open_in_new_tab;
use crate::lead::{booking_url, DemoSubmitter, LeadRequest, LeadSubmitter};
use crate::nav::Section;

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let lead = use_state(LeadRequest::default);
    let error = use_state(|| None::<String>);
    let acknowledged = use_state(|| None::<String>);

    let on_name = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lead.set(LeadRequest { name: input.value(), ..(*lead).clone() });
        })
    };
    let on_email = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lead.set(LeadRequest { email: input.value(), ..(*lead).clone() });
        })
    };
    let on_project = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            lead.set(LeadRequest { project: input.value(), ..(*lead).clone() });
        })
    };

    let onsubmit = {
        let lead = lead.clone();
        let error = error.clone();
        let acknowledged = acknowledged.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match DemoSubmitter.submit(&lead) {
                Ok(ack) => {
                    error.set(None);
                    acknowledged.set(Some(ack.message));
                    lead.set(LeadRequest::default());
                }
                Err(err) => {
                    acknowledged.set(None);
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let open_agenda = {
        let lead = lead.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&booking_url(&lead.name, &lead.email)))
    };

    html! {
        <section id={Section::Devis.id()} class="devis-section">
            <div class="container">
                <h2>{"Devis gratuit — 1ère page offerte"}</h2>
                <p class="lead">
                    {"Remplis tes coordonnées et décris ton projet. Nous offrons la première page pour lancer ta présence en ligne."}
                </p>
                <form class="lead-form" {onsubmit} novalidate={true}>
                    <label>
                        <span>{"Nom complet"}</span>
                        <input required={true} placeholder="Votre nom" value={lead.name.clone()} oninput={on_name} />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input required={true} type="email" placeholder="vous@exemple.com" value={lead.email.clone()} oninput={on_email} />
                    </label>
                    <label class="wide">
                        <span>{"Votre projet"}</span>
                        <textarea
                            required={true}
                            placeholder="Parlez-nous de votre activité et de vos objectifs…"
                            value={lead.project.clone()}
                            oninput={on_project}
                        />
                    </label>
                    <div class="wide action-row">
                        <button type="submit" class="action action-primary">
                            <Icon name="mail" />{" Envoyer ma demande"}
                        </button>
                        <button type="button" class="action action-ghost" onclick={open_agenda}>
                            <Icon name="calendar_month" />{" Ouvrir l’agenda"}
                        </button>
                        <span class="hint">{"Réponse sous 24h ouvrées."}</span>
                    </div>
                    if let Some(message) = &*error {
                        <p class="form-error" role="alert">{message}</p>
                    }
                    if let Some(message) = &*acknowledged {
                        <p class="form-ack" role="status">{message}</p>
                    }
                </form>
            </div>
        </section>
    }
}
