use yew::prelude::*;

use crate::components::buttons::{open_booking, Action, Badge, ButtonKind, Icon};
use crate::content::{Plan, PlanVariant};
use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let variant_class = match plan.variant {
        PlanVariant::Light => "plan-light",
        PlanVariant::Gold => "plan-gold",
        PlanVariant::Dark => "plan-dark",
    };
    let book = Callback::from(|_: MouseEvent| open_booking());

    html! {
        <div class={classes!("plan-card", "hover-pop", variant_class)} data-plan={plan.name.clone()}>
            <div class="plan-header">
                <h3>{&plan.name}</h3>
                if plan.variant == PlanVariant::Gold {
                    <Badge gold={true}>{"Le plus populaire"}</Badge>
                }
            </div>
            if let Some(description) = &plan.description {
                <p class="plan-description">{description}</p>
            }
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li class="included"><Icon name="check" />{feature}</li>
                }) }
                { for plan.not_included.iter().map(|feature| html! {
                    <li class="excluded"><Icon name="cancel" /><span>{feature}</span></li>
                }) }
            </ul>
            <Action kind={ButtonKind::Primary} class="plan-book" onclick={book}>
                <Icon name="event" />{" Prendre un rendez‑vous"}
            </Action>
            <Action kind={ButtonKind::Ghost} class="plan-quote" to={Section::Devis}>
                <Icon name="request_quote" />{" Demander un devis"}
            </Action>
        </div>
    }
}
