use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::buttons::{open_booking, Action, Badge, ButtonKind, Icon};
use crate::components::faq::FaqSection;
use crate::components::lead_form::LeadForm;
use crate::components::plan_card::PlanCard;
use crate::components::projects::Projects;
use crate::components::star_rating::StarRating;
use crate::components::timeline::ProcessTimeline;
use crate::content::{Comparison, Rating, Testimonial};
use crate::hooks::{use_scroll_spy, use_site_content};
use crate::nav::{Section, SPY_SECTIONS};

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_site_content();
    use_title("SociQl — Sites vitrines premium".to_string());
    use_scroll_spy(&SPY_SECTIONS);

    html! {
        <main class="home">
            <Hero rating={content.rating.clone()} />
            <Projects projects={content.projects.clone()} />
            <section id={Section::Offres.id()} class="offers-section">
                <div class="container">
                    <h2>{"Nos offres"}</h2>
                    <p class="lead">
                        {"Choisissez la formule qui convient : nous adaptons le périmètre, les pages et l'accompagnement selon vos objectifs."}
                    </p>
                    <div class="plan-grid">
                        { for content.plans.iter().map(|plan| html! {
                            <PlanCard key={plan.name.clone()} plan={plan.clone()} />
                        }) }
                    </div>
                </div>
            </section>
            <ComparisonTable comparison={content.comparison.clone()} />
            <ProcessTimeline steps={content.steps.clone()} />
            <Testimonials rating={content.rating.clone()} testimonials={content.testimonials.clone()} />
            <LeadForm />
            <FaqSection entries={content.faq.clone()} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    rating: Rating,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let rating = &props.rating;
    html! {
        <section class="hero">
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="container">
                <div class="hero-content">
                    <Badge gold={true}>{"Site vitrine premium"}</Badge>
                    <h1>
                        {"Vendez plus avec un site "}
                        <span class="underline">{"rapide"}</span>{", "}
                        <span class="underline">{"design"}</span>{" et "}
                        <span class="underline">{"crédible"}</span>{"."}
                    </h1>
                    <p class="hero-subtitle">
                        {"SociQl conçoit des sites vitrines élégants et performants. Animations fluides, UX soignée, et intégration de paiement en quelques clics."}
                    </p>
                    <div class="hero-cta-group">
                        <Action kind={ButtonKind::Primary} to={Section::Devis}>
                            <Icon name="request_quote" />{" Devis gratuit"}
                        </Action>
                        <Action kind={ButtonKind::Ghost} to={Section::Offres}>
                            <Icon name="sell" />{" Voir les formules"}
                        </Action>
                    </div>
                    <ul class="hero-trust">
                        <li><Icon name="verified_user" />{" Paiement sécurisé"}</li>
                        <li><Icon name="bolt" />{" Chargement ultra-rapide"}</li>
                        <li><Icon name="touch_app" />{" Interactions au survol"}</li>
                    </ul>
                    <div class="hero-proof">
                        <div class="pill">
                            <StarRating value={rating.value} />
                            <span class="strong">{format!("Moyenne {}/5", rating.value)}</span>
                            <span class="muted">{format!("({} avis)", rating.reviews)}</span>
                        </div>
                        <div class="pill">
                            <Icon name="auto_awesome" />
                            <span class="strong">{format!("{} projets livrés", rating.projects_delivered)}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ComparisonTableProps {
    comparison: Comparison,
}

#[function_component(ComparisonTable)]
fn comparison_table(props: &ComparisonTableProps) -> Html {
    let comparison = &props.comparison;
    html! {
        <section id={Section::Comparatif.id()} class="comparison-section">
            <div class="container">
                <h2>{"Comparatif des offres"}</h2>
                <div class="table-scroll">
                    <table class="comparison">
                        <thead>
                            <tr>
                                <th>{"Fonctionnalités"}</th>
                                { for comparison.columns.iter().map(|column| html! { <th>{column}</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for comparison.rows.iter().map(|row| html! {
                                <tr key={row.feature.clone()}>
                                    <td class="feature">{&row.feature}</td>
                                    { for row.values.iter().map(|value| html! { <td>{value}</td> }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    rating: Rating,
    testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
fn testimonials(props: &TestimonialsProps) -> Html {
    let book = Callback::from(|_: MouseEvent| open_booking());
    html! {
        <section class="testimonials-section">
            <div class="container">
                <div class="testimonials-header">
                    <h2>{"Ils recommandent SociQl"}</h2>
                    <div class="pill">
                        <StarRating value={props.rating.value} />
                        <span class="strong">{format!("{}/5", props.rating.value)}</span>
                        <span class="muted">{format!("sur {} avis", props.rating.reviews)}</span>
                    </div>
                </div>
                <div class="testimonial-grid">
                    { for props.testimonials.iter().map(|review| html! {
                        <div key={review.name.clone()} class="testimonial hover-pop">
                            <div class="testimonial-head">
                                <div class="testimonial-author">
                                    <Icon name="sentiment_satisfied" />
                                    <p>{&review.name}</p>
                                </div>
                                <StarRating value={review.rating} />
                            </div>
                            <p class="testimonial-text">{format!("“{}”", review.text)}</p>
                        </div>
                    }) }
                </div>
                <div class="action-row centered">
                    <Action kind={ButtonKind::Ghost} onclick={book}>
                        <Icon name="event" />{" Réserver un appel"}
                    </Action>
                </div>
            </div>
        </section>
    }
}
