use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::buttons::Icon;
use crate::content::LegalArticle;
use crate::dom::scroll_to_top_instantly;
use crate::hooks::use_site_content;
use crate::Route;

#[function_component(Legal)]
pub fn legal() -> Html {
    let content = use_site_content();
    let navigator = use_navigator();
    use_title("Informations légales — SociQl".to_string());

    use_effect_with_deps(
        |_| {
            scroll_to_top_instantly();
            || ()
        },
        (),
    );

    let back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <main class="legal-page">
            <div class="container">
                <div class="legal-header">
                    <h1>{"Informations légales"}</h1>
                    <button type="button" class="action action-ghost" onclick={back}>
                        <Icon name="arrow_back" />{" Retour au site"}
                    </button>
                </div>
                <div class="legal-grid">
                    { for content.legal.iter().map(article) }
                </div>
            </div>
        </main>
    }
}

fn article(article: &LegalArticle) -> Html {
    html! {
        <article
            key={article.title.clone()}
            id={article.id.clone()}
            class={classes!("legal-card", article.wide.then_some("wide"))}
        >
            <h2>{&article.title}</h2>
            { for article.paragraphs.iter().map(|p| html! {
                <p>
                    if let Some(label) = &p.label {
                        <strong>{format!("{} : ", label)}</strong>
                    }
                    {&p.text}
                </p>
            }) }
            if !article.items.is_empty() {
                <ul>
                    { for article.items.iter().map(|item| html! { <li>{item}</li> }) }
                </ul>
            }
        </article>
    }
}
