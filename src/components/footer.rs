use chrono::{Datelike, Local};
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::buttons::{Icon, Logo};
use crate::config::LEGAL_ANCHOR_DELAY_MS;
use crate::dom::{scroll_id_into_view_start, smooth_scroll_to_id};
use crate::hooks::use_site_content;
use crate::nav::Section;
use crate::Route;

const LEGAL_LINKS: [(&str, &str); 5] = [
    ("mentions-legales", "Mentions légales"),
    ("cgu", "CGU"),
    ("cgv", "CGV"),
    ("confidentialite", "Confidentialité"),
    ("cookies", "Cookies"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_site_content();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_home = route.as_ref().is_some_and(Route::is_home);

    // Switch to the legal page, then bring the requested article into view
    // once it has rendered.
    let legal_link = |anchor: Option<&'static str>| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(navigator) = &navigator else { return };
            info!("Opening legal page at {:?}", anchor);
            navigator.push(&Route::Legal);
            if let Some(anchor) = anchor {
                Timeout::new(LEGAL_ANCHOR_DELAY_MS, move || scroll_id_into_view_start(anchor)).forget();
            }
        })
    };

    // Home sections only exist on the home page; from elsewhere go back first.
    let section_link = |section: Section| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if on_home {
                smooth_scroll_to_id(section.id());
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
                Timeout::new(LEGAL_ANCHOR_DELAY_MS, move || smooth_scroll_to_id(section.id())).forget();
            }
        })
    };

    html! {
        <footer id={Section::Contact.id()} class="site-footer">
            <div class="container footer-main">
                <Logo />
                <p class="footer-copy">
                    {format!("© {} {} — Tous droits réservés.", Local::now().year(), content.brand.company)}
                </p>
                <div class="footer-actions">
                    <a href={content.brand.phone_href.clone()} class="footer-phone">
                        <Icon name="call" />{" "}{&content.brand.phone}
                    </a>
                    <a href={Section::Devis.href()} class="action action-ghost" onclick={section_link(Section::Devis)}>
                        <Icon name="request_quote" />{" Devis"}
                    </a>
                    <a href={Section::Offres.href()} class="action action-ghost" onclick={section_link(Section::Offres)}>
                        <Icon name="sell" />{" Offres"}
                    </a>
                    <a href="/legal" class="action action-ghost" onclick={legal_link(None)}>
                        <Icon name="gavel" />{" Légal"}
                    </a>
                </div>
            </div>
            <div class="container footer-legal">
                { for LEGAL_LINKS.iter().map(|(anchor, label)| html! {
                    <a key={*anchor} href={format!("/legal#{}", anchor)} onclick={legal_link(Some(*anchor))}>
                        {*label}
                    </a>
                }) }
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::LEGAL_LINKS;
    use crate::content::SiteContent;

    #[test]
    fn legal_links_point_at_existing_articles() {
        let content = SiteContent::load().expect("bundled site.json parses");
        let ids: Vec<&str> = content.legal_anchor_ids().collect();
        for (anchor, _) in LEGAL_LINKS {
            assert!(ids.contains(&anchor), "no legal article #{anchor}");
        }
    }
}
