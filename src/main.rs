use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod carousel;
mod content;
mod dom;
mod frame;
mod geometry;
mod hooks;
mod indicator;
mod lead;
mod nav;
mod scroll_spy;
mod spring;
mod components {
    pub mod buttons;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod lead_form;
    pub mod pill_nav;
    pub mod plan_card;
    pub mod projects;
    pub mod star_rating;
    pub mod timeline;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use components::{footer::Footer, header::Header};
use content::SiteContent;
use nav::NavState;
use pages::{home::Home, legal::Legal};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/legal")]
    Legal,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Section navigation and the scroll spy only exist on the home page.
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Legal => {
            info!("Rendering Legal page");
            html! { <Legal /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let active = use_reducer(NavState::default);

    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <ContextProvider<UseReducerHandle<NavState>> context={active}>
                <BrowserRouter>
                    <div class="app">
                        <Header />
                        <Switch<Route> render={switch} />
                        <Footer />
                    </div>
                </BrowserRouter>
            </ContextProvider<UseReducerHandle<NavState>>>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps { content: Rc::new(content) }).render();
        }
        Err(err) => error!("Cannot start: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn only_home_route_shows_section_navigation() {
        let home = Route::recognize("/");
        assert_eq!(home, Some(Route::Home));
        assert!(home.as_ref().is_some_and(Route::is_home));

        let legal = Route::recognize("/legal");
        assert_eq!(legal, Some(Route::Legal));
        assert!(!legal.as_ref().is_some_and(Route::is_home));
        assert!(!Route::NotFound.is_home());
        assert!(!None::<Route>.as_ref().is_some_and(Route::is_home));
    }
}
