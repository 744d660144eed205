use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod motion;
mod booking {
    pub mod form;
    pub mod message;
    pub mod modal;
    pub mod schedule;
    pub mod services;
}
mod components {
    pub mod countdown;
    pub mod faq;
    pub mod nav;
    pub mod reveal;
    pub mod section_link;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting booking page");
    yew::Renderer::<App>::new().render();
}
