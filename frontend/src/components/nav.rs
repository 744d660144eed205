use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::section_link::SectionLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Closed,
    Open,
}

impl NavState {
    pub fn toggled(self) -> Self {
        match self {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }
}

pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("about", "About"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_state(|| NavState::Closed);

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.set(NavState::Closed);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = (*menu).toggled();
            debug!("Navigation menu -> {:?}", next);
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(NavState::Closed))
    };

    let is_open = menu.is_open();

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <SectionLink target="top" class="nav-logo">
                    {"Casa Sereno"}
                </SectionLink>

                <button
                    id="navToggle"
                    class="burger-menu"
                    aria-controls="navMenu"
                    aria-expanded={is_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav
                    id="navMenu"
                    class={classes!("nav-menu", is_open.then_some("is-open"))}
                    aria-hidden={(!is_open).to_string()}
                >
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <SectionLink
                            target={*id}
                            class="nav-link"
                            on_navigate={close_menu.clone()}
                        >
                            {*label}
                        </SectionLink>
                    }) }
                    <button class="nav-book-button" onclick={props.on_book.clone()}>
                        {"Book a session"}
                    </button>
                </nav>
            </div>
            <div
                id="navBackdrop"
                class={classes!("nav-backdrop", is_open.then_some("is-open"))}
                aria-hidden={(!is_open).to_string()}
                onclick={close_menu.reform(|_: MouseEvent| ())}
            ></div>
        </header>
    }
}
