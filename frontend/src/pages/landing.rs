use std::rc::Rc;

use chrono::{Datelike, Local};
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::booking::modal::{BookingModal, ModalState};
use crate::components::countdown::Countdown;
use crate::components::faq::Faq;
use crate::components::nav::Nav;
use crate::components::reveal::Reveal;
use crate::components::section_link::SectionLink;
use crate::config::SiteConfig;
use crate::content::{FAQ_ENTRIES, SERVICES};

/// Builds a click handler that opens the booking modal for `service`,
/// anchored to whatever element was clicked.
fn book_handler(modal: &UseStateHandle<ModalState>, service: Option<&'static str>) -> Callback<MouseEvent> {
    let modal = modal.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let anchor_top = e
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.get_bounding_client_rect().top());
        modal.set(ModalState::Open {
            service: service.map(str::to_string),
            anchor_top,
        });
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = use_memo(|_| SiteConfig::from_document(), ());
    let modal = use_state(|| ModalState::Closed);

    {
        let site = site.clone();
        use_effect_with_deps(
            move |_| {
                info!("Landing page ready (WhatsApp configured: {})", site.has_whatsapp());
                || ()
            },
            (),
        );
    }

    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && modal.is_open() {
                modal.set(ModalState::Closed);
            }
        });
    }

    let close_booking = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };

    let current_year = Local::now().year();
    let tel_href = site.tel_href();

    html! {
        <div class="landing-page" id="top">
            <Nav on_book={book_handler(&modal, None)} />

            <section class="hero">
                <h1>{"Make room to breathe again"}</h1>
                <p class="hero-subtitle">
                    {"Therapy, bodywork and energy care in a quiet house in the middle of the city."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={book_handler(&modal, None)}>
                        {"Book a session"}
                    </button>
                    <SectionLink target="services" class="hero-secondary">
                        {"See services"}
                    </SectionLink>
                </div>
            </section>

            <Reveal id="services" class="services">
                <h2>{"Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <article class="service-card" key={service.name}>
                            <h3>{service.name}</h3>
                            <span class="service-duration">{service.duration}</span>
                            <p>{service.description}</p>
                            <button
                                class="service-book"
                                data-service={service.name}
                                onclick={book_handler(&modal, Some(service.name))}
                            >
                                {"Book"}
                            </button>
                        </article>
                    }) }
                </div>
            </Reveal>

            <Reveal id="about" class="about">
                <h2>{"About us"}</h2>
                <p>
                    {"We are a small team of psychologists and bodyworkers. Every session starts with \
                      listening, and every plan is made with you, not for you."}
                </p>
            </Reveal>

            <Reveal class="offer">
                <h2>{"First session, 20% off"}</h2>
                <p>{"Book today and the discount is yours. The offer resets at midnight."}</p>
                <Countdown />
                <button class="offer-cta" onclick={book_handler(&modal, None)}>
                    {"Claim my session"}
                </button>
            </Reveal>

            <Reveal id="faq" class="faq">
                <h2>{"Frequently asked questions"}</h2>
                <Faq entries={FAQ_ENTRIES} />
            </Reveal>

            <footer id="contact" class="footer">
                <p>
                    {"WhatsApp: "}
                    <span data-wa-display="">{site.whatsapp_label()}</span>
                </p>
                if let Some(href) = tel_href {
                    <a class="footer-tel" href={href}>{"Call us"}</a>
                }
                <p class="footer-copy">
                    {"© "}<span data-current-year="">{current_year}</span>{" Casa Sereno"}
                </p>
            </footer>

            <BookingModal
                state={(*modal).clone()}
                site={Rc::clone(&site)}
                on_close={close_booking}
            />
        </div>
    }
}
