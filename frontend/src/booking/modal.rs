use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use web_sys::{window, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::form::{BookingError, BookingForm};
use crate::booking::message::{WhatsAppConfig, WhatsAppLink};
use crate::booking::schedule::{ScheduleCheck, ScheduleError, ScheduleValidator};
use crate::booking::services::{ServicePicker, ServiceSelection};
use crate::config::{SiteConfig, NOTES_MAX_CHARS};
use crate::content::{service_names, PAYMENT_METHODS, PROFESSIONALS};
use crate::motion::is_compact_viewport;

const ANCHOR_GAP: f64 = 12.0;
const VIEWPORT_MARGIN: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Open {
        /// Service carried by the button that opened the modal.
        service: Option<String>,
        /// Viewport top of that button, when there was one.
        anchor_top: Option<f64>,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Top offset that places the modal just above its trigger on small screens,
/// kept inside the viewport.
pub fn anchored_top(trigger_top: f64, modal_height: f64, viewport_height: f64) -> f64 {
    let mut top = trigger_top - modal_height - ANCHOR_GAP;
    if top < VIEWPORT_MARGIN {
        top = VIEWPORT_MARGIN;
    }
    if top > viewport_height - modal_height - VIEWPORT_MARGIN {
        top = (viewport_height - modal_height - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    }
    top
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn set_body_modal_class(open: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force("modal-open", open);
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener") {
            warn!("Could not open WhatsApp link: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub state: ModalState,
    pub site: Rc<SiteConfig>,
    pub on_close: Callback<()>,
}

pub enum BookingMsg {
    SetDate(String),
    SetTime(String),
    SetService(usize, bool),
    SetProfessional(String),
    SetPayment(String),
    SetNotes(String),
    ToggleNotes,
    Submit,
    Close,
    Anchored(f64),
}

pub struct BookingModal {
    form: BookingForm,
    services: ServiceSelection,
    validator: ScheduleValidator,
    schedule: ScheduleCheck,
    date_error: Option<String>,
    service_error: Option<String>,
    notes_open: bool,
    modal_ref: NodeRef,
    pending_anchor: Option<f64>,
    anchored_top: Option<f64>,
}

impl BookingModal {
    fn refresh_schedule(&mut self) {
        self.schedule = self.form.revalidate(&self.validator, local_now());
        if self.schedule.clears_date() {
            self.date_error = Some(ScheduleError::PastDate.to_string());
        }
    }

    fn opened(&mut self, service: Option<&str>, anchor_top: Option<f64>) {
        info!("Booking modal opened (service: {:?})", service);
        self.services.reset(service);
        self.service_error = None;
        self.refresh_schedule();
        self.pending_anchor = anchor_top.filter(|_| is_compact_viewport());
        set_body_modal_class(true);
    }

    fn closed(&mut self) {
        debug!("Booking modal closed");
        self.notes_open = false;
        self.pending_anchor = None;
        self.anchored_top = None;
        set_body_modal_class(false);
    }

    fn submit(&mut self, ctx: &Context<Self>) {
        let result = self.form.submit(&self.services, &self.validator, local_now());
        self.schedule = self
            .validator
            .evaluate(local_now(), &self.form.date, &self.form.time);

        let payload = match result {
            Ok(payload) => payload,
            Err(BookingError::Schedule(ScheduleError::PastDate)) => {
                warn!("Booking blocked: date in the past");
                self.date_error = Some(ScheduleError::PastDate.to_string());
                return;
            }
            Err(BookingError::Schedule(e)) => {
                warn!("Booking blocked: {}", e);
                return;
            }
            Err(e @ BookingError::NoServiceSelected) => {
                warn!("Booking blocked: {}", e);
                self.service_error = Some(e.to_string());
                return;
            }
        };

        let config = WhatsAppConfig::from(ctx.props().site.as_ref());
        match WhatsAppLink::build(&config, &payload) {
            Some(link) => {
                info!("Opening WhatsApp booking request for {}", payload.service);
                open_in_new_tab(&link.url);
            }
            None => warn!("No WhatsApp number configured, booking request not sent"),
        }

        self.form.reset();
        self.services.clear();
        self.date_error = None;
        self.service_error = None;
        self.schedule = self.validator.evaluate(local_now(), "", "");
        ctx.props().on_close.emit(());
    }
}

impl Component for BookingModal {
    type Message = BookingMsg;
    type Properties = BookingModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let validator = ScheduleValidator::default();
        let mut modal = Self {
            form: BookingForm::default(),
            services: ServiceSelection::new(service_names()),
            validator,
            schedule: validator.evaluate(local_now(), "", ""),
            date_error: None,
            service_error: None,
            notes_open: false,
            modal_ref: NodeRef::default(),
            pending_anchor: None,
            anchored_top: None,
        };
        if let ModalState::Open { service, anchor_top } = &ctx.props().state {
            modal.opened(service.as_deref(), *anchor_top);
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let state = &ctx.props().state;
        if *state != old_props.state {
            match state {
                ModalState::Open { service, anchor_top } => {
                    self.opened(service.as_deref(), *anchor_top)
                }
                ModalState::Closed => self.closed(),
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingMsg::SetDate(date) => {
                self.form.date = date;
                self.date_error = None;
                self.refresh_schedule();
            }
            BookingMsg::SetTime(time) => {
                self.form.time = time;
                self.refresh_schedule();
            }
            BookingMsg::SetService(index, checked) => {
                self.services.set_checked(index, checked);
                self.service_error = None;
            }
            BookingMsg::SetProfessional(professional) => self.form.professional = professional,
            BookingMsg::SetPayment(payment) => self.form.payment = payment,
            BookingMsg::SetNotes(notes) => self.form.set_notes(&notes),
            BookingMsg::ToggleNotes => self.notes_open = !self.notes_open,
            BookingMsg::Submit => self.submit(ctx),
            BookingMsg::Close => {
                ctx.props().on_close.emit(());
                return false;
            }
            BookingMsg::Anchored(top) => self.anchored_top = Some(top),
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(trigger_top) = self.pending_anchor.take() else {
            return;
        };
        let Some(modal) = self.modal_ref.cast::<Element>() else {
            return;
        };
        let viewport_height = window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let modal_height = modal.get_bounding_client_rect().height();
        ctx.link().send_message(BookingMsg::Anchored(anchored_top(
            trigger_top,
            modal_height,
            viewport_height,
        )));
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let is_open = ctx.props().state.is_open();
        let aria_hidden = (!is_open).to_string();
        let close = link.callback(|_: MouseEvent| BookingMsg::Close);

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingMsg::Submit
        });
        let on_date = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            BookingMsg::SetDate(input.value())
        });
        let on_time = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            BookingMsg::SetTime(input.value())
        });
        let on_professional = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            BookingMsg::SetProfessional(select.value())
        });
        let on_payment = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            BookingMsg::SetPayment(select.value())
        });
        let on_notes = link.callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            BookingMsg::SetNotes(textarea.value())
        });
        let on_service = link.callback(|(index, checked): (usize, bool)| {
            BookingMsg::SetService(index, checked)
        });

        let style = self
            .anchored_top
            .map(|top| format!("top: {}px; left: 12px; transform: none;", top));
        let time_error = self.schedule.time.as_ref().err().map(|e| e.to_string());

        html! {
            <>
                <div
                    id="modalBackdrop"
                    class={classes!("modal-backdrop", is_open.then_some("is-open"))}
                    aria-hidden={aria_hidden.clone()}
                    onclick={close.clone()}
                ></div>
                <div
                    id="bookingModal"
                    ref={self.modal_ref.clone()}
                    class={classes!("booking-modal", is_open.then_some("is-open"))}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="bookingTitle"
                    aria-hidden={aria_hidden}
                    {style}
                >
                    <button type="button" class="modal-close" aria-label="Close" onclick={close}>
                        {"×"}
                    </button>
                    <h2 id="bookingTitle">{"Book a session"}</h2>

                    <form id="bookingForm" novalidate={true} {onsubmit}>
                        <div class="field">
                            <span class="field-label">{"Services"}</span>
                            <ServicePicker
                                selection={self.services.clone()}
                                error={self.service_error.clone()}
                                modal_open={is_open}
                                on_change={on_service}
                            />
                        </div>

                        <div class="field-row">
                            <label class="field">
                                <span class="field-label">{"Date"}</span>
                                <input
                                    type="date"
                                    name="date"
                                    min={self.schedule.constraint.min_date.clone()}
                                    value={self.form.date.clone()}
                                    oninput={on_date}
                                />
                                <span class="field-error" role="alert">
                                    {self.date_error.clone().unwrap_or_default()}
                                </span>
                            </label>
                            <label class="field">
                                <span class="field-label">{"Time"}</span>
                                <input
                                    id="bookingTime"
                                    type="time"
                                    name="time"
                                    min={self.schedule.constraint.min_time.clone()}
                                    value={self.form.time.clone()}
                                    oninput={on_time}
                                />
                                <span class="field-error" role="alert">
                                    {time_error.unwrap_or_default()}
                                </span>
                            </label>
                        </div>
                        <p class="schedule-hint" data-schedule-hint="">
                            {self.schedule.hint.to_string()}
                        </p>

                        <label class="field">
                            <span class="field-label">{"Therapist"}</span>
                            <select name="professional" onchange={on_professional}>
                                <option value="" selected={self.form.professional.is_empty()}>
                                    {"No preference"}
                                </option>
                                { for PROFESSIONALS.iter().map(|name| html! {
                                    <option value={*name} selected={self.form.professional == *name}>
                                        {*name}
                                    </option>
                                }) }
                            </select>
                        </label>

                        <label class="field">
                            <span class="field-label">{"Payment"}</span>
                            <select name="payment" onchange={on_payment}>
                                <option value="" selected={self.form.payment.is_empty()}>
                                    {"Decide later"}
                                </option>
                                { for PAYMENT_METHODS.iter().map(|method| html! {
                                    <option value={*method} selected={self.form.payment == *method}>
                                        {*method}
                                    </option>
                                }) }
                            </select>
                        </label>

                        <button
                            type="button"
                            class="notes-toggle"
                            aria-expanded={self.notes_open.to_string()}
                            onclick={link.callback(|_: MouseEvent| BookingMsg::ToggleNotes)}
                        >
                            { if self.notes_open { "Hide notes" } else { "Add notes" } }
                        </button>
                        <div class={classes!("notes", self.notes_open.then_some("is-open"))}>
                            <textarea
                                name="notes"
                                maxlength={NOTES_MAX_CHARS.to_string()}
                                placeholder="Anything we should know before the session?"
                                value={self.form.notes().to_string()}
                                oninput={on_notes}
                            />
                            <span class="char-count" data-char-count="">
                                {self.form.notes_counter()}
                            </span>
                        </div>

                        <button type="submit" class="booking-submit">
                            {"Send via WhatsApp"}
                        </button>
                    </form>
                </div>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sits_above_the_trigger() {
        assert_eq!(anchored_top(700.0, 400.0, 900.0), 288.0);
    }

    #[test]
    fn never_above_the_top_margin() {
        assert_eq!(anchored_top(100.0, 400.0, 900.0), 16.0);
    }

    #[test]
    fn never_below_the_bottom_margin() {
        // trigger far down a long viewport
        assert_eq!(anchored_top(2000.0, 400.0, 900.0), 484.0);
    }

    #[test]
    fn tall_modal_sticks_to_top_margin() {
        assert_eq!(anchored_top(500.0, 1000.0, 800.0), 16.0);
    }

    #[test]
    fn open_state() {
        assert!(!ModalState::Closed.is_open());
        assert!(ModalState::Open { service: None, anchor_top: None }.is_open());
    }
}
