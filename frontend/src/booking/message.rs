use std::fmt;

use crate::config::{SiteConfig, WHATSAPP_BASE_URL};

/// What the visitor asked for, as read from the booking form on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPayload {
    /// The form has no name field; kept so a caller can supply one.
    pub name: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub professional: String,
    pub payment: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhatsAppConfig {
    pub phone_digits: String,
    pub tracking_tag: Option<String>,
}

impl From<&SiteConfig> for WhatsAppConfig {
    fn from(site: &SiteConfig) -> Self {
        Self {
            phone_digits: site.whatsapp_digits.clone(),
            tracking_tag: site.utm.clone(),
        }
    }
}

/// A form date rendered for people: `DD/MM/YYYY`, or the input untouched
/// when it isn't three dash-separated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayDate<'a> {
    Reformatted(String),
    PassThrough(&'a str),
}

impl<'a> DisplayDate<'a> {
    pub fn from_iso(value: &'a str) -> Self {
        let parts: Vec<&str> = value.split('-').collect();
        match parts.as_slice() {
            [year, month, day] => DisplayDate::Reformatted(format!("{}/{}/{}", day, month, year)),
            _ => DisplayDate::PassThrough(value),
        }
    }
}

impl fmt::Display for DisplayDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayDate::Reformatted(date) => f.write_str(date),
            DisplayDate::PassThrough(raw) => f.write_str(raw),
        }
    }
}

fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

pub fn compose_message(payload: &BookingPayload, tracking_tag: Option<&str>) -> String {
    let mut parts = Vec::new();

    match present(&payload.name) {
        Some(name) => parts.push(format!("Hello! My name is {}.", name)),
        None => parts.push("Hello!".to_string()),
    }

    let mut schedule_line = String::from("I'd like to book a session");
    if let Some(service) = present(&payload.service) {
        schedule_line.push_str(&format!(" for {}", service));
    }
    if let Some(date) = present(&payload.date) {
        schedule_line.push_str(&format!(" on {}", DisplayDate::from_iso(date)));
    }
    if let Some(time) = present(&payload.time) {
        schedule_line.push_str(&format!(" at {}", time));
    }
    schedule_line.push('.');
    parts.push(schedule_line);

    if let Some(professional) = present(&payload.professional) {
        parts.push(format!("Therapist: {}.", professional));
    }
    if let Some(payment) = present(&payload.payment) {
        parts.push(format!("Preference: {}.", payment));
    }
    if let Some(notes) = present(&payload.notes) {
        parts.push(notes.to_string());
    }
    if let Some(tag) = tracking_tag.and_then(present) {
        parts.push(format!("UTM: {}", tag));
    }

    parts.join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    pub message: String,
    pub url: String,
}

impl WhatsAppLink {
    /// `None` when there is no phone number to send to.
    pub fn build(config: &WhatsAppConfig, payload: &BookingPayload) -> Option<Self> {
        let digits: String = config
            .phone_digits
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return None;
        }

        let message = compose_message(payload, config.tracking_tag.as_deref());
        let url = format!(
            "{}{}?text={}",
            WHATSAPP_BASE_URL,
            digits,
            urlencoding::encode(&message)
        );
        Some(Self { message, url })
    }
}
