use log::{warn, Level};
use serde::Deserialize;
use web_sys::window;

/// Lead time required between now and a same-day booking.
pub const BUFFER_MINUTES: i64 = 20;
pub const NOTES_MAX_CHARS: usize = 255;
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Mirrors the data-* attributes on <body>.
#[derive(Deserialize, Default)]
struct BodyDataset {
    whatsapp: Option<String>,
    utm: Option<String>,
}

/// Settings the hosting page hands to the app through `<body data-...>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    /// Phone number exactly as the page displays it.
    pub whatsapp_display: String,
    pub whatsapp_digits: String,
    pub utm: Option<String>,
}

impl SiteConfig {
    pub fn new(whatsapp: &str, utm: &str) -> Self {
        let utm = utm.trim();
        Self {
            whatsapp_display: whatsapp.to_string(),
            whatsapp_digits: phone_digits(whatsapp),
            utm: (!utm.is_empty()).then(|| utm.to_string()),
        }
    }

    pub fn from_document() -> Self {
        let Some(body) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            warn!("No document body, WhatsApp booking disabled");
            return Self::default();
        };

        let dataset: BodyDataset = match serde_wasm_bindgen::from_value(body.dataset().into()) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("Could not read body dataset: {}", e);
                BodyDataset::default()
            }
        };

        Self::new(
            dataset.whatsapp.as_deref().unwrap_or_default(),
            dataset.utm.as_deref().unwrap_or_default(),
        )
    }

    pub fn whatsapp_label(&self) -> &str {
        if self.whatsapp_display.is_empty() {
            "WhatsApp"
        } else {
            &self.whatsapp_display
        }
    }

    pub fn tel_href(&self) -> Option<String> {
        if self.whatsapp_digits.is_empty() {
            None
        } else {
            Some(format!("tel:+{}", self.whatsapp_digits))
        }
    }

    pub fn has_whatsapp(&self) -> bool {
        !self.whatsapp_digits.is_empty()
    }
}

pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(phone_digits("+55 (11) 98765-4321"), "5511987654321");
        assert_eq!(phone_digits("call us"), "");
    }

    #[test]
    fn empty_tag_is_absent() {
        let config = SiteConfig::new("+1 555 0100", "   ");
        assert_eq!(config.utm, None);
        assert_eq!(config.whatsapp_digits, "15550100");

        let tagged = SiteConfig::new("+1 555 0100", " spring-campaign ");
        assert_eq!(tagged.utm.as_deref(), Some("spring-campaign"));
    }

    #[test]
    fn tel_link_needs_digits() {
        assert_eq!(SiteConfig::new("", "").tel_href(), None);
        assert_eq!(
            SiteConfig::new("+44 20 7946 0000", "").tel_href().as_deref(),
            Some("tel:+442079460000")
        );
    }

    #[test]
    fn label_falls_back_to_app_name() {
        assert_eq!(SiteConfig::new("", "").whatsapp_label(), "WhatsApp");
        assert_eq!(SiteConfig::new("(11) 4000-1234", "").whatsapp_label(), "(11) 4000-1234");
    }
}
