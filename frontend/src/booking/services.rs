use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_click_away;

pub const SUMMARY_PLACEHOLDER: &str = "Select one or more options";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: String,
    pub checked: bool,
}

/// Checked state of the service picker, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceSelection {
    options: Vec<ServiceOption>,
}

impl ServiceSelection {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: values
                .into_iter()
                .map(|value| ServiceOption { value: value.into(), checked: false })
                .collect(),
        }
    }

    pub fn options(&self) -> &[ServiceOption] {
        &self.options
    }

    /// Unchecks everything, then checks `preselect` if it names an option.
    pub fn reset(&mut self, preselect: Option<&str>) {
        for option in &mut self.options {
            option.checked = preselect.map_or(false, |service| option.value == service);
        }
    }

    pub fn clear(&mut self) {
        self.reset(None);
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(option) = self.options.get_mut(index) {
            option.checked = checked;
        }
    }

    pub fn selected(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Value posted with the form: the selection joined by ", ".
    pub fn joined(&self) -> String {
        self.selected().join(", ")
    }

    pub fn summary(&self) -> String {
        if self.selected().is_empty() {
            SUMMARY_PLACEHOLDER.to_string()
        } else {
            self.joined()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicePickerProps {
    pub selection: ServiceSelection,
    pub error: Option<String>,
    /// Forces the panel shut when the owning modal closes.
    pub modal_open: bool,
    pub on_change: Callback<(usize, bool)>,
}

#[function_component(ServicePicker)]
pub fn service_picker(props: &ServicePickerProps) -> Html {
    let panel = use_state(|| PanelState::Closed);
    let picker_ref = use_node_ref();

    {
        let panel = panel.clone();
        use_click_away(picker_ref.clone(), move |_: Event| {
            panel.set(PanelState::Closed);
        });
    }

    {
        let panel = panel.clone();
        use_effect_with_deps(
            move |modal_open| {
                if !*modal_open {
                    panel.set(PanelState::Closed);
                }
                || ()
            },
            props.modal_open,
        );
    }

    let toggle_panel = {
        let panel = panel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            panel.set((*panel).toggled());
        })
    };

    let summary = props.selection.summary();

    html! {
        <div class="service-select" ref={picker_ref}>
            <button
                type="button"
                class="service-select-trigger"
                aria-expanded={panel.is_open().to_string()}
                onclick={toggle_panel}
            >
                {summary}
            </button>
            <div class={classes!("service-select-panel", panel.is_open().then_some("is-open"))}>
                { for props.selection.options().iter().enumerate().map(|(index, option)| {
                    let on_change = props.on_change.clone();
                    let onchange = Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_change.emit((index, input.checked()));
                    });
                    html! {
                        <label class="service-option" key={option.value.clone()}>
                            <input
                                type="checkbox"
                                value={option.value.clone()}
                                checked={option.checked}
                                {onchange}
                            />
                            <span>{&option.value}</span>
                        </label>
                    }
                }) }
            </div>
            <input type="hidden" name="services" value={props.selection.joined()} />
            <span class="service-error" role="alert">
                {props.error.clone().unwrap_or_default()}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> ServiceSelection {
        ServiceSelection::new(["Individual therapy", "Couples therapy", "Reiki"])
    }

    #[test]
    fn placeholder_when_nothing_selected() {
        let selection = catalogue();
        assert!(selection.selected().is_empty());
        assert_eq!(selection.summary(), SUMMARY_PLACEHOLDER);
        assert_eq!(selection.joined(), "");
    }

    #[test]
    fn summary_keeps_display_order() {
        let mut selection = catalogue();
        selection.set_checked(2, true);
        selection.set_checked(0, true);
        assert_eq!(selection.summary(), "Individual therapy, Reiki");

        selection.set_checked(2, false);
        assert_eq!(selection.selected(), vec!["Individual therapy"]);
    }

    #[test]
    fn reset_checks_only_the_preselected_service() {
        let mut selection = catalogue();
        selection.set_checked(0, true);
        selection.set_checked(1, true);

        selection.reset(Some("Reiki"));
        assert_eq!(selection.selected(), vec!["Reiki"]);

        selection.reset(Some("Aromatherapy"));
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut selection = catalogue();
        selection.set_checked(10, true);
        assert_eq!(selection, catalogue());
    }

    #[test]
    fn panel_toggles() {
        assert!(PanelState::Closed.toggled().is_open());
        assert!(!PanelState::Open.toggled().is_open());
    }
}
