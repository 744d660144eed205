use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

/// Which item is open after `clicked` is pressed. Only one item is open at a time.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={props.is_open.to_string()}
                onclick={toggle}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" hidden={!props.is_open}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
}

impl PartialEq for FaqProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entries, other.entries)
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(next_open(*open, index)))
                };
                html! {
                    <FaqItem
                        key={index.to_string()}
                        question={entry.question}
                        answer={entry.answer}
                        is_open={*open == Some(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let open = next_open(None, 1);
        assert_eq!(open, Some(1));
        assert_eq!(next_open(open, 3), Some(3));
    }

    #[test]
    fn clicking_the_open_item_closes_all() {
        assert_eq!(next_open(Some(2), 2), None);
    }
}
